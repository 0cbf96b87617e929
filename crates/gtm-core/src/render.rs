//! Markdown rendering of a plan, one labeled group per section.

use std::fmt::Write;

use crate::plan::GtmPlan;

pub const PLACEHOLDER_TITLE: &str = "Your GTM blueprint will appear here";
pub const PLACEHOLDER_BODY: &str = "Fill in the product context and the agent will architect a \
full-funnel launch strategy with channel plays, content factory, growth experiments, and risk \
guardrails.";

/// Section labels in display order.
pub const SECTION_LABELS: [&str; 11] = [
    "Executive Summary",
    "Objectives",
    "Audience Intelligence",
    "Messaging Pillars",
    "Channel Battleplan",
    "Launch Timeline",
    "Content Factory",
    "Growth Experiments",
    "Measurement Framework",
    "Risk & Mitigation",
    "Next Agentic Steps",
];

/// Render `plan` under a `"{product_name} Launch Command"` heading, or the
/// placeholder when there is no plan yet.
pub fn render_markdown(product_name: &str, plan: Option<&GtmPlan>) -> String {
    let Some(plan) = plan else {
        return format!("## {PLACEHOLDER_TITLE}\n\n{PLACEHOLDER_BODY}\n");
    };

    let mut out = String::new();
    let _ = writeln!(out, "# {product_name} Launch Command");

    section(&mut out, SECTION_LABELS[0]);
    bullets(&mut out, &plan.executive_summary);

    section(&mut out, SECTION_LABELS[1]);
    bullets(&mut out, &plan.key_objectives);

    section(&mut out, SECTION_LABELS[2]);
    bullets(&mut out, &plan.audience_profile);

    section(&mut out, SECTION_LABELS[3]);
    for p in &plan.messaging_pillars {
        let _ = writeln!(out, "### {}\n", p.pillar);
        bullets(&mut out, &p.proof_points);
    }

    section(&mut out, SECTION_LABELS[4]);
    for c in &plan.channel_plan {
        let _ = writeln!(out, "### {} ({})\n", c.name, c.cadence);
        let _ = writeln!(out, "{}\n", c.objective);
        bullets(&mut out, &c.plays);
    }

    section(&mut out, SECTION_LABELS[5]);
    for p in &plan.launch_timeline {
        let _ = writeln!(out, "### {} ({})\n", p.phase, p.duration);
        let _ = writeln!(out, "**Objectives**\n");
        bullets(&mut out, &p.objectives);
        let _ = writeln!(out, "**Tactics**\n");
        bullets(&mut out, &p.tactics);
    }

    section(&mut out, SECTION_LABELS[6]);
    for t in &plan.content_factory {
        let _ = writeln!(out, "### {}\n", t.theme);
        let _ = writeln!(out, "**Anchor Assets**\n");
        bullets(&mut out, &t.assets);
        let _ = writeln!(out, "**Distribution**\n");
        bullets(&mut out, &t.distribution);
    }

    section(&mut out, SECTION_LABELS[7]);
    for e in &plan.growth_experiments {
        let _ = writeln!(out, "### {}\n", e.name);
        let _ = writeln!(out, "- **Hypothesis:** {}", e.hypothesis);
        let _ = writeln!(out, "- **Metric:** {}", e.metric);
        let _ = writeln!(out, "- **Owner:** {}\n", e.owner);
    }

    section(&mut out, SECTION_LABELS[8]);
    bullets(&mut out, &plan.measurement_framework);

    section(&mut out, SECTION_LABELS[9]);
    for r in &plan.risk_mitigation {
        let _ = writeln!(out, "### {}\n", r.risk);
        let _ = writeln!(out, "{}\n", r.mitigation);
    }

    section(&mut out, SECTION_LABELS[10]);
    bullets(&mut out, &plan.follow_ups);

    out
}

fn section(out: &mut String, label: &str) {
    let _ = writeln!(out, "\n## {label}\n");
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
    out.push('\n');
}
