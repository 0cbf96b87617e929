//! Plan synthesis.
//!
//! [`generate_plan`] is a pure function of its input: every section is built
//! by picking a constant template record (keyed by stage, budget or timeline)
//! and filling its `{placeholders}` from the input's free-text fields.

mod channels;
mod content;
mod experiments;
mod pillars;
mod risks;
mod timeline;

pub use channels::{channel_table, ChannelTemplate};
pub use content::{content_table, ContentTemplate};
pub use experiments::{experiment_table, ExperimentTemplate};
pub use risks::stage_risks;
pub use timeline::{phase_table, PhaseTemplate};

use crate::input::GtmInput;
use crate::plan::GtmPlan;
use crate::types::{FocusArea, Stage};

/// Build the full plan for a normalized input. Never fails.
pub fn generate_plan(input: &GtmInput) -> GtmPlan {
    let vars = Vars::from_input(input);
    tracing::debug!(
        product = %input.product_name,
        stage = %input.stage,
        budget = %input.budget_level,
        timeline = %input.launch_timeline,
        "synthesizing plan"
    );

    GtmPlan {
        executive_summary: executive_summary(input, &vars),
        key_objectives: key_objectives(input, &vars),
        audience_profile: audience_profile(input, &vars),
        messaging_pillars: pillars::messaging_pillars(input, &vars),
        channel_plan: channels::channel_plan(input, &vars),
        launch_timeline: timeline::launch_timeline(input, &vars),
        content_factory: content::content_factory(input, &vars),
        growth_experiments: experiments::growth_experiments(input, &vars),
        measurement_framework: measurement_framework(input, &vars),
        risk_mitigation: risks::risk_mitigation(input, &vars),
        follow_ups: follow_ups(input, &vars),
    }
}

// ---------------------------------------------------------------------------
// Template variables
// ---------------------------------------------------------------------------

/// Substitution values for `{name}` placeholders in section templates.
pub(crate) struct Vars<'a> {
    product: &'a str,
    description: &'a str,
    audience: &'a str,
    voice: &'a str,
    goal: &'a str,
    budget: &'static str,
    timeline: &'static str,
}

impl<'a> Vars<'a> {
    fn from_input(input: &'a GtmInput) -> Self {
        Self {
            product: &input.product_name,
            description: clause(&input.product_description),
            audience: clause(&input.target_audience),
            voice: clause(&input.brand_voice),
            goal: clause(&input.adoption_goal),
            budget: input.budget_level.as_str(),
            timeline: input.launch_timeline.label(),
        }
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            "product" => Some(self.product),
            "description" => Some(self.description),
            "audience" => Some(self.audience),
            "voice" => Some(self.voice),
            "goal" => Some(self.goal),
            "budget" => Some(self.budget),
            "timeline" => Some(self.timeline),
            _ => None,
        }
    }

    /// Fill every known `{key}` in `template` in a single pass. Unknown keys
    /// and unmatched braces are copied through, and substituted text is
    /// never re-scanned.
    pub(crate) fn fill(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 64);
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => match self.lookup(&after[..close]) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[close + 1..];
                    }
                    None => {
                        out.push('{');
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    pub(crate) fn fill_all(&self, templates: &[&str]) -> Vec<String> {
        templates.iter().map(|t| self.fill(t)).collect()
    }
}

/// Free text as a clause: one trailing `.`, `!` or `?` is dropped because
/// templates supply their own sentence punctuation.
fn clause(text: &str) -> &str {
    text.strip_suffix(['.', '!', '?']).unwrap_or(text)
}

/// Known focus areas in input order, deduplicated.
pub(crate) fn known_focus(input: &GtmInput) -> Vec<FocusArea> {
    let mut seen = Vec::new();
    for tag in &input.focus_areas {
        if let Some(f) = FocusArea::from_tag(tag) {
            if !seen.contains(&f) {
                seen.push(f);
            }
        }
    }
    seen
}

/// Focus tags that do not map to a known focus area, trimmed and non-empty.
/// Case variants collapse onto the first spelling seen.
fn custom_focus(input: &GtmInput) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for tag in input.focus_areas.iter().map(|t| t.trim()) {
        if tag.is_empty() || FocusArea::from_tag(tag).is_some() {
            continue;
        }
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(tag)) {
            seen.push(tag);
        }
    }
    seen
}

// ---------------------------------------------------------------------------
// Narrative sections
// ---------------------------------------------------------------------------

fn executive_summary(input: &GtmInput, vars: &Vars) -> Vec<String> {
    let stage_line = match input.stage {
        Stage::Concept => "Validate the problem and earn the right to launch: {product} is still proving demand, so every motion doubles as discovery.",
        Stage::Beta => "Convert private beta momentum into public proof: {product} has early users whose outcomes become the launch story.",
        Stage::Ga => "Turn general availability into a category moment: {product} is ready for repeatable acquisition and a confident narrative.",
        Stage::Scale => "Compound what already works: {product} has product-market fit, so the plan optimizes efficiency and expands into adjacent segments.",
    };

    let mut summary = vec![
        vars.fill("{product} {description}."),
        vars.fill(stage_line),
        vars.fill("Primary audience: {audience}."),
        vars.fill("North star: {goal}, delivered on a {timeline} plan with a {budget} budget posture."),
        vars.fill("Voice: {voice}."),
    ];

    let focus = known_focus(input);
    if !focus.is_empty() {
        let labels: Vec<&str> = focus.iter().map(|f| f.label()).collect();
        summary.push(format!("Emphasis: {}.", labels.join(", ")));
    }
    summary
}

fn key_objectives(input: &GtmInput, vars: &Vars) -> Vec<String> {
    let mut objectives = Vec::new();

    // Focus-specific objectives lead so the emphasis reads first.
    for focus in known_focus(input) {
        let line = match focus {
            FocusArea::Positioning => "Lock a differentiated positioning statement for {product} that {audience} repeat back unprompted.",
            FocusArea::Enablement => "Equip sales and success teams with talk tracks, demos, and objection handling for {product} before launch day.",
            FocusArea::Lifecycle => "Design an activation path that gets new {product} users to first value within their first session.",
            FocusArea::Experimentation => "Run a weekly experiment cadence with a shared backlog and a decision log for every test.",
        };
        objectives.push(vars.fill(line));
    }

    objectives.push(vars.fill("Hit the north star: {goal}."));
    objectives.push(vars.fill(match input.stage {
        Stage::Concept => "Secure 10 design partners who co-create the {product} roadmap and agree to go on record.",
        Stage::Beta => "Graduate the strongest beta accounts into referenceable customers with quantified outcomes.",
        Stage::Ga => "Establish a repeatable pipeline engine with clear stage-to-stage conversion benchmarks.",
        Stage::Scale => "Lower blended CAC while expanding net revenue retention across existing accounts.",
    }));
    objectives.push(vars.fill(
        "Make {product} the obvious choice for {audience} by owning one sharp problem narrative.",
    ));
    objectives.push(vars.fill(
        "Instrument the full funnel so every channel decision is backed by data within the {timeline} window.",
    ));

    for tag in custom_focus(input) {
        objectives.push(format!("Dedicate explicit capacity to the '{tag}' focus area and report on it weekly."));
    }
    objectives
}

fn audience_profile(input: &GtmInput, vars: &Vars) -> Vec<String> {
    let mut profile = vec![
        vars.fill("Ideal customer: {audience}."),
        vars.fill("Job to be done: they hire {product} because it {description}."),
        "Trigger events: new leadership mandates, missed targets, tooling consolidation, or a painful manual workflow reaching breaking point.".to_string(),
        "Buying committee: an economic buyer who owns the outcome, a champion who feels the pain daily, and a technical evaluator who signs off on risk.".to_string(),
        "Watering holes: peer communities, practitioner newsletters, analyst content, and the podcasts they listen to on the way to work.".to_string(),
    ];
    profile.push(
        match input.stage {
            Stage::Concept | Stage::Beta => {
                "Early adopter signal: they tolerate rough edges in exchange for direct influence over the product."
            }
            Stage::Ga | Stage::Scale => {
                "Mainstream signal: they need proof, integrations, and a low-risk rollout path before committing."
            }
        }
        .to_string(),
    );
    profile
}

fn measurement_framework(input: &GtmInput, vars: &Vars) -> Vec<String> {
    let mut metrics = vec![
        vars.fill("North star metric: progress toward {goal}, reviewed weekly."),
        "Acquisition: qualified signups or meetings by channel, with cost per qualified lead.".to_string(),
        "Activation: percentage of new accounts reaching first value within 7 days.".to_string(),
        "Engagement: weekly active accounts and depth of core feature usage.".to_string(),
        "Revenue: pipeline created, win rate, and sales cycle length by segment.".to_string(),
        "Narrative health: message recall and share of voice in target communities.".to_string(),
    ];
    if input.stage >= Stage::Ga {
        metrics.push("Retention: logo and net revenue retention by cohort.".to_string());
    }
    if known_focus(input).contains(&FocusArea::Experimentation) {
        metrics.push("Experiment velocity: tests shipped per week and percentage with a documented decision.".to_string());
    }
    metrics
}

fn follow_ups(input: &GtmInput, vars: &Vars) -> Vec<String> {
    let mut prompts = vec![
        vars.fill("Draft the launch announcement for {product} in the voice: {voice}."),
        vars.fill("Generate three landing page hero variants aimed at {audience}."),
        vars.fill("Build a weekly GTM scorecard that tracks progress toward {goal}."),
    ];
    for focus in known_focus(input) {
        let prompt = match focus {
            FocusArea::Positioning => "Run a positioning workshop brief comparing {product} against the top three alternatives.",
            FocusArea::Enablement => "Produce a sales battlecard and a 10-minute demo script for {product}.",
            FocusArea::Lifecycle => "Map the onboarding email and in-app sequence for the first 14 days.",
            FocusArea::Experimentation => "Prioritize the experiment backlog with ICE scoring and schedule the first two tests.",
        };
        prompts.push(vars.fill(prompt));
    }
    prompts.push("Schedule a launch retro to compare results against this plan.".to_string());
    prompts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
