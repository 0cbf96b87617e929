use super::Vars;
use crate::input::GtmInput;
use crate::plan::Risk;
use crate::types::{BudgetLevel, Stage};

const COMMON: &[(&str, &str)] = &[
    (
        "Message Dilution",
        "Hold every asset to the three messaging pillars and review copy against them before it ships.",
    ),
    (
        "Channel Spread",
        "Limit active channels to the plan and cut any channel that misses its benchmark for two consecutive weeks.",
    ),
    (
        "Attribution Gaps",
        "Instrument UTMs, self-reported attribution, and CRM source fields before launch day.",
    ),
];

/// Risks that only apply at a given stage.
pub fn stage_risks(stage: Stage) -> &'static [(&'static str, &'static str)] {
    match stage {
        Stage::Concept => &[
            (
                "Low Brand Trust",
                "Borrow credibility from design partners, advisors, and transparent build-in-public updates.",
            ),
            (
                "Unproven Demand",
                "Gate spend on validated signals such as waitlist conversion and design-partner commitments.",
            ),
        ],
        Stage::Beta => &[(
            "Noisy Beta Feedback",
            "Weight feedback by ICP fit and track requests against the activation metric, not volume.",
        )],
        Stage::Ga => &[(
            "Competitive Response",
            "Prepare battlecards and a rapid-response narrative before competitors react to the launch.",
        )],
        Stage::Scale => &[(
            "Channel Saturation",
            "Watch marginal CAC per channel and open a new channel before the current best one plateaus.",
        )],
    }
}

pub(super) fn risk_mitigation(input: &GtmInput, vars: &Vars) -> Vec<Risk> {
    let mut risks: Vec<Risk> = stage_risks(input.stage)
        .iter()
        .chain(COMMON.iter())
        .map(|(risk, mitigation)| Risk {
            risk: risk.to_string(),
            mitigation: mitigation.to_string(),
        })
        .collect();

    risks.push(Risk {
        risk: "Audience Mismatch".to_string(),
        mitigation: vars.fill(
            "Re-qualify every early deal against the ICP ({audience}) and feed misfits back into targeting.",
        ),
    });

    if input.budget_level == BudgetLevel::Lean {
        risks.push(Risk {
            risk: "Team Bandwidth".to_string(),
            mitigation: "Automate reporting and repurpose each asset across at least three channels.".to_string(),
        });
    }
    risks
}
