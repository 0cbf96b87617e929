use super::{known_focus, Vars};
use crate::input::GtmInput;
use crate::plan::MessagingPillar;
use crate::types::{FocusArea, Stage};

const OUTCOME_PROOF: &[&str] = &[
    "{product} {description}.",
    "Quantify the before/after for {audience} in hours saved, revenue gained, or risk removed.",
    "Anchor every claim to the north star: {goal}.",
];

const URGENCY_PROOF: &[&str] = &[
    "Frame the cost of inaction: every quarter without {product} compounds the pain.",
    "Tie the launch window ({timeline}) to a concrete incentive or cohort deadline.",
    "Show momentum with a visible counter of teams already on board.",
];

fn trust_proof(stage: Stage) -> &'static [&'static str] {
    match stage {
        Stage::Concept => &[
            "Lead with founder credibility and the depth of problem research.",
            "Publish design-partner quotes as they commit, even before results land.",
            "Be transparent about the roadmap and what {product} does not do yet.",
        ],
        Stage::Beta => &[
            "Share early beta metrics with named accounts where permitted.",
            "Turn the strongest beta users into on-record champions.",
            "Show the feedback loop: what changed in {product} because of users.",
        ],
        Stage::Ga => &[
            "Feature case studies with quantified outcomes from {audience}.",
            "Display security, compliance, and integration credentials up front.",
            "Offer a risk-free pilot with clear success criteria.",
        ],
        Stage::Scale => &[
            "Lead with scale proof: customer count, logos, and analyst recognition.",
            "Publish benchmark data that only a product at scale can produce.",
            "Use peer references in the buyer's exact segment.",
        ],
    }
}

pub(super) fn messaging_pillars(input: &GtmInput, vars: &Vars) -> Vec<MessagingPillar> {
    let mut pillars = vec![
        MessagingPillar {
            pillar: "Differentiated Outcome".to_string(),
            proof_points: vars.fill_all(OUTCOME_PROOF),
        },
        MessagingPillar {
            pillar: "Proof & Trust".to_string(),
            proof_points: vars.fill_all(trust_proof(input.stage)),
        },
        MessagingPillar {
            pillar: "Urgency to Act".to_string(),
            proof_points: vars.fill_all(URGENCY_PROOF),
        },
    ];

    if known_focus(input).contains(&FocusArea::Positioning) {
        pillars[0].proof_points.push(vars.fill(
            "Name the category {product} is redefining and the old way it replaces.",
        ));
    }
    pillars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_pillars_in_fixed_order() {
        let input = GtmInput::default();
        let vars = Vars::from_input(&input);
        let names: Vec<String> = messaging_pillars(&input, &vars)
            .into_iter()
            .map(|p| p.pillar)
            .collect();
        assert_eq!(names, ["Differentiated Outcome", "Proof & Trust", "Urgency to Act"]);
    }

    #[test]
    fn trust_evidence_tracks_stage() {
        assert_ne!(trust_proof(Stage::Concept), trust_proof(Stage::Scale));
    }

    #[test]
    fn positioning_focus_adds_category_point() {
        let input = GtmInput {
            product_name: "Atlas".into(),
            focus_areas: vec!["positioning".into()],
            ..GtmInput::default()
        };
        let vars = Vars::from_input(&input);
        let pillars = messaging_pillars(&input, &vars);
        assert!(pillars[0]
            .proof_points
            .iter()
            .any(|p| p.contains("category Atlas is redefining")));
    }
}
