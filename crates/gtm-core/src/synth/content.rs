use super::{known_focus, Vars};
use crate::input::GtmInput;
use crate::plan::ContentTheme;
use crate::types::{FocusArea, Stage};

/// A content theme before interpolation.
#[derive(Debug)]
pub struct ContentTemplate {
    pub theme: &'static str,
    pub assets: &'static [&'static str],
    pub distribution: &'static [&'static str],
}

const CONCEPT: &[ContentTemplate] = &[
    ContentTemplate {
        theme: "The Problem, Named",
        assets: &[
            "Manifesto post on why the status quo fails {audience}.",
            "Problem-research brief from discovery interviews.",
        ],
        distribution: &["Founder social", "Community threads", "Waitlist email"],
    },
    ContentTemplate {
        theme: "Building in Public",
        assets: &[
            "Bi-weekly build log showing how {product} takes shape.",
            "Design-partner spotlight videos.",
        ],
        distribution: &["Newsletter", "Short-form video", "Community AMAs"],
    },
];

const BETA: &[ContentTemplate] = &[
    ContentTemplate {
        theme: "Early Wins",
        assets: &[
            "Beta user stories with first measurable results.",
            "Before/after workflow teardown of {product} in action.",
        ],
        distribution: &["Blog", "LinkedIn", "Beta community"],
    },
    ContentTemplate {
        theme: "How It Works",
        assets: &[
            "Interactive demo and 3-minute walkthrough video.",
            "FAQ built from real beta objections.",
        ],
        distribution: &["Landing page", "Onboarding email", "Sales follow-ups"],
    },
    ContentTemplate {
        theme: "Point of View",
        assets: &["Opinion essay on where the category is heading, in the voice: {voice}."],
        distribution: &["Guest posts", "Podcasts", "Founder social"],
    },
];

const GA: &[ContentTemplate] = &[
    ContentTemplate {
        theme: "Proof at Launch",
        assets: &[
            "Three quantified case studies from {audience}.",
            "Launch video and product tour.",
            "ROI calculator tied to {goal}.",
        ],
        distribution: &["Launch page", "Paid social", "PR pitch kit"],
    },
    ContentTemplate {
        theme: "Category Education",
        assets: &[
            "Definitive guide to the problem {product} solves.",
            "Comparison pages against the main alternatives.",
        ],
        distribution: &["SEO", "Newsletter", "Sales enablement"],
    },
    ContentTemplate {
        theme: "Customer Voices",
        assets: &["Customer panel webinar and clip library."],
        distribution: &["Webinar", "YouTube", "Social clips"],
    },
];

const SCALE: &[ContentTemplate] = &[
    ContentTemplate {
        theme: "Industry Benchmark",
        assets: &[
            "Annual benchmark report built on {product} usage data.",
            "Segment-specific data cuts for each target vertical.",
        ],
        distribution: &["Analyst briefings", "Press", "Paid syndication"],
    },
    ContentTemplate {
        theme: "Expansion Playbooks",
        assets: &[
            "Advanced use-case playbooks for existing accounts.",
            "Certification course for power users.",
        ],
        distribution: &["In-app", "Customer success", "Community"],
    },
    ContentTemplate {
        theme: "Executive Narrative",
        assets: &["Executive briefing deck on the future of the category."],
        distribution: &["Events", "ABM campaigns", "Executive roundtables"],
    },
];

/// Content themes matched to claim maturity at each stage.
pub fn content_table(stage: Stage) -> &'static [ContentTemplate] {
    match stage {
        Stage::Concept => CONCEPT,
        Stage::Beta => BETA,
        Stage::Ga => GA,
        Stage::Scale => SCALE,
    }
}

pub(super) fn content_factory(input: &GtmInput, vars: &Vars) -> Vec<ContentTheme> {
    let mut themes: Vec<ContentTheme> = content_table(input.stage)
        .iter()
        .map(|t| ContentTheme {
            theme: t.theme.to_string(),
            assets: vars.fill_all(t.assets),
            distribution: t.distribution.iter().map(|d| d.to_string()).collect(),
        })
        .collect();

    if known_focus(input).contains(&FocusArea::Lifecycle) {
        themes.push(ContentTheme {
            theme: "Activation Journey".to_string(),
            assets: vec![
                vars.fill("Onboarding checklist that gets new {product} users to first value."),
                "Milestone emails celebrating each activation step.".to_string(),
            ],
            distribution: vec!["In-app".to_string(), "Lifecycle email".to_string()],
        });
    }
    themes
}
