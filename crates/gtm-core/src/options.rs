use serde::Serialize;

use crate::input::GtmInput;
use crate::types::{BudgetLevel, FocusArea, LaunchTimeline, Stage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
}

/// Everything a form needs to offer the valid choices for each field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalog {
    pub stages: Vec<OptionEntry>,
    pub budget_levels: Vec<OptionEntry>,
    pub launch_timelines: Vec<OptionEntry>,
    pub focus_areas: Vec<OptionEntry>,
    pub defaults: GtmInput,
    pub example: GtmInput,
}

pub fn catalog() -> OptionCatalog {
    OptionCatalog {
        stages: Stage::all()
            .iter()
            .map(|s| OptionEntry {
                value: s.as_str(),
                label: s.label(),
            })
            .collect(),
        budget_levels: BudgetLevel::all()
            .iter()
            .map(|b| OptionEntry {
                value: b.as_str(),
                label: b.label(),
            })
            .collect(),
        launch_timelines: LaunchTimeline::all()
            .iter()
            .map(|t| OptionEntry {
                value: t.as_str(),
                label: t.label(),
            })
            .collect(),
        focus_areas: FocusArea::all()
            .iter()
            .map(|f| OptionEntry {
                value: f.as_str(),
                label: f.label(),
            })
            .collect(),
        defaults: GtmInput::default(),
        example: example_input(),
    }
}

/// A filled-in input used to pre-populate the form.
pub fn example_input() -> GtmInput {
    GtmInput {
        product_name: "Atlas IQ Copilot".to_string(),
        product_description: "orchestrates customer research, insight synthesis, and activation workflows with AI agents".to_string(),
        target_audience: "Heads of Product Marketing at PLG SaaS companies scaling from Series A to Series C".to_string(),
        stage: Stage::Ga,
        budget_level: BudgetLevel::Balanced,
        launch_timeline: LaunchTimeline::Quarter,
        brand_voice: "Modern, insight-led, customer-obsessed tone with punchy confidence and proof".to_string(),
        adoption_goal: "Land 30 lighthouse customers and $1M ARR in 2 quarters".to_string(),
        focus_areas: vec![
            FocusArea::Positioning.as_str().to_string(),
            FocusArea::Enablement.as_str().to_string(),
            FocusArea::Experimentation.as_str().to_string(),
        ],
    }
}
