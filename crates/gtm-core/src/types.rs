use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GtmError;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Concept,
    #[default]
    Beta,
    Ga,
    Scale,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[Stage::Concept, Stage::Beta, Stage::Ga, Stage::Scale]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Concept => "concept",
            Stage::Beta => "beta",
            Stage::Ga => "ga",
            Stage::Scale => "scale",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Concept => "Concept / Pre-Beta",
            Stage::Beta => "Private Beta",
            Stage::Ga => "General Availability",
            Stage::Scale => "Scale / Growth Stage",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = GtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concept" => Ok(Stage::Concept),
            "beta" => Ok(Stage::Beta),
            "ga" => Ok(Stage::Ga),
            "scale" => Ok(Stage::Scale),
            _ => Err(GtmError::InvalidOption {
                field: "stage",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// BudgetLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    Lean,
    #[default]
    Balanced,
    Aggressive,
}

impl BudgetLevel {
    pub fn all() -> &'static [BudgetLevel] {
        &[
            BudgetLevel::Lean,
            BudgetLevel::Balanced,
            BudgetLevel::Aggressive,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BudgetLevel::Lean => "lean",
            BudgetLevel::Balanced => "balanced",
            BudgetLevel::Aggressive => "aggressive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetLevel::Lean => "Lean (scrappy, <$10k/month)",
            BudgetLevel::Balanced => "Balanced (mix of organic + paid)",
            BudgetLevel::Aggressive => "Aggressive (multi-channel, high spend)",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BudgetLevel {
    type Err = GtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lean" => Ok(BudgetLevel::Lean),
            "balanced" => Ok(BudgetLevel::Balanced),
            "aggressive" => Ok(BudgetLevel::Aggressive),
            _ => Err(GtmError::InvalidOption {
                field: "budgetLevel",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchTimeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchTimeline {
    #[serde(rename = "2-weeks")]
    TwoWeeks,
    #[serde(rename = "1-month")]
    OneMonth,
    #[default]
    #[serde(rename = "quarter")]
    Quarter,
    #[serde(rename = "half-year")]
    HalfYear,
}

impl LaunchTimeline {
    pub fn all() -> &'static [LaunchTimeline] {
        &[
            LaunchTimeline::TwoWeeks,
            LaunchTimeline::OneMonth,
            LaunchTimeline::Quarter,
            LaunchTimeline::HalfYear,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LaunchTimeline::TwoWeeks => "2-weeks",
            LaunchTimeline::OneMonth => "1-month",
            LaunchTimeline::Quarter => "quarter",
            LaunchTimeline::HalfYear => "half-year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LaunchTimeline::TwoWeeks => "Lightning (under 2 weeks)",
            LaunchTimeline::OneMonth => "Fast (1 month)",
            LaunchTimeline::Quarter => "Quarterly Horizon",
            LaunchTimeline::HalfYear => "6 Month Horizon",
        }
    }
}

impl fmt::Display for LaunchTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LaunchTimeline {
    type Err = GtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2-weeks" => Ok(LaunchTimeline::TwoWeeks),
            "1-month" => Ok(LaunchTimeline::OneMonth),
            "quarter" => Ok(LaunchTimeline::Quarter),
            "half-year" => Ok(LaunchTimeline::HalfYear),
            _ => Err(GtmError::InvalidOption {
                field: "launchTimeline",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// FocusArea
// ---------------------------------------------------------------------------

/// Focus tags the synthesizer knows how to emphasise. Input focus areas are
/// free-form strings; tags outside this set are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Positioning,
    Enablement,
    Lifecycle,
    Experimentation,
}

impl FocusArea {
    pub fn all() -> &'static [FocusArea] {
        &[
            FocusArea::Positioning,
            FocusArea::Enablement,
            FocusArea::Lifecycle,
            FocusArea::Experimentation,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FocusArea::Positioning => "positioning",
            FocusArea::Enablement => "enablement",
            FocusArea::Lifecycle => "lifecycle",
            FocusArea::Experimentation => "experimentation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusArea::Positioning => "Positioning & Narrative",
            FocusArea::Enablement => "Revenue Enablement",
            FocusArea::Lifecycle => "Lifecycle & Activation",
            FocusArea::Experimentation => "Experimentation Velocity",
        }
    }

    /// Match a free-form tag, ignoring case and surrounding whitespace.
    pub fn from_tag(tag: &str) -> Option<FocusArea> {
        let tag = tag.trim();
        FocusArea::all()
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
