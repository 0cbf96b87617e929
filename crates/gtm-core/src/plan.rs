use serde::{Deserialize, Serialize};

/// A synthesized go-to-market plan. Section order follows field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtmPlan {
    pub executive_summary: Vec<String>,
    pub key_objectives: Vec<String>,
    pub audience_profile: Vec<String>,
    pub messaging_pillars: Vec<MessagingPillar>,
    pub channel_plan: Vec<Channel>,
    pub launch_timeline: Vec<Phase>,
    pub content_factory: Vec<ContentTheme>,
    pub growth_experiments: Vec<Experiment>,
    pub measurement_framework: Vec<String>,
    pub risk_mitigation: Vec<Risk>,
    pub follow_ups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingPillar {
    pub pillar: String,
    pub proof_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub cadence: String,
    pub objective: String,
    pub plays: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub phase: String,
    pub duration: String,
    pub objectives: Vec<String>,
    pub tactics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTheme {
    pub theme: String,
    pub assets: Vec<String>,
    pub distribution: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    pub name: String,
    pub hypothesis: String,
    pub metric: String,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub risk: String,
    pub mitigation: String,
}
