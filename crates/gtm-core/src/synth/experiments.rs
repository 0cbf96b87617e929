use super::Vars;
use crate::input::GtmInput;
use crate::plan::Experiment;
use crate::types::BudgetLevel;

/// An experiment record before interpolation.
#[derive(Debug)]
pub struct ExperimentTemplate {
    pub name: &'static str,
    pub hypothesis: &'static str,
    pub metric: &'static str,
    pub owner: &'static str,
}

const CORE: &[ExperimentTemplate] = &[
    ExperimentTemplate {
        name: "Headline Message Test",
        hypothesis: "An outcome-led headline will convert {audience} better than a feature-led one.",
        metric: "Landing page visitor-to-signup rate",
        owner: "Product Marketing",
    },
    ExperimentTemplate {
        name: "Activation Nudge",
        hypothesis: "A guided first-run checklist will get more {product} accounts to first value in week one.",
        metric: "7-day activation rate",
        owner: "Growth",
    },
];

const BALANCED_EXTRA: &[ExperimentTemplate] = &[ExperimentTemplate {
    name: "Proof-Led Retargeting",
    hypothesis: "Customer story ads will lift demo requests from warm visitors.",
    metric: "Retargeting cost per demo request",
    owner: "Demand Generation",
}];

const AGGRESSIVE_EXTRA: &[ExperimentTemplate] = &[
    ExperimentTemplate {
        name: "Proof-Led Retargeting",
        hypothesis: "Customer story ads will lift demo requests from warm visitors.",
        metric: "Retargeting cost per demo request",
        owner: "Demand Generation",
    },
    ExperimentTemplate {
        name: "ABM Personalization",
        hypothesis: "Personalized microsites will raise meeting rates in tier-one accounts.",
        metric: "Target account meeting rate",
        owner: "Sales & Marketing Ops",
    },
];

/// Experiments scale with spend: every tier runs the core tests and richer
/// budgets add paid and account-based tests on top.
pub fn experiment_table(budget: BudgetLevel) -> Vec<&'static ExperimentTemplate> {
    let extra: &[ExperimentTemplate] = match budget {
        BudgetLevel::Lean => &[],
        BudgetLevel::Balanced => BALANCED_EXTRA,
        BudgetLevel::Aggressive => AGGRESSIVE_EXTRA,
    };
    CORE.iter().chain(extra.iter()).collect()
}

pub(super) fn growth_experiments(input: &GtmInput, vars: &Vars) -> Vec<Experiment> {
    experiment_table(input.budget_level)
        .into_iter()
        .map(|t| Experiment {
            name: t.name.to_string(),
            hypothesis: vars.fill(t.hypothesis),
            metric: t.metric.to_string(),
            owner: t.owner.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experiment_count_scales_with_budget() {
        assert_eq!(experiment_table(BudgetLevel::Lean).len(), 2);
        assert_eq!(experiment_table(BudgetLevel::Balanced).len(), 3);
        assert_eq!(experiment_table(BudgetLevel::Aggressive).len(), 4);
    }

    #[test]
    fn hypotheses_are_interpolated() {
        let input = GtmInput {
            product_name: "Atlas".into(),
            ..GtmInput::default()
        };
        let vars = Vars::from_input(&input);
        let experiments = growth_experiments(&input, &vars);
        assert!(experiments[1].hypothesis.contains("Atlas accounts"));
    }
}
