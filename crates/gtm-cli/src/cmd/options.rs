use crate::output::{print_json, print_option_groups, OptionGroup};
use gtm_core::options::catalog;

pub fn run(json: bool) -> anyhow::Result<()> {
    let c = catalog();
    if json {
        return print_json(&c);
    }

    print_option_groups(&[
        OptionGroup {
            field: "stage",
            default: Some(c.defaults.stage.as_str()),
            entries: &c.stages,
        },
        OptionGroup {
            field: "budgetLevel",
            default: Some(c.defaults.budget_level.as_str()),
            entries: &c.budget_levels,
        },
        OptionGroup {
            field: "launchTimeline",
            default: Some(c.defaults.launch_timeline.as_str()),
            entries: &c.launch_timelines,
        },
        OptionGroup {
            field: "focusAreas",
            default: None,
            entries: &c.focus_areas,
        },
    ]);
    Ok(())
}
