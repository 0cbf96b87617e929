use super::{known_focus, Vars};
use crate::input::GtmInput;
use crate::plan::Phase;
use crate::types::{FocusArea, LaunchTimeline};

/// A launch phase before interpolation.
#[derive(Debug)]
pub struct PhaseTemplate {
    pub phase: &'static str,
    pub duration: &'static str,
    pub objectives: &'static [&'static str],
    pub tactics: &'static [&'static str],
}

const TWO_WEEKS: &[PhaseTemplate] = &[
    PhaseTemplate {
        phase: "Sprint Prep",
        duration: "Days 1-3",
        objectives: &[
            "Finalize the core message and one hero proof point for {product}.",
            "Stand up a launch page and tracking.",
        ],
        tactics: &[
            "Write the launch narrative in a single working session.",
            "Line up five friendly accounts to amplify on launch day.",
        ],
    },
    PhaseTemplate {
        phase: "Launch Burst",
        duration: "Days 4-8",
        objectives: &["Concentrate attention from {audience} into a single launch window."],
        tactics: &[
            "Ship the announcement across every owned channel on the same day.",
            "Run live demos and answer every comment within the hour.",
        ],
    },
    PhaseTemplate {
        phase: "Rapid Learn",
        duration: "Days 9-14",
        objectives: &["Convert launch attention into activated accounts and lessons."],
        tactics: &[
            "Call every new signup that stalls before first value.",
            "Publish a launch recap with early numbers.",
        ],
    },
];

const ONE_MONTH: &[PhaseTemplate] = &[
    PhaseTemplate {
        phase: "Foundation",
        duration: "Week 1",
        objectives: &[
            "Validate positioning with five conversations with {audience}.",
            "Build launch assets and instrumentation.",
        ],
        tactics: &[
            "Run message testing on the landing page headline.",
            "Prepare a launch kit for partners and early customers.",
        ],
    },
    PhaseTemplate {
        phase: "Launch",
        duration: "Weeks 2-3",
        objectives: &["Create a visible launch moment for {product}."],
        tactics: &[
            "Coordinate announcement, community posts, and email in one week.",
            "Host a live walkthrough with a customer.",
        ],
    },
    PhaseTemplate {
        phase: "Optimize",
        duration: "Week 4",
        objectives: &["Double down on the channels moving toward {goal}."],
        tactics: &[
            "Cut the bottom-performing channel and reinvest.",
            "Turn launch feedback into a prioritized fix list.",
        ],
    },
];

const QUARTER: &[PhaseTemplate] = &[
    PhaseTemplate {
        phase: "Discover & Position",
        duration: "Weeks 1-3",
        objectives: &[
            "Codify the ICP and the pains {audience} feel most acutely.",
            "Finalize messaging pillars and proof points.",
        ],
        tactics: &[
            "Interview 15 target buyers and synthesize themes.",
            "Audit competitor messaging and pick an ownable angle.",
        ],
    },
    PhaseTemplate {
        phase: "Build the Engine",
        duration: "Weeks 4-6",
        objectives: &["Prepare channels, content, and enablement for launch."],
        tactics: &[
            "Produce the launch content kit and sales collateral.",
            "Set up attribution and the weekly GTM scorecard.",
        ],
    },
    PhaseTemplate {
        phase: "Launch",
        duration: "Weeks 7-9",
        objectives: &["Drive awareness and first pipeline for {product}."],
        tactics: &[
            "Execute the coordinated launch across the channel plan.",
            "Run launch-week webinars and customer spotlights.",
        ],
    },
    PhaseTemplate {
        phase: "Scale & Optimize",
        duration: "Weeks 10-13",
        objectives: &["Compound the channels that work toward {goal}."],
        tactics: &[
            "Reallocate budget based on cost per qualified opportunity.",
            "Launch the second wave of experiments from launch learnings.",
        ],
    },
];

const HALF_YEAR: &[PhaseTemplate] = &[
    PhaseTemplate {
        phase: "Research & Strategy",
        duration: "Month 1",
        objectives: &[
            "Build a deep understanding of {audience} and the competitive landscape.",
            "Define positioning, pricing narrative, and launch thesis.",
        ],
        tactics: &[
            "Run 25 customer interviews and a quantitative survey.",
            "Workshop the narrative with leadership and sales.",
        ],
    },
    PhaseTemplate {
        phase: "Pre-Launch Build",
        duration: "Month 2",
        objectives: &["Build assets, channels, and a waitlist for {product}."],
        tactics: &[
            "Open a waitlist with a referral incentive.",
            "Produce the flagship research report and launch video.",
        ],
    },
    PhaseTemplate {
        phase: "Launch",
        duration: "Month 3",
        objectives: &["Deliver a category-defining launch moment."],
        tactics: &[
            "Coordinate press, analysts, events, and paid in one launch window.",
            "Convert the waitlist with a time-boxed onboarding offer.",
        ],
    },
    PhaseTemplate {
        phase: "Expand",
        duration: "Months 4-5",
        objectives: &["Scale acquisition and prove repeatability toward {goal}."],
        tactics: &[
            "Add a second segment adjacent to the core ICP.",
            "Launch a partner program with co-marketing funds.",
        ],
    },
    PhaseTemplate {
        phase: "Optimize & Retain",
        duration: "Month 6",
        objectives: &["Improve efficiency and retention of launched cohorts."],
        tactics: &[
            "Run a cohort retention review and fix the biggest drop-off.",
            "Refresh messaging based on six months of win/loss data.",
        ],
    },
];

/// Phase sequence for a launch horizon.
pub fn phase_table(timeline: LaunchTimeline) -> &'static [PhaseTemplate] {
    match timeline {
        LaunchTimeline::TwoWeeks => TWO_WEEKS,
        LaunchTimeline::OneMonth => ONE_MONTH,
        LaunchTimeline::Quarter => QUARTER,
        LaunchTimeline::HalfYear => HALF_YEAR,
    }
}

pub(super) fn launch_timeline(input: &GtmInput, vars: &Vars) -> Vec<Phase> {
    let experiments = known_focus(input).contains(&FocusArea::Experimentation);
    let table = phase_table(input.launch_timeline);
    table
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let mut tactics = vars.fill_all(t.tactics);
            // The closing phase owns the experiment review.
            if experiments && i + 1 == table.len() {
                tactics.push("Hold an experiment readout and commit the next test batch.".to_string());
            }
            Phase {
                phase: t.phase.to_string(),
                duration: t.duration.to_string(),
                objectives: vars.fill_all(t.objectives),
                tactics,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_horizons_have_at_least_as_many_phases() {
        let counts: Vec<usize> = LaunchTimeline::all()
            .iter()
            .map(|t| phase_table(*t).len())
            .collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
        assert!(phase_table(LaunchTimeline::HalfYear).len() > phase_table(LaunchTimeline::TwoWeeks).len());
    }

    #[test]
    fn durations_differ_between_horizons() {
        let short: Vec<&str> = phase_table(LaunchTimeline::TwoWeeks)
            .iter()
            .map(|p| p.duration)
            .collect();
        let long: Vec<&str> = phase_table(LaunchTimeline::HalfYear)
            .iter()
            .map(|p| p.duration)
            .collect();
        assert!(short.iter().all(|d| !long.contains(d)));
    }

    #[test]
    fn experimentation_focus_extends_last_phase() {
        let input = GtmInput {
            launch_timeline: LaunchTimeline::OneMonth,
            focus_areas: vec!["experimentation".into()],
            ..GtmInput::default()
        };
        let vars = Vars::from_input(&input);
        let phases = launch_timeline(&input, &vars);
        assert!(phases[2]
            .tactics
            .iter()
            .any(|t| t.contains("experiment readout")));
        assert!(!phases[0].tactics.iter().any(|t| t.contains("experiment readout")));
    }
}
