use super::{known_focus, Vars};
use crate::input::GtmInput;
use crate::plan::Channel;
use crate::types::{BudgetLevel, FocusArea};

/// A channel record before interpolation.
#[derive(Debug)]
pub struct ChannelTemplate {
    pub name: &'static str,
    pub cadence: &'static str,
    pub objective: &'static str,
    pub plays: &'static [&'static str],
}

const LEAN: &[ChannelTemplate] = &[
    ChannelTemplate {
        name: "Founder-Led Social",
        cadence: "3 posts / week",
        objective: "Build credibility with {audience} through build-in-public storytelling.",
        plays: &[
            "Share one customer insight and one product lesson every week.",
            "Turn each {product} release into a short thread with a before/after visual.",
            "Reply to five practitioner conversations a day with genuine expertise.",
        ],
    },
    ChannelTemplate {
        name: "Community Seeding",
        cadence: "Weekly",
        objective: "Earn early champions in the communities {audience} already trust.",
        plays: &[
            "Host a monthly office hours session on the core problem, not the product.",
            "Publish a free template or checklist that solves a slice of the problem.",
            "Recruit five power users to share their {product} workflows.",
        ],
    },
    ChannelTemplate {
        name: "Lifecycle Email",
        cadence: "2 sends / week",
        objective: "Convert signups into activated users without paid spend.",
        plays: &[
            "Ship a 5-email onboarding sequence anchored on the first-value moment.",
            "Send a plain-text founder note to every new account in week one.",
        ],
    },
];

const BALANCED: &[ChannelTemplate] = &[
    ChannelTemplate {
        name: "Content & SEO",
        cadence: "2 pieces / week",
        objective: "Capture high-intent search demand around the problem {product} solves.",
        plays: &[
            "Publish bottom-of-funnel comparison and alternatives pages.",
            "Write one deep guide per month targeting a core pain keyword.",
            "Repurpose every long-form piece into social and newsletter snippets.",
        ],
    },
    ChannelTemplate {
        name: "Paid Social",
        cadence: "Always-on, weekly optimization",
        objective: "Reach lookalikes of {audience} with proof-led creative.",
        plays: &[
            "Test three creative angles: outcome, proof, and urgency.",
            "Retarget site visitors with customer story ads.",
            "Cap spend per channel until cost per qualified lead stabilizes.",
        ],
    },
    ChannelTemplate {
        name: "Partnerships",
        cadence: "Bi-weekly",
        objective: "Borrow distribution from platforms and voices {audience} already follow.",
        plays: &[
            "Co-host two webinars with complementary tools.",
            "List {product} in relevant integration marketplaces.",
        ],
    },
    ChannelTemplate {
        name: "Lifecycle & Nurture",
        cadence: "3 touches / week",
        objective: "Move signups to activation and activated accounts to expansion.",
        plays: &[
            "Segment onboarding by role and use case.",
            "Trigger in-app prompts when accounts stall before first value.",
            "Run a monthly product update digest with customer wins.",
        ],
    },
];

const AGGRESSIVE: &[ChannelTemplate] = &[
    ChannelTemplate {
        name: "Paid Search & Social",
        cadence: "Daily optimization",
        objective: "Dominate high-intent demand for the category {product} leads.",
        plays: &[
            "Bid on category, competitor, and problem keywords with dedicated landing pages.",
            "Run multi-variant creative sprints every two weeks.",
            "Scale budget into the top two channels by cost per opportunity.",
        ],
    },
    ChannelTemplate {
        name: "Account-Based Marketing",
        cadence: "Weekly plays per tier",
        objective: "Penetrate the top 100 target accounts matching {audience}.",
        plays: &[
            "Tier accounts and build personalized microsites for tier one.",
            "Coordinate ads, direct mail, and SDR outreach in synchronized bursts.",
            "Invite executive buyers to an exclusive roundtable.",
        ],
    },
    ChannelTemplate {
        name: "Events & Field",
        cadence: "Monthly flagship, weekly local",
        objective: "Create launch moments that generate pipeline and press.",
        plays: &[
            "Sponsor two industry conferences with a live {product} demo.",
            "Host a virtual launch summit featuring customers and analysts.",
        ],
    },
    ChannelTemplate {
        name: "PR & Analyst Relations",
        cadence: "Bi-weekly",
        objective: "Establish category authority and third-party validation.",
        plays: &[
            "Brief key analysts ahead of launch with proof-backed data.",
            "Pitch a founder narrative and customer outcome story to tier-one press.",
        ],
    },
    ChannelTemplate {
        name: "Content Engine",
        cadence: "Daily",
        objective: "Feed every channel with on-message assets in the voice: {voice}.",
        plays: &[
            "Launch a flagship research report on the state of the problem.",
            "Produce a weekly video series with customers and practitioners.",
            "Syndicate content through paid distribution partners.",
        ],
    },
];

/// Channel mix for a budget posture.
pub fn channel_table(budget: BudgetLevel) -> &'static [ChannelTemplate] {
    match budget {
        BudgetLevel::Lean => LEAN,
        BudgetLevel::Balanced => BALANCED,
        BudgetLevel::Aggressive => AGGRESSIVE,
    }
}

pub(super) fn channel_plan(input: &GtmInput, vars: &Vars) -> Vec<Channel> {
    let focus = known_focus(input);
    channel_table(input.budget_level)
        .iter()
        .map(|t| {
            let mut plays = vars.fill_all(t.plays);
            if focus.contains(&FocusArea::Enablement) {
                plays.push(format!(
                    "Route every {} lead to sales with context on the play that sourced it.",
                    t.name
                ));
            }
            Channel {
                name: t.name.to_string(),
                cadence: t.cadence.to_string(),
                objective: vars.fill(t.objective),
                plays,
            }
        })
        .collect()
}
