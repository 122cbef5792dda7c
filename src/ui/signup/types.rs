//! Type definitions for the sign-up screen

use std::cmp::Ordering;

use crate::wizard::{Step, WizardSnapshot};

/// Result of sign-up screen actions
#[derive(Debug, Clone)]
pub enum SignupResult {
    /// Stay on the screen
    Continue,
    /// User backed out of step 1 or pressed Ctrl-C
    Cancel,
    /// User acknowledged the confirmation step
    Finish(Box<WizardSnapshot>),
}

/// Which way the last action moved the wizard; drives the sidebar marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    Stay,
    Forward,
    Backward,
}

impl Transition {
    pub fn between(from: Step, to: Step) -> Self {
        match to.cmp(&from) {
            Ordering::Greater => Transition::Forward,
            Ordering::Less => Transition::Backward,
            Ordering::Equal => Transition::Stay,
        }
    }

    /// Glyph drawn beside the active sidebar entry
    pub fn marker(self) -> &'static str {
        match self {
            Transition::Stay => "●",
            Transition::Forward => "▼",
            Transition::Backward => "▲",
        }
    }
}

/// Key hints shown in the footer: (key, action)
pub fn footer_hints(step: Step) -> &'static [(&'static str, &'static str)] {
    match step {
        Step::PersonalInfo => &[
            ("Tab", "next field"),
            ("Enter", "next step"),
            ("Esc", "quit"),
        ],
        Step::SelectPlan => &[
            ("↑/↓", "choose plan"),
            ("Space", "monthly/yearly"),
            ("Enter", "next step"),
            ("Esc", "go back"),
        ],
        Step::AddOns => &[
            ("↑/↓", "move"),
            ("Space", "toggle add-on"),
            ("Enter", "next step"),
            ("Esc", "go back"),
        ],
        Step::Summary => &[("Enter", "confirm"), ("Esc", "go back")],
        Step::Confirmation => &[("Enter", "finish"), ("Esc", "go back")],
    }
}
