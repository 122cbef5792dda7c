//! Type definitions for the sign-up wizard

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::phone::format_phone_number;

/// Contact details collected on the first step
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl PersonalInfo {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Trimmed name and email, phone number re-masked
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: format_phone_number(&self.phone_number),
        }
    }
}

/// One screen of the linear flow
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    TS,
    JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    #[default]
    PersonalInfo,
    SelectPlan,
    AddOns,
    Summary,
    Confirmation,
}

impl Step {
    pub const FIRST: Step = Step::PersonalInfo;
    pub const LAST: Step = Step::Confirmation;

    pub fn all() -> &'static [Step] {
        &[
            Step::PersonalInfo,
            Step::SelectPlan,
            Step::AddOns,
            Step::Summary,
            Step::Confirmation,
        ]
    }

    /// 1-based position in the flow
    pub fn number(self) -> u8 {
        match self {
            Step::PersonalInfo => 1,
            Step::SelectPlan => 2,
            Step::AddOns => 3,
            Step::Summary => 4,
            Step::Confirmation => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Step> {
        Step::all().iter().copied().find(|s| s.number() == number)
    }

    /// Following step, capped at the confirmation step
    pub fn next(self) -> Step {
        Step::from_number(self.number() + 1).unwrap_or(Step::LAST)
    }

    /// Preceding step, floored at the first step
    pub fn prev(self) -> Step {
        Step::from_number(self.number().saturating_sub(1)).unwrap_or(Step::FIRST)
    }

    pub fn is_terminal(self) -> bool {
        self == Step::LAST
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal info",
            Step::SelectPlan => "Select your plan",
            Step::AddOns => "Pick add-ons",
            Step::Summary => "Finishing up",
            Step::Confirmation => "Thank you!",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Please provide your name, email address, and phone number.",
            Step::SelectPlan => "You have the option of monthly or yearly billing.",
            Step::AddOns => "Add-ons help enhance your gaming experience.",
            Step::Summary => "Double-check everything looks OK before confirming.",
            Step::Confirmation => {
                "Thanks for confirming your subscription! We hope you have fun using our platform."
            }
        }
    }

    /// Sidebar label; the confirmation step has none and reuses the summary entry
    pub fn sidebar_label(self) -> &'static str {
        match self {
            Step::PersonalInfo => "YOUR INFO",
            Step::SelectPlan => "SELECT PLAN",
            Step::AddOns => "ADD-ONS",
            Step::Summary | Step::Confirmation => "SUMMARY",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title(), self.number())
    }
}

/// User actions the controller understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    SubmitPersonalInfo(PersonalInfo),
    SelectPlan(usize),
    ToggleCadence,
    ToggleAddon(usize),
    Advance,
    GoBack,
}

impl WizardAction {
    /// Short name for logging; never includes personal data
    pub fn name(&self) -> &'static str {
        match self {
            WizardAction::SubmitPersonalInfo(_) => "submit_personal_info",
            WizardAction::SelectPlan(_) => "select_plan",
            WizardAction::ToggleCadence => "toggle_cadence",
            WizardAction::ToggleAddon(_) => "toggle_addon",
            WizardAction::Advance => "advance",
            WizardAction::GoBack => "go_back",
        }
    }
}
