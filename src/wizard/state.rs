//! Wizard state and the pure transition function

use serde::Serialize;

use super::catalog::{self, Addon, Plan};
use super::pricing::{self, Cadence};
use super::types::{PersonalInfo, Step, WizardAction};
use super::validation::{self, ValidationErrors};

/// Everything the wizard knows about the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    step: Step,
    personal_info: PersonalInfo,
    selected_plan_index: usize,
    cadence: Cadence,
    plans: Vec<Plan>,
    addons: Vec<Addon>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(Cadence::default())
    }
}

impl WizardState {
    /// Fresh session on step 1 with the first plan selected and no add-ons
    pub fn new(cadence: Cadence) -> Self {
        Self {
            step: Step::FIRST,
            personal_info: PersonalInfo::default(),
            selected_plan_index: 0,
            cadence,
            plans: catalog::plans(),
            addons: catalog::addons(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn selected_plan_index(&self) -> usize {
        self.selected_plan_index
    }

    pub fn selected_plan(&self) -> &Plan {
        &self.plans[self.selected_plan_index]
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn addons(&self) -> &[Addon] {
        &self.addons
    }

    pub fn active_addons(&self) -> impl Iterator<Item = &Addon> {
        self.addons.iter().filter(|a| a.is_active)
    }

    /// Plan price plus active add-ons at the current cadence
    pub fn compute_total(&self) -> u32 {
        pricing::compute_total(self.selected_plan(), &self.addons, self.cadence)
    }

    /// Produce the state that follows `action`, leaving `self` untouched.
    ///
    /// Only personal-info submission and the step-1 advance can fail; an
    /// out-of-range plan or add-on index leaves the state as it was.
    pub fn apply(&self, action: &WizardAction) -> Result<WizardState, ValidationErrors> {
        let mut next = self.clone();

        match action {
            WizardAction::SubmitPersonalInfo(info) => {
                validation::validate_personal_info(info)?;
                next.personal_info = info.normalized();
                if next.step == Step::PersonalInfo {
                    next.step = Step::SelectPlan;
                }
            }
            WizardAction::SelectPlan(index) => {
                if *index < next.plans.len() {
                    next.selected_plan_index = *index;
                }
            }
            WizardAction::ToggleCadence => {
                next.cadence = next.cadence.toggled();
            }
            WizardAction::ToggleAddon(index) => {
                if let Some(addon) = next.addons.get_mut(*index) {
                    addon.is_active = !addon.is_active;
                }
            }
            WizardAction::Advance => {
                if next.step == Step::PersonalInfo {
                    validation::validate_personal_info(&next.personal_info)?;
                }
                next.step = next.step.next();
            }
            WizardAction::GoBack => {
                next.step = next.step.prev();
            }
        }

        Ok(next)
    }
}
