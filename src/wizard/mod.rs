//! Sign-up wizard controller.
//!
//! [`WizardState`] holds the session and [`WizardState::apply`] is the pure
//! transition function. [`Wizard`] owns one state, feeds it actions, and logs
//! what happened. The presentation layer only ever reads [`Wizard::state`] or a
//! [`WizardSnapshot`] and calls the operations below.

pub mod catalog;
pub mod phone;
pub mod pricing;
pub mod snapshot;
pub mod state;
pub mod types;
pub mod validation;

pub use catalog::{Addon, Plan};
pub use phone::format_phone_number;
pub use pricing::Cadence;
pub use snapshot::{Summary, SummaryLine, WizardSnapshot};
pub use state::WizardState;
pub use types::{PersonalInfo, Step, WizardAction};
pub use validation::{Field, ValidationError, ValidationErrors};

#[cfg(test)]
mod tests;

/// Owner of the in-memory session
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    state: WizardState,
}

impl Wizard {
    pub fn new(cadence: Cadence) -> Self {
        Self {
            state: WizardState::new(cadence),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot::from(&self.state)
    }

    pub fn summary(&self) -> Summary {
        Summary::from(&self.state)
    }

    /// Run one action through the transition function and keep the result
    pub fn dispatch(&mut self, action: WizardAction) -> Result<(), ValidationErrors> {
        let from = self.state.step();
        match self.state.apply(&action) {
            Ok(next) => {
                tracing::debug!(
                    action = action.name(),
                    from = from.number(),
                    to = next.step().number(),
                    "Wizard transition"
                );
                self.state = next;
                Ok(())
            }
            Err(errors) => {
                tracing::info!(
                    action = action.name(),
                    fields = %errors.field_names(),
                    "Personal info rejected"
                );
                Err(errors)
            }
        }
    }

    /// Validate and store contact details; moves step 1 to step 2 on success
    pub fn submit_personal_info(&mut self, info: PersonalInfo) -> Result<(), ValidationErrors> {
        self.dispatch(WizardAction::SubmitPersonalInfo(info))
    }

    pub fn select_plan(&mut self, index: usize) {
        if index >= self.state.plans().len() {
            tracing::warn!(index, "Ignoring plan index outside the catalog");
            return;
        }
        self.dispatch_infallible(WizardAction::SelectPlan(index));
    }

    pub fn toggle_cadence(&mut self) {
        self.dispatch_infallible(WizardAction::ToggleCadence);
    }

    pub fn toggle_addon(&mut self, index: usize) {
        if index >= self.state.addons().len() {
            tracing::warn!(index, "Ignoring add-on index outside the catalog");
            return;
        }
        self.dispatch_infallible(WizardAction::ToggleAddon(index));
    }

    /// Move forward one step, capped at confirmation.
    ///
    /// Leaving step 1 requires stored personal info that still validates.
    pub fn advance(&mut self) -> Result<(), ValidationErrors> {
        self.dispatch(WizardAction::Advance)
    }

    /// Move back one step; no-op on step 1
    pub fn go_back(&mut self) {
        self.dispatch_infallible(WizardAction::GoBack);
    }

    pub fn compute_total(&self) -> u32 {
        self.state.compute_total()
    }

    fn dispatch_infallible(&mut self, action: WizardAction) {
        if let Err(errors) = self.dispatch(action) {
            tracing::error!(%errors, "Unexpected validation failure");
        }
    }
}
