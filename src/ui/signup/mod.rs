//! Interactive sign-up screen driving the wizard controller

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{widgets::ListState, Frame};

use crate::ui::form_field::PersonalInfoForm;
use crate::wizard::{Cadence, Step, Wizard};

pub mod steps;
pub mod types;

pub use types::*;


/// Full-screen sign-up flow
pub struct SignupScreen {
    /// The controller; the screen never edits wizard state directly
    pub(crate) wizard: Wizard,
    /// Inputs for step 1
    pub(crate) form: PersonalInfoForm,
    /// List state mirroring the selected plan
    pub(crate) plan_state: ListState,
    /// Cursor on the add-on list
    pub(crate) addon_state: ListState,
    /// Direction of the last step change, for the sidebar marker
    pub(crate) last_transition: Transition,
}

impl SignupScreen {
    pub fn new(default_cadence: Cadence) -> Self {
        let wizard = Wizard::new(default_cadence);

        let mut plan_state = ListState::default();
        plan_state.select(Some(wizard.state().selected_plan_index()));

        let mut addon_state = ListState::default();
        addon_state.select(Some(0));

        Self {
            wizard,
            form: PersonalInfoForm::new(),
            plan_state,
            addon_state,
            last_transition: Transition::Stay,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    pub fn last_transition(&self) -> Transition {
        self.last_transition
    }

    /// Route one key press to the current step
    pub fn handle_key(&mut self, key: KeyEvent) -> SignupResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return SignupResult::Cancel;
        }

        match key.code {
            KeyCode::Enter => return self.confirm(),
            KeyCode::Esc => return self.go_back(),
            _ => {}
        }

        match self.step() {
            Step::PersonalInfo => match key.code {
                KeyCode::Tab | KeyCode::Down => self.form.next_field(),
                KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
                code => {
                    self.form.handle_key(code);
                }
            },
            Step::SelectPlan => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Tab | KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    self.toggle_selection();
                }
                _ => {}
            },
            Step::AddOns => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Char(' ') | KeyCode::Tab => self.toggle_selection(),
                _ => {}
            },
            Step::Summary | Step::Confirmation => {}
        }

        SignupResult::Continue
    }

    /// Toggle selection (Space key): cadence on the plan step, add-on on the add-on step
    pub fn toggle_selection(&mut self) {
        match self.step() {
            Step::SelectPlan => self.wizard.toggle_cadence(),
            Step::AddOns => {
                if let Some(i) = self.addon_state.selected() {
                    self.wizard.toggle_addon(i);
                }
            }
            _ => {}
        }
    }

    /// Move to next item in list
    pub fn select_next(&mut self) {
        match self.step() {
            Step::SelectPlan => {
                let len = self.wizard.state().plans().len();
                let i = (self.wizard.state().selected_plan_index() + 1) % len;
                self.wizard.select_plan(i);
                self.plan_state.select(Some(i));
            }
            Step::AddOns => {
                let len = self.wizard.state().addons().len();
                let i = self.addon_state.selected().map_or(0, |i| (i + 1) % len);
                self.addon_state.select(Some(i));
            }
            _ => {}
        }
    }

    /// Move to previous item in list
    pub fn select_prev(&mut self) {
        match self.step() {
            Step::SelectPlan => {
                let len = self.wizard.state().plans().len();
                let current = self.wizard.state().selected_plan_index();
                let i = if current == 0 { len - 1 } else { current - 1 };
                self.wizard.select_plan(i);
                self.plan_state.select(Some(i));
            }
            Step::AddOns => {
                let len = self.wizard.state().addons().len();
                let i =
                    self.addon_state
                        .selected()
                        .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
                self.addon_state.select(Some(i));
            }
            _ => {}
        }
    }

    /// Proceed to next step or finish (Enter key)
    pub fn confirm(&mut self) -> SignupResult {
        let from = self.step();

        let result = match from {
            Step::PersonalInfo => {
                match self.wizard.submit_personal_info(self.form.to_personal_info()) {
                    Ok(()) => self.form.clear_errors(),
                    Err(errors) => self.form.set_errors(&errors),
                }
                SignupResult::Continue
            }
            Step::SelectPlan | Step::AddOns | Step::Summary => {
                if let Err(errors) = self.wizard.advance() {
                    self.form.set_errors(&errors);
                }
                SignupResult::Continue
            }
            Step::Confirmation => SignupResult::Finish(Box::new(self.wizard.snapshot())),
        };

        self.last_transition = Transition::between(from, self.step());
        result
    }

    /// Go back to previous step (Esc key); backing out of step 1 cancels
    pub fn go_back(&mut self) -> SignupResult {
        let from = self.step();
        if from == Step::PersonalInfo {
            return SignupResult::Cancel;
        }

        self.wizard.go_back();
        if self.step() == Step::PersonalInfo {
            // Show the trimmed and re-masked values that were accepted
            self.form = PersonalInfoForm::from_info(self.wizard.state().personal_info());
        }
        self.last_transition = Transition::between(from, self.step());
        SignupResult::Continue
    }

    /// Render the sign-up screen
    pub fn render(&mut self, frame: &mut Frame) {
        let body = self.render_chrome(frame);

        match self.step() {
            Step::PersonalInfo => self.render_personal_info_step(frame, body),
            Step::SelectPlan => self.render_plan_step(frame, body),
            Step::AddOns => self.render_addons_step(frame, body),
            Step::Summary => self.render_summary_step(frame, body),
            Step::Confirmation => self.render_confirmation_step(frame, body),
        }
    }
}
