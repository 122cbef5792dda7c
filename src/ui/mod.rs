pub mod form_field;
pub mod layout;
pub mod signup;
pub mod terminal_guard;

pub use signup::{SignupResult, SignupScreen, Transition};
pub use terminal_guard::{install_panic_hook, TerminalGuard};
