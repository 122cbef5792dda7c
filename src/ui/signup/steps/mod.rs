//! Render methods for each sign-up step

mod addons;
mod chrome;
mod confirmation;
mod personal_info;
mod plan;
mod summary;

pub use chrome::SIDEBAR_WIDTH;
