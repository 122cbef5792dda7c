//! Fixed plan and add-on catalog

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::pricing::{AddonState, Priced};

/// Plans offered on the plan step: (name, monthly price, yearly price)
pub const PLAN_CATALOG: &[(&str, u32, u32)] = &[
    ("Arcade", 9, 90),
    ("Advanced", 12, 120),
    ("Pro", 15, 150),
];

/// Add-ons offered on the add-on step: (name, description, monthly price, yearly price)
pub const ADDON_CATALOG: &[(&str, &str, u32, u32)] = &[
    ("Online service", "Access to multiplayer games", 1, 10),
    ("Larger storage", "Extra 1TB of cloud save", 2, 20),
    (
        "Customizable profile",
        "Custom theme on your profile",
        2,
        20,
    ),
];

/// A subscription plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub name: String,
    pub monthly_price: u32,
    pub yearly_price: u32,
}

impl Plan {
    /// Lowercase, dash-separated name used on the command line
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

impl Priced for Plan {
    fn monthly_price(&self) -> u32 {
        self.monthly_price
    }

    fn yearly_price(&self) -> u32 {
        self.yearly_price
    }
}

/// An optional paid feature, toggled independently of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub name: String,
    pub description: String,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub is_active: bool,
}

impl Addon {
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

impl Priced for Addon {
    fn monthly_price(&self) -> u32 {
        self.monthly_price
    }

    fn yearly_price(&self) -> u32 {
        self.yearly_price
    }
}

impl AddonState for Addon {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// All plans, in display order
pub fn plans() -> Vec<Plan> {
    PLAN_CATALOG
        .iter()
        .map(|(name, monthly, yearly)| Plan {
            name: (*name).to_string(),
            monthly_price: *monthly,
            yearly_price: *yearly,
        })
        .collect()
}

/// All add-ons, in display order, none active
pub fn addons() -> Vec<Addon> {
    ADDON_CATALOG
        .iter()
        .map(|(name, description, monthly, yearly)| Addon {
            name: (*name).to_string(),
            description: (*description).to_string(),
            monthly_price: *monthly,
            yearly_price: *yearly,
            is_active: false,
        })
        .collect()
}

/// Index of the plan whose name or slug matches `query` (case-insensitive)
pub fn find_plan_index(query: &str) -> Option<usize> {
    let wanted = slugify(query);
    PLAN_CATALOG
        .iter()
        .position(|(name, _, _)| slugify(name) == wanted)
}

/// Index of the add-on whose name or slug matches `query` (case-insensitive)
pub fn find_addon_index(query: &str) -> Option<usize> {
    let wanted = slugify(query);
    ADDON_CATALOG
        .iter()
        .position(|(name, _, _, _)| slugify(name) == wanted)
}

fn slugify(name: &str) -> String {
    name.trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
