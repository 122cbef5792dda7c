//! Billing cadence and price lookups

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Promo line shown on plan cards when billing yearly
pub const YEARLY_PROMO: &str = "2 months free";

/// Billing period; selects which price field is read for the plan and every add-on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    #[default]
    Monthly,
    Yearly,
}

impl Cadence {
    /// The other cadence
    pub fn toggled(self) -> Self {
        match self {
            Cadence::Monthly => Cadence::Yearly,
            Cadence::Yearly => Cadence::Monthly,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Cadence::Monthly => "Monthly",
            Cadence::Yearly => "Yearly",
        }
    }

    /// Short unit used in price labels ("mo" / "yr")
    pub fn unit(self) -> &'static str {
        match self {
            Cadence::Monthly => "mo",
            Cadence::Yearly => "yr",
        }
    }

    /// Phrase used for the summary total ("per month" / "per year")
    pub fn period(self) -> &'static str {
        match self {
            Cadence::Monthly => "per month",
            Cadence::Yearly => "per year",
        }
    }

    pub fn is_yearly(self) -> bool {
        matches!(self, Cadence::Yearly)
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cadence::Monthly => write!(f, "monthly"),
            Cadence::Yearly => write!(f, "yearly"),
        }
    }
}

/// Anything carrying a monthly and a yearly price
pub trait Priced {
    fn monthly_price(&self) -> u32;
    fn yearly_price(&self) -> u32;

    /// Price for the given cadence
    fn price(&self, cadence: Cadence) -> u32 {
        match cadence {
            Cadence::Monthly => self.monthly_price(),
            Cadence::Yearly => self.yearly_price(),
        }
    }
}

/// Plan price label, e.g. `$9/mo` or `$90/yr`
pub fn format_price(amount: u32, cadence: Cadence) -> String {
    format!("${}/{}", amount, cadence.unit())
}

/// Add-on price label, e.g. `+$1/mo`
pub fn format_addon_price(amount: u32, cadence: Cadence) -> String {
    format!("+{}", format_price(amount, cadence))
}

/// Plan price plus every active add-on, all read at the same cadence
pub fn compute_total<P, A>(plan: &P, addons: &[A], cadence: Cadence) -> u32
where
    P: Priced,
    A: Priced + AddonState,
{
    let addons_total: u32 = addons
        .iter()
        .filter(|addon| addon.is_active())
        .map(|addon| addon.price(cadence))
        .sum();
    plan.price(cadence) + addons_total
}

/// Activation flag for optional line items
pub trait AddonState {
    fn is_active(&self) -> bool;
}
