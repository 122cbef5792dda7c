//! Read-only projections handed to the presentation layer

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::catalog::{Addon, Plan};
use super::pricing::{format_addon_price, format_price, Cadence, Priced, YEARLY_PROMO};
use super::state::WizardState;
use super::types::{PersonalInfo, Step};

/// Serializable view of the wizard with derived values filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    /// 1-based step number
    pub step: u8,
    pub step_kind: Step,
    pub personal_info: PersonalInfo,
    pub selected_plan_index: usize,
    pub selected_plan: Plan,
    pub cadence: Cadence,
    pub addons: Vec<Addon>,
    pub total: u32,
}

impl From<&WizardState> for WizardSnapshot {
    fn from(state: &WizardState) -> Self {
        Self {
            step: state.step().number(),
            step_kind: state.step(),
            personal_info: state.personal_info().clone(),
            selected_plan_index: state.selected_plan_index(),
            selected_plan: state.selected_plan().clone(),
            cadence: state.cadence(),
            addons: state.addons().to_vec(),
            total: state.compute_total(),
        }
    }
}

/// One labelled price on the summary step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub label: String,
    pub amount: u32,
    pub price_label: String,
}

/// Everything the summary step displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// e.g. "Arcade (Monthly)" / "$9/mo"
    pub plan: SummaryLine,
    pub addons: Vec<SummaryLine>,
    /// e.g. "Total (per month)" / "+$12/mo"
    pub total: SummaryLine,
}

impl From<&WizardState> for Summary {
    fn from(state: &WizardState) -> Self {
        let cadence = state.cadence();
        let plan = state.selected_plan();
        let plan_price = plan.price(cadence);

        let addons = state
            .active_addons()
            .map(|addon| {
                let amount = addon.price(cadence);
                SummaryLine {
                    label: addon.name.clone(),
                    amount,
                    price_label: format_addon_price(amount, cadence),
                }
            })
            .collect();

        let total = state.compute_total();

        Self {
            plan: SummaryLine {
                label: format!("{} ({})", plan.name, cadence.label()),
                amount: plan_price,
                price_label: format_price(plan_price, cadence),
            },
            addons,
            total: SummaryLine {
                label: format!("Total ({})", cadence.period()),
                amount: total,
                price_label: format_addon_price(total, cadence),
            },
        }
    }
}

/// Plan card text: name, price label, and the yearly promo when it applies
pub fn plan_card(plan: &Plan, cadence: Cadence) -> (String, String, Option<&'static str>) {
    (
        plan.name.clone(),
        format_price(plan.price(cadence), cadence),
        cadence.is_yearly().then_some(YEARLY_PROMO),
    )
}
