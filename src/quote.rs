//! Non-interactive catalog listing and quotes for the CLI subcommands

use anyhow::{bail, Result};

use crate::wizard::catalog::{self, find_addon_index, find_plan_index};
use crate::wizard::pricing::{format_addon_price, Priced};
use crate::wizard::snapshot::plan_card;
use crate::wizard::{Cadence, Summary, Wizard};

const RULE_WIDTH: usize = 40;

/// Build a wizard with the requested plan, cadence and add-ons applied.
///
/// Names match case-insensitively on the display name or its slug
/// (`larger-storage`). Repeating an add-on name selects it once.
pub fn build_quote(plan: Option<&str>, addons: &[String], cadence: Cadence) -> Result<Wizard> {
    let mut wizard = Wizard::new(cadence);

    if let Some(name) = plan {
        let Some(index) = find_plan_index(name) else {
            bail!(
                "Unknown plan '{}' (expected one of: {})",
                name,
                known_names(catalog::plans().iter().map(|p| p.slug()))
            );
        };
        wizard.select_plan(index);
    }

    let mut selected = Vec::new();
    for name in addons {
        let Some(index) = find_addon_index(name) else {
            bail!(
                "Unknown add-on '{}' (expected one of: {})",
                name,
                known_names(catalog::addons().iter().map(|a| a.slug()))
            );
        };
        if !selected.contains(&index) {
            selected.push(index);
            wizard.toggle_addon(index);
        }
    }

    tracing::debug!(
        plan = %wizard.state().selected_plan().name,
        addons = selected.len(),
        cadence = %cadence,
        "Built quote"
    );

    Ok(wizard)
}

fn known_names(names: impl Iterator<Item = String>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// Plain-text rendering of the summary step
pub fn summary_text(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str(&line(&summary.plan.label, &summary.plan.price_label));
    out.push_str(&"─".repeat(RULE_WIDTH));
    out.push('\n');
    if summary.addons.is_empty() {
        out.push_str("No add-ons selected\n");
    }
    for addon in &summary.addons {
        out.push_str(&line(&addon.label, &addon.price_label));
    }
    out.push('\n');
    out.push_str(&line(&summary.total.label, &summary.total.price_label));
    out
}

/// Plans and add-ons with prices for one cadence
pub fn catalog_text(cadence: Cadence) -> String {
    let mut out = format!("Plans ({})\n", cadence.label());
    out.push_str(&"─".repeat(RULE_WIDTH));
    out.push('\n');
    for plan in catalog::plans() {
        let (name, price, promo) = plan_card(&plan, cadence);
        match promo {
            Some(promo) => out.push_str(&format!("{name:<22}{price:>10}  {promo}\n")),
            None => out.push_str(&format!("{name:<22}{price:>10}\n")),
        }
    }

    out.push_str("\nAdd-ons\n");
    out.push_str(&"─".repeat(RULE_WIDTH));
    out.push('\n');
    for addon in catalog::addons() {
        let price = format_addon_price(addon.price(cadence), cadence);
        out.push_str(&format!("{:<22}{:>10}\n", addon.name, price));
        out.push_str(&format!("  {}\n", addon.description));
    }
    out
}

fn line(label: &str, price: &str) -> String {
    format!("{label:<30}{price}\n")
}
