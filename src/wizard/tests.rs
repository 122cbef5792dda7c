//! Tests for the wizard controller

use super::*;

fn ann() -> PersonalInfo {
    PersonalInfo::new("Ann", "ann@x.com", "+1 234 567 890")
}

/// Wizard already past step 1
fn wizard_on_plan_step() -> Wizard {
    let mut wizard = Wizard::default();
    wizard.submit_personal_info(ann()).unwrap();
    wizard
}

#[test]
fn test_new_wizard_defaults() {
    let wizard = Wizard::default();
    let state = wizard.state();

    assert_eq!(state.step(), Step::PersonalInfo);
    assert_eq!(state.step().number(), 1);
    assert_eq!(state.selected_plan_index(), 0);
    assert_eq!(state.selected_plan().name, "Arcade");
    assert_eq!(state.cadence(), Cadence::Monthly);
    assert_eq!(state.active_addons().count(), 0);
    assert_eq!(wizard.compute_total(), 9);
}

#[test]
fn test_new_wizard_respects_default_cadence() {
    let wizard = Wizard::new(Cadence::Yearly);
    assert_eq!(wizard.state().cadence(), Cadence::Yearly);
    assert_eq!(wizard.compute_total(), 90);
}

// ─── Personal Info Submission ───────────────────────────────────────────────

#[test]
fn test_submit_empty_name_fails_and_stays_on_step_one() {
    let mut wizard = Wizard::default();
    let result =
        wizard.submit_personal_info(PersonalInfo::new("", "a@b.com", "+1 234 567 890"));

    let errors = result.unwrap_err();
    assert!(errors.contains(Field::Name));
    assert!(!errors.contains(Field::Email));
    assert!(!errors.contains(Field::PhoneNumber));
    assert_eq!(wizard.step().number(), 1);
    assert_eq!(wizard.state().personal_info(), &PersonalInfo::default());
}

#[test]
fn test_submit_valid_info_advances_to_step_two() {
    let mut wizard = Wizard::default();
    assert!(wizard.submit_personal_info(ann()).is_ok());
    assert_eq!(wizard.step().number(), 2);
    assert_eq!(wizard.state().personal_info().name, "Ann");
}

#[test]
fn test_submit_normalizes_stored_info() {
    let mut wizard = Wizard::default();
    wizard
        .submit_personal_info(PersonalInfo::new("  Ann ", " ann@x.com", "1234567890"))
        .unwrap();

    let info = wizard.state().personal_info();
    assert_eq!(info.name, "Ann");
    assert_eq!(info.email, "ann@x.com");
    assert_eq!(info.phone_number, "+1 234 567 890");
}

#[test]
fn test_resubmit_on_later_step_keeps_step() {
    let mut wizard = wizard_on_plan_step();
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), Step::AddOns);

    wizard
        .submit_personal_info(PersonalInfo::new("Bob", "bob@x.com", "+4 444 555 666"))
        .unwrap();
    assert_eq!(wizard.step(), Step::AddOns);
    assert_eq!(wizard.state().personal_info().name, "Bob");
}

// ─── Step Navigation ────────────────────────────────────────────────────────

#[test]
fn test_go_back_on_step_one_is_noop() {
    let mut wizard = Wizard::default();
    wizard.go_back();
    assert_eq!(wizard.step().number(), 1);
}

#[test]
fn test_advance_from_step_one_requires_valid_info() {
    let mut wizard = Wizard::default();
    let errors = wizard.advance().unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(wizard.step(), Step::PersonalInfo);
}

#[test]
fn test_advance_from_step_one_after_going_back() {
    let mut wizard = wizard_on_plan_step();
    wizard.go_back();
    assert_eq!(wizard.step(), Step::PersonalInfo);

    wizard.advance().unwrap();
    assert_eq!(wizard.step(), Step::SelectPlan);
}

#[test]
fn test_advance_moves_one_step_and_caps_at_confirmation() {
    let mut wizard = wizard_on_plan_step();
    let mut seen = vec![wizard.step().number()];

    for _ in 0..6 {
        wizard.advance().unwrap();
        seen.push(wizard.step().number());
    }

    assert_eq!(seen, vec![2, 3, 4, 5, 5, 5, 5]);
    assert!(wizard.step().is_terminal());
}

#[test]
fn test_go_back_moves_one_step() {
    let mut wizard = wizard_on_plan_step();
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), Step::Summary);

    wizard.go_back();
    assert_eq!(wizard.step(), Step::AddOns);
    wizard.go_back();
    assert_eq!(wizard.step(), Step::SelectPlan);
    wizard.go_back();
    assert_eq!(wizard.step(), Step::PersonalInfo);
    wizard.go_back();
    assert_eq!(wizard.step(), Step::PersonalInfo);
}

#[test]
fn test_selections_persist_across_steps() {
    let mut wizard = wizard_on_plan_step();
    wizard.select_plan(2);
    wizard.advance().unwrap();
    wizard.toggle_addon(1);
    wizard.advance().unwrap();
    wizard.go_back();
    wizard.go_back();

    assert_eq!(wizard.state().selected_plan_index(), 2);
    assert!(wizard.state().addons()[1].is_active);
}

// ─── Plan, Cadence, Add-ons ─────────────────────────────────────────────────

#[test]
fn test_select_plan() {
    let mut wizard = Wizard::default();
    wizard.select_plan(1);
    assert_eq!(wizard.state().selected_plan().name, "Advanced");
}

#[test]
fn test_select_plan_out_of_range_is_ignored() {
    let mut wizard = Wizard::default();
    wizard.select_plan(1);
    wizard.select_plan(99);
    assert_eq!(wizard.state().selected_plan_index(), 1);
}

#[test]
fn test_toggle_cadence_keeps_selections() {
    let mut wizard = Wizard::default();
    wizard.select_plan(2);
    wizard.toggle_addon(0);

    wizard.toggle_cadence();
    assert_eq!(wizard.state().cadence(), Cadence::Yearly);
    assert_eq!(wizard.state().selected_plan_index(), 2);
    assert!(wizard.state().addons()[0].is_active);

    wizard.toggle_cadence();
    assert_eq!(wizard.state().cadence(), Cadence::Monthly);
}

#[test]
fn test_toggle_addon_twice_restores_only_that_addon() {
    let mut wizard = Wizard::default();
    wizard.toggle_addon(2);
    let before: Vec<bool> = wizard.state().addons().iter().map(|a| a.is_active).collect();

    for index in 0..before.len() {
        wizard.toggle_addon(index);
        let during: Vec<bool> = wizard.state().addons().iter().map(|a| a.is_active).collect();
        for (i, active) in during.iter().enumerate() {
            if i == index {
                assert_ne!(*active, before[i]);
            } else {
                assert_eq!(*active, before[i]);
            }
        }

        wizard.toggle_addon(index);
        let after: Vec<bool> = wizard.state().addons().iter().map(|a| a.is_active).collect();
        assert_eq!(after, before);
    }
}

#[test]
fn test_toggle_addon_out_of_range_is_ignored() {
    let mut wizard = Wizard::default();
    let before = wizard.state().clone();
    wizard.toggle_addon(3);
    assert_eq!(wizard.state(), &before);
}

// ─── Totals ─────────────────────────────────────────────────────────────────

#[test]
fn test_total_is_plan_plus_active_addons_under_both_cadences() {
    for plan in 0..3 {
        for mask in 0u8..8 {
            let mut wizard = Wizard::default();
            wizard.select_plan(plan);
            for addon in 0..3 {
                if mask & (1 << addon) != 0 {
                    wizard.toggle_addon(addon);
                }
            }

            for _ in 0..2 {
                let state = wizard.state();
                let cadence = state.cadence();
                let plan_price = match cadence {
                    Cadence::Monthly => state.selected_plan().monthly_price,
                    Cadence::Yearly => state.selected_plan().yearly_price,
                };
                let addon_sum: u32 = state
                    .addons()
                    .iter()
                    .filter(|a| a.is_active)
                    .map(|a| match cadence {
                        Cadence::Monthly => a.monthly_price,
                        Cadence::Yearly => a.yearly_price,
                    })
                    .sum();

                assert_eq!(wizard.compute_total(), plan_price + addon_sum);
                wizard.toggle_cadence();
            }
        }
    }
}

#[test]
fn test_known_totals() {
    let mut wizard = Wizard::default();
    wizard.select_plan(1);
    wizard.toggle_addon(0);
    wizard.toggle_addon(1);
    assert_eq!(wizard.compute_total(), 12 + 1 + 2);

    wizard.toggle_cadence();
    assert_eq!(wizard.compute_total(), 120 + 10 + 20);
}

// ─── Pure Transitions ───────────────────────────────────────────────────────

#[test]
fn test_apply_does_not_mutate_input() {
    let state = WizardState::default();
    let snapshot = state.clone();

    let next = state.apply(&WizardAction::SubmitPersonalInfo(ann())).unwrap();
    let next = next.apply(&WizardAction::ToggleAddon(0)).unwrap();

    assert_eq!(state, snapshot);
    assert_eq!(next.step(), Step::SelectPlan);
    assert!(next.addons()[0].is_active);
}

#[test]
fn test_apply_is_deterministic() {
    let state = WizardState::default();
    let actions = [
        WizardAction::SubmitPersonalInfo(ann()),
        WizardAction::SelectPlan(1),
        WizardAction::ToggleCadence,
        WizardAction::Advance,
        WizardAction::ToggleAddon(2),
        WizardAction::Advance,
        WizardAction::GoBack,
    ];

    let run = |start: &WizardState| {
        actions
            .iter()
            .try_fold(start.clone(), |s, a| s.apply(a))
            .unwrap()
    };

    assert_eq!(run(&state), run(&state));
    assert_eq!(run(&state).step(), Step::AddOns);
}

#[test]
fn test_apply_never_moves_more_than_one_step() {
    let mut state = WizardState::default();
    let actions = [
        WizardAction::GoBack,
        WizardAction::SubmitPersonalInfo(ann()),
        WizardAction::Advance,
        WizardAction::Advance,
        WizardAction::GoBack,
        WizardAction::Advance,
        WizardAction::Advance,
        WizardAction::Advance,
        WizardAction::GoBack,
    ];

    for action in &actions {
        let next = state.apply(action).unwrap();
        let delta = i16::from(next.step().number()) - i16::from(state.step().number());
        assert!(delta.abs() <= 1, "{} jumped {delta}", action.name());
        state = next;
    }
}

// ─── Snapshot & Summary ─────────────────────────────────────────────────────

#[test]
fn test_snapshot_reflects_state() {
    let mut wizard = wizard_on_plan_step();
    wizard.select_plan(2);
    wizard.toggle_addon(2);

    let snapshot = wizard.snapshot();
    assert_eq!(snapshot.step, 2);
    assert_eq!(snapshot.step_kind, Step::SelectPlan);
    assert_eq!(snapshot.selected_plan.name, "Pro");
    assert_eq!(snapshot.total, 17);
    assert!(snapshot.addons[2].is_active);
}

#[test]
fn test_snapshot_serializes_camel_case() {
    let snapshot = wizard_on_plan_step().snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["step"], 2);
    assert_eq!(json["stepKind"], "selectPlan");
    assert_eq!(json["cadence"], "monthly");
    assert_eq!(json["personalInfo"]["phoneNumber"], "+1 234 567 890");
    assert_eq!(json["selectedPlan"]["monthlyPrice"], 9);
    assert_eq!(json["addons"][0]["isActive"], false);
}

#[test]
fn test_summary_lines() {
    let mut wizard = Wizard::default();
    wizard.select_plan(0);
    wizard.toggle_addon(0);
    wizard.toggle_addon(1);

    let summary = wizard.summary();
    assert_eq!(summary.plan.label, "Arcade (Monthly)");
    assert_eq!(summary.plan.price_label, "$9/mo");
    assert_eq!(summary.addons.len(), 2);
    assert_eq!(summary.addons[0].label, "Online service");
    assert_eq!(summary.addons[0].price_label, "+$1/mo");
    assert_eq!(summary.total.label, "Total (per month)");
    assert_eq!(summary.total.amount, 12);
    assert_eq!(summary.total.price_label, "+$12/mo");

    wizard.toggle_cadence();
    let summary = wizard.summary();
    assert_eq!(summary.plan.label, "Arcade (Yearly)");
    assert_eq!(summary.total.label, "Total (per year)");
    assert_eq!(summary.total.price_label, "+$120/yr");
}

#[test]
fn test_plan_card_shows_promo_only_when_yearly() {
    let plan = &catalog::plans()[0];
    let (_, price, promo) = snapshot::plan_card(plan, Cadence::Monthly);
    assert_eq!(price, "$9/mo");
    assert_eq!(promo, None);

    let (name, price, promo) = snapshot::plan_card(plan, Cadence::Yearly);
    assert_eq!(name, "Arcade");
    assert_eq!(price, "$90/yr");
    assert_eq!(promo, Some("2 months free"));
}

#[test]
fn test_step_numbering() {
    let numbers: Vec<u8> = Step::all().iter().map(|s| s.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    assert_eq!(Step::from_number(0), None);
    assert_eq!(Step::from_number(6), None);
    assert_eq!(Step::Confirmation.next(), Step::Confirmation);
    assert_eq!(Step::PersonalInfo.prev(), Step::PersonalInfo);
    assert_eq!(Step::Confirmation.sidebar_label(), "SUMMARY");
}
