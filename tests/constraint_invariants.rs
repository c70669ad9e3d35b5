//! Property-based invariant tests for the selection model.
//!
//! Random layouts are driven by random toggle sequences; after every step:
//!
//! 1. The global total never exceeds a bounded global cap
//! 2. No section's effective count exceeds its own cap
//! 3. At most one `all` option is checked per section
//! 4. Checked options are never disabled
//! 5. Ignored toggles never mutate the state
//! 6. Toggling a normal option twice restores the derived state

use chat_multiselect::domain::form::{
    FormLayout, OptionAction, SelectionCap, SelectionModel, ToggleOutcome,
};
use chat_multiselect::domain::foundation::{OptionId, SectionId};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

#[derive(Debug, Clone)]
struct SectionSpec {
    cap: u32,
    normals: usize,
    all: bool,
    user_input: bool,
}

fn section_strategy() -> impl Strategy<Value = SectionSpec> {
    (0u32..5, 0usize..5, any::<bool>(), any::<bool>()).prop_map(
        |(cap, normals, all, user_input)| SectionSpec {
            cap,
            normals,
            all,
            user_input,
        },
    )
}

fn cap(raw: u32) -> SelectionCap {
    SelectionCap::from_raw(Some(i64::from(raw)))
}

fn layout_strategy() -> impl Strategy<Value = FormLayout> {
    (0u32..8, prop::collection::vec(section_strategy(), 1..4)).prop_map(|(total, sections)| {
        let mut builder = FormLayout::builder().total_max_select(cap(total));
        for (idx, shape) in sections.iter().enumerate() {
            let mut options: Vec<(&str, OptionAction)> = NAMES[..shape.normals]
                .iter()
                .map(|name| (*name, OptionAction::Normal))
                .collect();
            if shape.all {
                options.insert(0, ("tout", OptionAction::All));
            }
            if shape.user_input {
                options.push(("autre", OptionAction::UserInput));
            }
            builder = builder.section(&format!("S{}", idx), cap(shape.cap), options);
        }
        builder.button("Valider").build()
    })
}

fn toggles_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..4, 0u32..7), 0..40)
}

fn option_id(layout: &FormLayout, (section, position): (u32, u32)) -> OptionId {
    let sections = layout.sections().len() as u32;
    OptionId::new(SectionId::new(section % sections), position)
}

fn assert_invariants(model: &SelectionModel) -> Result<(), TestCaseError> {
    let layout = model.layout();
    if let Some(limit) = layout.total_max_select().limit() {
        prop_assert!(
            model.total_count() <= limit,
            "total {} exceeds global cap {}",
            model.total_count(),
            limit
        );
    }
    for section in layout.sections() {
        let effective = model.effective_count(section.id());
        if let Some(limit) = section.max_select().limit() {
            prop_assert!(
                effective <= limit,
                "section {} holds {} over cap {}",
                section.label(),
                effective,
                limit
            );
        }
        let all_checked = section
            .options()
            .iter()
            .filter(|o| o.is_all() && model.is_checked(o.id()))
            .count();
        prop_assert!(
            all_checked <= 1,
            "section {} has {} all options checked",
            section.label(),
            all_checked
        );
    }
    for id in model.state().checked() {
        prop_assert!(!model.is_disabled(*id), "checked option {} is disabled", id);
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// 1-4. Caps and exclusivity hold in every reachable state
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn caps_hold_for_every_reachable_state(
        layout in layout_strategy(),
        toggles in toggles_strategy(),
    ) {
        let mut model = SelectionModel::new(layout);
        assert_invariants(&model)?;

        for raw in toggles {
            let id = option_id(model.layout(), raw);
            model.toggle(id);
            assert_invariants(&model)?;
        }
    }

    #[test]
    fn user_input_options_are_never_disabled(
        layout in layout_strategy(),
        toggles in toggles_strategy(),
    ) {
        let mut model = SelectionModel::new(layout);
        for raw in toggles {
            let id = option_id(model.layout(), raw);
            model.toggle(id);
        }
        for section in model.layout().sections() {
            for option in section.user_input_options() {
                prop_assert!(!model.is_disabled(option.id()));
                prop_assert!(model.annotation(option.id()).is_none());
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Ignored toggles are no-ops
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ignored_toggle_leaves_state_untouched(
        layout in layout_strategy(),
        toggles in toggles_strategy(),
    ) {
        let mut model = SelectionModel::new(layout);
        for raw in toggles {
            let id = option_id(model.layout(), raw);
            let before = model.state().clone();
            if let ToggleOutcome::Ignored(_) = model.toggle(id) {
                prop_assert_eq!(model.state(), &before);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Toggle-twice idempotence
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn toggling_normal_option_twice_restores_derived_state(
        layout in layout_strategy(),
        setup in toggles_strategy(),
        target in (0u32..4, 0u32..7),
    ) {
        let mut model = SelectionModel::new(layout);
        for raw in setup {
            let id = option_id(model.layout(), raw);
            model.toggle(id);
        }

        let id = option_id(model.layout(), target);
        let is_normal = model.layout().option(id).map_or(false, |o| o.is_normal());
        prop_assume!(is_normal);

        let before = model.state().clone();
        if model.toggle(id).is_applied() {
            prop_assert!(model.toggle(id).is_applied(), "second toggle must be accepted");
            prop_assert_eq!(model.state().checked(), before.checked());
            prop_assert_eq!(model.state().disabled(), before.disabled());
            prop_assert_eq!(model.state().errored(), before.errored());
        }
    }

    #[test]
    fn unchecking_reenables_the_option(
        layout in layout_strategy(),
        setup in toggles_strategy(),
    ) {
        let mut model = SelectionModel::new(layout);
        for raw in setup {
            let id = option_id(model.layout(), raw);
            model.toggle(id);
        }

        // An `all` option over an empty section counts for nothing, so
        // releasing it cannot lift a global freeze.
        let checked: Vec<OptionId> = model
            .state()
            .checked()
            .iter()
            .copied()
            .filter(|id| {
                let layout = model.layout();
                let empty_all = layout.option(*id).map_or(false, |o| o.is_all())
                    && layout.section(id.section()).map_or(true, |s| s.size() == 0);
                !empty_all
            })
            .collect();
        for id in checked {
            prop_assert_eq!(model.toggle(id), ToggleOutcome::Applied { checked: false });
            prop_assert!(!model.is_disabled(id), "unchecked option {} stayed disabled", id);
            prop_assert!(model.annotation(id).is_none());
        }
    }
}
