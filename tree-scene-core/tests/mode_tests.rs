// Scene-mode transitions and the effective-mode derivation.

use tree_scene_core::mode::{BaseMode, EffectiveMode, SceneMode, effective_mode};

#[test]
fn selection_always_implies_chaos_regime() {
    for base in [BaseMode::Formation, BaseMode::Chaos] {
        assert_eq!(effective_mode(base, Some(3)), EffectiveMode::Chaos);
    }
    assert_eq!(effective_mode(BaseMode::Formation, None), EffectiveMode::Formation);
    assert_eq!(effective_mode(BaseMode::Chaos, None), EffectiveMode::Chaos);
}

#[test]
fn toggle_flips_base_mode() {
    let mut mode = SceneMode::default();
    assert_eq!(mode.base(), BaseMode::Formation);
    assert!(mode.toggle_chaos());
    assert_eq!(mode.base(), BaseMode::Chaos);
    assert!(mode.toggle_chaos());
    assert_eq!(mode.base(), BaseMode::Formation);
}

#[test]
fn toggle_is_rejected_while_focused() {
    let mut mode = SceneMode::default();
    assert!(mode.select(1, 5));
    let before = mode.clone();
    assert!(!mode.toggle_chaos(), "toggle must be rejected during detail view");
    assert_eq!(mode, before, "rejected toggle must change nothing");
}

#[test]
fn select_requires_empty_selection_and_valid_id() {
    let mut mode = SceneMode::default();
    assert!(!mode.select(0, 0), "empty collection cannot be focused");
    assert!(!mode.select(5, 5), "out-of-range id must be rejected");
    assert!(mode.select(2, 5));
    assert!(!mode.select(3, 5), "second selection must be rejected");
    assert_eq!(mode.selected(), Some(2));
}

#[test]
fn clearing_selection_restores_base_mode() {
    let mut mode = SceneMode::default();
    assert!(mode.select(1, 3));
    assert_eq!(mode.effective(), EffectiveMode::Chaos);
    assert!(mode.clear_selection());
    assert_eq!(mode.effective(), EffectiveMode::Formation);
    assert!(!mode.clear_selection(), "second clear is a no-op");
}

#[test]
fn clearing_selection_after_chaos_base_stays_chaos() {
    let mut mode = SceneMode::default();
    assert!(mode.toggle_chaos());
    assert!(mode.select(0, 3));
    assert!(mode.clear_selection());
    assert_eq!(mode.effective(), EffectiveMode::Chaos);
}

#[test]
fn set_base_is_rejected_while_focused() {
    let mut mode = SceneMode::default();
    assert!(mode.set_base(BaseMode::Chaos));
    assert!(mode.select(0, 2));
    assert!(!mode.set_base(BaseMode::Formation));
    assert_eq!(mode.base(), BaseMode::Chaos);
}
