use mockall::predicate::eq;
use prop_delta::{derived_state_hook, Changed, Shadow, StatePatch};

use super::{
    given_a_settled_slider, watch_all, DeriveDependency, MockDeriveDependency, SliderProps,
    SliderState,
};

#[test]
fn given_unchanged_props_and_no_patch_should_return_no_update() {
    let mut dependency = MockDeriveDependency::new();
    dependency
        .expect_on_props_changed()
        .with(eq(None::<Changed<i64>>))
        .times(1)
        .returning(|_| None);

    let hook = derived_state_hook(
        watch_all(),
        move |_: &SliderProps, _: &SliderState, _: &Shadow<i64>, changed: Option<&Changed<i64>>| {
            dependency.on_props_changed(changed.cloned())
        },
    );

    let previous = given_a_settled_slider(3, 10);
    assert!(hook(&SliderProps { value: 3, max: 10 }, &previous).is_none());
}

#[test]
fn given_a_changed_prop_should_forward_it_to_the_dependency() {
    let forwarded: Changed<i64> = [("value", 7)].into_iter().collect();

    let mut dependency = MockDeriveDependency::new();
    dependency
        .expect_on_props_changed()
        .with(eq(Some(forwarded)))
        .times(1)
        .returning(|_| None);

    let hook = derived_state_hook(
        watch_all(),
        move |_: &SliderProps, _: &SliderState, _: &Shadow<i64>, changed: Option<&Changed<i64>>| {
            dependency.on_props_changed(changed.cloned())
        },
    );

    let previous = given_a_settled_slider(3, 10);
    let next = hook(&SliderProps { value: 7, max: 10 }, &previous).unwrap();

    assert_eq!(next.shadow.value("value"), Some(&7));
    // No patch: the evaluator's own update stands alone.
    assert_eq!(
        next.state,
        SliderState {
            value: 3,
            effective_max: 10
        }
    );
}

#[test]
fn given_a_patch_should_apply_it_over_the_evaluator_update() {
    let mut dependency = MockDeriveDependency::new();
    dependency
        .expect_on_props_changed()
        .times(1)
        .returning(|_| Some(StatePatch::new().with("value", 7).with("effective_max", 99)));

    let hook = derived_state_hook(
        watch_all(),
        move |_: &SliderProps, _: &SliderState, _: &Shadow<i64>, changed: Option<&Changed<i64>>| {
            dependency.on_props_changed(changed.cloned())
        },
    );

    let previous = given_a_settled_slider(3, 10);
    let next = hook(&SliderProps { value: 7, max: 10 }, &previous).unwrap();

    assert_eq!(
        next.state,
        SliderState {
            value: 7,
            effective_max: 99
        }
    );
    assert_eq!(next.shadow.value("value"), Some(&7));
    assert_eq!(next.shadow.value("max"), Some(&10));
}

#[test]
fn given_a_patch_without_changes_should_keep_the_shadow() {
    let mut dependency = MockDeriveDependency::new();
    dependency
        .expect_on_props_changed()
        .with(eq(None::<Changed<i64>>))
        .times(1)
        .returning(|_| Some(StatePatch::new().with("effective_max", 42)));

    let hook = derived_state_hook(
        watch_all(),
        move |_: &SliderProps, _: &SliderState, _: &Shadow<i64>, changed: Option<&Changed<i64>>| {
            dependency.on_props_changed(changed.cloned())
        },
    );

    let previous = given_a_settled_slider(3, 10);
    let next = hook(&SliderProps { value: 3, max: 10 }, &previous).unwrap();

    assert_eq!(
        next.state,
        SliderState {
            value: 3,
            effective_max: 42
        }
    );
    assert_eq!(next.shadow, previous.shadow);
}

#[test]
fn given_a_patch_naming_an_undeclared_field_should_drop_that_entry() {
    let mut dependency = MockDeriveDependency::new();
    dependency
        .expect_on_props_changed()
        .times(1)
        .returning(|_| Some(StatePatch::new().with("value", 1).with("nope", 5)));

    let hook = derived_state_hook(
        watch_all(),
        move |_: &SliderProps, _: &SliderState, _: &Shadow<i64>, changed: Option<&Changed<i64>>| {
            dependency.on_props_changed(changed.cloned())
        },
    );

    let previous = given_a_settled_slider(3, 10);
    let next = hook(&SliderProps { value: 1, max: 10 }, &previous).unwrap();

    assert_eq!(
        next.state,
        SliderState {
            value: 1,
            effective_max: 10
        }
    );
}
