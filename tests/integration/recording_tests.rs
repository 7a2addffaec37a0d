use prop_delta::{derived_state_hook, RecordingHook, Tracked};

use super::{given_a_settled_slider, watch_all, SliderProps, SliderState};

#[test]
fn given_a_recording_hook_should_capture_the_pre_refresh_shadow() {
    let recording = RecordingHook::new();
    let hook = derived_state_hook(
        watch_all(),
        recording.wrap(|_: &SliderProps, _: &SliderState, _, _| None),
    );

    let previous = given_a_settled_slider(3, 10);
    hook(&SliderProps { value: 7, max: 10 }, &previous);

    assert_eq!(recording.count(), 1);
    recording.with_calls(|calls| {
        assert_eq!(calls[0].shadow.value("value"), Some(&3));
        assert_eq!(calls[0].changed.as_ref().unwrap().get("value"), Some(&7));
    });
}

#[test]
fn given_successive_renders_should_track_changes_across_cycles() {
    let recording = RecordingHook::new();
    let hook = derived_state_hook(
        watch_all(),
        recording.wrap(|_: &SliderProps, _: &SliderState, _, _| None),
    );

    // Drive the hook the way a host framework would: feed each render's
    // props and adopt the returned state when an update is requested.
    let mut tracked = Tracked::new(SliderState {
        value: 0,
        effective_max: 0,
    });
    for (value, max) in [(1, 10), (1, 10), (2, 10)] {
        let props = SliderProps { value, max };
        if let Some(next) = hook(&props, &tracked) {
            tracked = next;
        }
    }

    assert_eq!(tracked.shadow.value("value"), Some(&2));
    assert_eq!(tracked.shadow.value("max"), Some(&10));
    assert_eq!(recording.count(), 3);
    recording.with_calls(|calls| {
        // First render diffs against an empty shadow.
        assert_eq!(calls[0].changed.as_ref().unwrap().len(), 2);
        // A re-render with identical props stays quiet.
        assert!(calls[1].changed.is_none());
        assert_eq!(calls[2].changed.as_ref().unwrap().get("value"), Some(&2));
    });
}
