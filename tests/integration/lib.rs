mod slider;

use prop_delta::{Shadow, Tracked, Watch};
pub(crate) use slider::*;

mod derive_hook_tests;
mod recording_tests;

pub(crate) fn watch_all() -> Watch<SliderProps> {
    Watch::all()
}

// Tracked state whose shadow has already observed the given props.
pub(crate) fn given_a_settled_slider(value: i64, max: i64) -> Tracked<SliderState, i64> {
    let props = SliderProps { value, max };

    Tracked::with_shadow(
        SliderState {
            value,
            effective_max: max,
        },
        Shadow::seeded(&watch_all(), &props),
    )
}
