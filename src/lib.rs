//! Watched-property change tracking for deriving component state from props.
//!
//! UI frameworks hand a component fresh props on every update cycle, but
//! derived internal state is only worth recomputing for props that actually
//! changed. `prop-delta` keeps a typed shadow copy of the watched props
//! next to the component state and diffs incoming props against it each
//! cycle, reporting exactly which watched fields moved.
//!
//! The watched-field set is validated against the prop record's declared
//! fields when it is built, so a misspelled name fails fast instead of
//! silently comparing as absent. "No update" is always `None`; a changed
//! map is only ever present non-empty.
//!
//! ## Example
//!
//! ```rust
//! use prop_delta::{evaluate, impl_patch_record, impl_record, Shadow, Tracked, Watch};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct SliderProps {
//!     value: i64,
//!     max: i64,
//! }
//!
//! impl_record!(SliderProps, i64, [value, max]);
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct SliderState {
//!     value: i64,
//! }
//!
//! impl_record!(SliderState, i64, [value]);
//! impl_patch_record!(SliderState, [value]);
//!
//! let watch = Watch::<SliderProps>::new(["value"]).unwrap();
//!
//! // First render: seed the shadow from the initial props.
//! let props = SliderProps { value: 3, max: 10 };
//! let tracked = Tracked::with_shadow(
//!     SliderState { value: 3 },
//!     Shadow::seeded(&watch, &props),
//! );
//!
//! // Same props again: no update requested.
//! let quiet = evaluate(&watch, &props, &tracked);
//! assert!(quiet.next_state.is_none());
//! assert!(quiet.changed.is_none());
//!
//! // The watched prop moved: the diff names it and refreshes the shadow.
//! let props = SliderProps { value: 7, max: 10 };
//! let result = evaluate(&watch, &props, &tracked);
//!
//! let changed = result.changed.unwrap();
//! assert_eq!(changed.get("value"), Some(&7));
//!
//! let next = result.next_state.unwrap();
//! assert_eq!(next.shadow.value("value"), Some(&7));
//! // The caller state itself is untouched by a plain evaluation.
//! assert_eq!(next.state, SliderState { value: 3 });
//! ```
//!
//! To snap same-named state fields to the new prop values, use
//! [`reset_with_changes`]; to run caller derivation logic against only the
//! changed props, build a host hook with [`derived_state_hook`].

// Module declarations
mod diff;
mod hook;
mod record;
mod state;
mod watch;

// Public re-exports
pub use diff::{evaluate, reset_with_changes, Changed, Evaluation};
pub use hook::{derived_state_hook, StatePatch};
pub use record::{PatchRecord, Record};
pub use state::{Shadow, Tracked};
pub use watch::{Watch, WatchError};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use hook::{RecordedCall, RecordingHook};
