//! Host-lifecycle integration for derived state.

#[cfg(any(test, feature = "testing"))]
use std::sync::{Arc, Mutex};

use indexmap::IndexMap;

use crate::{evaluate, Changed, Evaluation, PatchRecord, Record, Shadow, Tracked, Watch};

/// A partial state update produced by a derive hook, keyed by field name.
///
/// Applied through [`PatchRecord::set_field`], so entries naming fields
/// the state record does not declare are dropped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct StatePatch<V> {
    entries: IndexMap<&'static str, V>,
}

impl<V> StatePatch<V> {
    /// An empty patch.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Builder-style insert.
    ///
    /// ```rust
    /// # use prop_delta::StatePatch;
    /// let patch = StatePatch::new().with("value", 7).with("half", 3);
    /// assert_eq!(patch.len(), 2);
    /// ```
    pub fn with(mut self, name: &'static str, value: V) -> Self {
        self.entries.insert(name, value);
        self
    }

    /// Insert or overwrite one entry.
    pub fn set(&mut self, name: &'static str, value: V) {
        self.entries.insert(name, value);
    }

    /// Value queued for a field, if any.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the patch is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(field name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &V)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }
}

impl<V: Clone> StatePatch<V> {
    /// Write every entry into a patchable record.
    ///
    /// Entries naming undeclared fields are dropped.
    ///
    /// # Returns
    ///
    /// How many fields were written.
    pub fn apply_to<S>(&self, state: &mut S) -> usize
    where
        S: PatchRecord<Value = V>,
    {
        let mut applied = 0;
        for (name, value) in self.iter() {
            if state.set_field(name, value.clone()) {
                applied += 1;
            }
        }
        applied
    }
}

impl<V> Default for StatePatch<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(&'static str, V)> for StatePatch<V> {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Wrap a state-derivation function into a host-lifecycle hook.
///
/// The host framework owns the update cycle; this factory only produces
/// the function it calls with the incoming props and the current tracked
/// state. Each call:
///
/// 1. Runs [`evaluate`] over the watched fields.
/// 2. Invokes `derive` with the incoming props, the previous caller state,
///    the previous (pre-refresh) shadow, and the changed props, so caller
///    logic can react only to what changed.
/// 3. Merges the caller's patch over the evaluator's update, caller
///    entries winning on state fields; the shadow refresh is the
///    evaluator's alone.
///
/// Returns the no-update marker only when neither the evaluator nor the
/// caller requested an update.
///
/// # Arguments
///
/// * `watch` - The validated set of fields to diff each cycle
/// * `derive` - Caller logic producing an optional [`StatePatch`]
///
/// # Example
///
/// ```rust
/// use prop_delta::{derived_state_hook, StatePatch, Tracked, Watch};
/// # use prop_delta::{impl_patch_record, impl_record};
/// # #[derive(Clone, PartialEq, Debug)]
/// # struct SliderProps {
/// #     value: i64,
/// #     max: i64,
/// # }
/// # impl_record!(SliderProps, i64, [value, max]);
/// # #[derive(Clone, PartialEq, Debug)]
/// # struct SliderState {
/// #     value: i64,
/// #     half: i64,
/// # }
/// # impl_record!(SliderState, i64, [value, half]);
/// # impl_patch_record!(SliderState, [value, half]);
/// let watch = Watch::<SliderProps>::new(["value"]).unwrap();
/// let hook = derived_state_hook(watch, |props: &SliderProps, _: &SliderState, _, changed| {
///     changed?.contains("value").then(|| {
///         StatePatch::new()
///             .with("value", props.value)
///             .with("half", props.value / 2)
///     })
/// });
///
/// let previous = Tracked::new(SliderState { value: 0, half: 0 });
/// let next = hook(&SliderProps { value: 8, max: 10 }, &previous).unwrap();
/// assert_eq!(next.state, SliderState { value: 8, half: 4 });
/// assert_eq!(next.shadow.value("value"), Some(&8));
/// ```
pub fn derived_state_hook<P, S, F>(
    watch: Watch<P>,
    derive: F,
) -> impl Fn(&P, &Tracked<S, P::Value>) -> Option<Tracked<S, P::Value>>
where
    P: Record,
    S: PatchRecord<Value = P::Value> + Clone,
    F: Fn(&P, &S, &Shadow<P::Value>, Option<&Changed<P::Value>>) -> Option<StatePatch<P::Value>>,
{
    move |props, previous| {
        let Evaluation { next_state, changed } = evaluate(&watch, props, previous);
        let patch = derive(props, &previous.state, &previous.shadow, changed.as_ref());

        match (next_state, patch) {
            (None, None) => None,
            (next_state, patch) => {
                let mut next = next_state.unwrap_or_else(|| previous.clone());
                if let Some(patch) = patch {
                    patch.apply_to(&mut next.state);
                }
                Some(next)
            }
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Captured arguments from one derive-hook invocation.
///
/// Only available with the `testing` feature or during tests.
#[derive(Clone, Debug)]
pub struct RecordedCall<V> {
    /// The shadow as it was before any refresh.
    pub shadow: Shadow<V>,
    /// The changed props forwarded to the hook, if any.
    pub changed: Option<Changed<V>>,
}

#[cfg(any(test, feature = "testing"))]
/// Records every invocation of a wrapped derive function for assertions.
///
/// Only available with the `testing` feature or during tests.
///
/// Wrap the derive function you pass to [`derived_state_hook`] and inspect
/// what the evaluator forwarded to it across render cycles.
///
/// # Example
///
/// ```rust
/// use prop_delta::{derived_state_hook, RecordingHook, Tracked, Watch};
/// # use prop_delta::{impl_patch_record, impl_record};
/// # #[derive(Clone, PartialEq, Debug)]
/// # struct SliderProps {
/// #     value: i64,
/// # }
/// # impl_record!(SliderProps, i64, [value]);
/// # #[derive(Clone, PartialEq, Debug)]
/// # struct SliderState {
/// #     value: i64,
/// # }
/// # impl_record!(SliderState, i64, [value]);
/// # impl_patch_record!(SliderState, [value]);
/// let recording = RecordingHook::new();
/// let hook = derived_state_hook(
///     Watch::<SliderProps>::all(),
///     recording.wrap(|_: &SliderProps, _: &SliderState, _, _| None),
/// );
///
/// let previous = Tracked::new(SliderState { value: 0 });
/// hook(&SliderProps { value: 2 }, &previous);
///
/// assert_eq!(recording.count(), 1);
/// recording.with_calls(|calls| {
///     assert_eq!(calls[0].changed.as_ref().unwrap().get("value"), Some(&2));
/// });
/// ```
pub struct RecordingHook<V> {
    calls: Arc<Mutex<Vec<RecordedCall<V>>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<V> Clone for RecordingHook<V> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<V> Default for RecordingHook<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<V> RecordingHook<V> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// How many times the wrapped function has been invoked.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Access the captured calls with a closure.
    pub fn with_calls<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<RecordedCall<V>>) -> R,
    {
        let calls = self.calls.lock().unwrap();
        f(&calls)
    }
}

#[cfg(any(test, feature = "testing"))]
impl<V: Clone> RecordingHook<V> {
    /// Wrap a derive function, capturing its arguments on every call.
    ///
    /// The returned function shares this recorder's capture storage, so
    /// [`count`](Self::count) and [`with_calls`](Self::with_calls) observe
    /// every invocation made through it.
    pub fn wrap<P, S, F>(
        &self,
        derive: F,
    ) -> impl Fn(&P, &S, &Shadow<V>, Option<&Changed<V>>) -> Option<StatePatch<V>>
    where
        F: Fn(&P, &S, &Shadow<V>, Option<&Changed<V>>) -> Option<StatePatch<V>>,
    {
        let calls = self.calls.clone();
        move |props, state, shadow, changed| {
            calls.lock().unwrap().push(RecordedCall {
                shadow: shadow.clone(),
                changed: changed.cloned(),
            });
            derive(props, state, shadow, changed)
        }
    }
}
