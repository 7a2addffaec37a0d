//! The prop-diff evaluator.

use indexmap::IndexMap;

use crate::{PatchRecord, Record, Shadow, Tracked, Watch};

/// The watched props whose incoming value differs from the shadow this
/// cycle, keyed by field name and valued by the new value.
///
/// Only ever produced non-empty: [`evaluate`] reports "nothing changed" as
/// `None`, never as an empty map. Iteration follows the watch order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Changed<V> {
    entries: IndexMap<&'static str, V>,
}

impl<V> Changed<V> {
    /// New value of a changed field, if that field changed.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    /// Whether the field changed this cycle.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of changed fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field changed. Always `false` for values produced by
    /// [`evaluate`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the changed fields in watch order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over `(field name, new value)` pairs in watch order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &V)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }
}

impl<V> FromIterator<(&'static str, V)> for Changed<V> {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Outcome of one evaluation cycle.
///
/// `next_state` and `changed` are either both `Some` or both `None`;
/// `None` is the no-update marker, telling the host that no state change
/// is requested this cycle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Evaluation<S, V> {
    /// The previous state with a refreshed shadow, when props changed.
    pub next_state: Option<Tracked<S, V>>,
    /// Exactly the watched props that changed, when any did.
    pub changed: Option<Changed<V>>,
}

/// Diff incoming props against the shadow and refresh it.
///
/// Compares each watched field of `props` with its last observed value in
/// `previous.shadow` using `PartialEq`. A field with no shadow entry yet
/// counts as changed.
///
/// The caller state inside `next_state` is a plain clone; only the shadow
/// is refreshed. Both inputs are left untouched.
///
/// Evaluating a second time with the returned `next_state` and the same
/// props yields the no-update marker.
///
/// # Arguments
///
/// * `watch` - The validated set of fields to diff
/// * `props` - The incoming props for this render cycle
/// * `previous` - The tracked state from the last cycle
///
/// # Example
///
/// ```rust
/// # use prop_delta::{evaluate, impl_record, Shadow, Tracked, Watch};
/// # #[derive(Clone, PartialEq)]
/// # struct SliderProps {
/// #     value: i64,
/// # }
/// # impl_record!(SliderProps, i64, [value]);
/// let watch = Watch::<SliderProps>::new(["value"]).unwrap();
/// let previous = Tracked::with_shadow(
///     (),
///     Shadow::seeded(&watch, &SliderProps { value: 3 }),
/// );
///
/// let result = evaluate(&watch, &SliderProps { value: 7 }, &previous);
/// let changed = result.changed.unwrap();
/// assert_eq!(changed.get("value"), Some(&7));
///
/// let next = result.next_state.unwrap();
/// assert_eq!(next.shadow.value("value"), Some(&7));
/// ```
pub fn evaluate<P, S>(
    watch: &Watch<P>,
    props: &P,
    previous: &Tracked<S, P::Value>,
) -> Evaluation<S, P::Value>
where
    P: Record,
    S: Clone,
{
    let changed = find_changed(watch, props, &previous.shadow);

    #[cfg(feature = "tracing")]
    if let Some(changed) = &changed {
        tracing::trace!(count = changed.len(), "watched props diverged from shadow");
    }

    match changed {
        Some(changed) => Evaluation {
            next_state: Some(Tracked {
                state: previous.state.clone(),
                shadow: previous.shadow.merged(&changed),
            }),
            changed: Some(changed),
        },
        None => Evaluation {
            next_state: None,
            changed: None,
        },
    }
}

/// Evaluate, then snap same-named state fields to the new values.
///
/// Composes [`evaluate`]: when changes exist, each changed prop that is
/// also a writable field of the caller state is set to its new incoming
/// value on top of `next_state`. Changed props with no matching state
/// field land only in the shadow. With no changes this is the no-update
/// marker, unchanged.
///
/// # Example
///
/// ```rust
/// # use prop_delta::{impl_patch_record, impl_record, reset_with_changes, Shadow, Tracked, Watch};
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
/// let watch = Watch::<SliderProps>::new(["value"]).unwrap();
/// let previous = Tracked::with_shadow(
///     SliderState { value: 3 },
///     Shadow::seeded(&watch, &SliderProps { value: 3 }),
/// );
///
/// let next = reset_with_changes(&watch, &SliderProps { value: 7 }, &previous).unwrap();
/// assert_eq!(next.state.value, 7);
/// assert_eq!(next.shadow.value("value"), Some(&7));
/// ```
pub fn reset_with_changes<P, S>(
    watch: &Watch<P>,
    props: &P,
    previous: &Tracked<S, P::Value>,
) -> Option<Tracked<S, P::Value>>
where
    P: Record,
    S: PatchRecord<Value = P::Value> + Clone,
{
    let Evaluation { next_state, changed } = evaluate(watch, props, previous);
    let (Some(mut next), Some(changed)) = (next_state, changed) else {
        return None;
    };

    for (name, value) in changed.iter() {
        next.state.set_field(name, value.clone());
    }
    Some(next)
}

fn find_changed<P, V>(watch: &Watch<P>, props: &P, shadow: &Shadow<V>) -> Option<Changed<V>>
where
    P: Record<Value = V>,
    V: Clone + PartialEq,
{
    let mut changed: Option<Changed<V>> = None;
    for &name in watch.names() {
        // Declared fields must yield a value; an impl that breaks this
        // reads as unchanged.
        let Some(next) = props.field(name) else { continue };
        if shadow.value(name) != Some(&next) {
            changed
                .get_or_insert_with(|| Changed {
                    entries: IndexMap::new(),
                })
                .entries
                .insert(name, next);
        }
    }
    changed
}
