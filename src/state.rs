//! Shadow storage for watched props and the tracked state container.

use indexmap::IndexMap;

use crate::{Changed, Record, Watch};

/// The most recently observed value of each watched field.
///
/// The shadow is what incoming props are diffed against. It lives as a
/// typed field of [`Tracked`] and holds one entry per watched field that
/// has ever been observed; entries for unchanged fields persist across
/// refreshes.
///
/// A fresh (empty) shadow makes the first evaluation report every watched
/// field as changed, which is how a component bootstraps its derived
/// state. Seed from the initial props with [`Shadow::seeded`] to start
/// quiet instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Shadow<V> {
    values: IndexMap<&'static str, V>,
}

impl<V> Shadow<V> {
    /// An empty shadow; every watched field reads as changed next cycle.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Last observed value of a field, if it has been observed.
    pub fn value(&self, name: &str) -> Option<&V> {
        self.values.get(name)
    }

    /// Whether the field has been observed.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of observed fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(field name, last observed value)` pairs in
    /// first-observed order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &V)> + '_ {
        self.values.iter().map(|(name, value)| (*name, value))
    }
}

impl<V: Clone + PartialEq> Shadow<V> {
    /// Seed a shadow from first-render props.
    ///
    /// Records the current value of every watched field so that an
    /// immediate re-render with the same props evaluates to the no-update
    /// marker.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use prop_delta::{impl_record, Shadow, Watch};
    /// # #[derive(Clone, PartialEq)]
    /// # struct SliderProps {
    /// #     value: i64,
    /// # }
    /// # impl_record!(SliderProps, i64, [value]);
    /// let watch = Watch::<SliderProps>::new(["value"]).unwrap();
    /// let shadow = Shadow::seeded(&watch, &SliderProps { value: 3 });
    /// assert_eq!(shadow.value("value"), Some(&3));
    /// ```
    pub fn seeded<P>(watch: &Watch<P>, props: &P) -> Self
    where
        P: Record<Value = V>,
    {
        let mut values = IndexMap::new();
        for &name in watch.names() {
            if let Some(value) = props.field(name) {
                values.insert(name, value);
            }
        }
        Self { values }
    }

    /// Refreshed copy: previous entries persist, changed entries overwrite.
    pub(crate) fn merged(&self, changed: &Changed<V>) -> Self {
        let mut values = self.values.clone();
        for (name, value) in changed.iter() {
            values.insert(name, value.clone());
        }
        Self { values }
    }
}

impl<V> Default for Shadow<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(&'static str, V)> for Shadow<V> {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Component state paired with the shadow copy of its watched props.
///
/// This is the value a component keeps between renders and hands back to
/// [`evaluate`](crate::evaluate) on the next cycle. `state` is the
/// component's own data; `shadow` is bookkeeping owned by the evaluator.
///
/// The evaluator never mutates a `Tracked` value in place; it returns a
/// fresh one whenever an update is requested.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tracked<S, V> {
    /// The component's own state.
    pub state: S,
    /// Last observed values of the watched props.
    pub shadow: Shadow<V>,
}

impl<S, V> Tracked<S, V> {
    /// Track `state` with an empty shadow.
    ///
    /// The first evaluation will report every watched prop as changed.
    pub fn new(state: S) -> Self {
        Self {
            state,
            shadow: Shadow::new(),
        }
    }

    /// Track `state` with a pre-seeded shadow.
    pub fn with_shadow(state: S, shadow: Shadow<V>) -> Self {
        Self { state, shadow }
    }
}
