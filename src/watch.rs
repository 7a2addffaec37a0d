//! Watched-field sets validated against a record type.

use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

use crate::Record;

/// Error raised when a watched-field set fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchError {
    /// The named field is not declared by the record type.
    #[error("`{0}` is not a field of the watched record type")]
    UnknownField(&'static str),
}

/// An ordered set of field names to watch for changes across renders.
///
/// Built once per component against a [`Record`] type; construction fails
/// fast when a name is not among the record's declared fields, so a typo
/// can never silently read as "absent, therefore always equal".
///
/// The order of names fixes the iteration order of
/// [`Changed`](crate::Changed) maps but never affects which fields are
/// reported.
///
/// # Example
///
/// ```rust
/// use prop_delta::{impl_record, Watch, WatchError};
///
/// #[derive(Clone, PartialEq)]
/// struct SliderProps {
///     value: i64,
///     max: i64,
/// }
///
/// impl_record!(SliderProps, i64, [value, max]);
///
/// let watch = Watch::<SliderProps>::new(["value"]).unwrap();
/// assert_eq!(watch.names(), &["value"]);
///
/// let err = Watch::<SliderProps>::new(["valeu"]).unwrap_err();
/// assert_eq!(err, WatchError::UnknownField("valeu"));
/// ```
pub struct Watch<P: Record> {
    names: Vec<&'static str>,
    _record: PhantomData<fn(&P)>,
}

impl<P: Record> Watch<P> {
    /// Build a watch set from field names.
    ///
    /// Every name is validated against `P`'s declared fields. Duplicates
    /// collapse to their first occurrence.
    ///
    /// # Arguments
    ///
    /// * `names` - The field names to watch, in the order changes should
    ///   be reported
    ///
    /// # Returns
    ///
    /// The validated watch set, or [`WatchError::UnknownField`] naming the
    /// first undeclared field.
    pub fn new<I>(names: I) -> Result<Self, WatchError>
    where
        I: IntoIterator<Item = &'static str>,
    {
        let mut validated = Vec::new();
        for name in names {
            if !P::field_names().contains(&name) {
                return Err(WatchError::UnknownField(name));
            }
            if !validated.contains(&name) {
                validated.push(name);
            }
        }
        Ok(Self {
            names: validated,
            _record: PhantomData,
        })
    }

    /// Watch every field the record type declares, in declaration order.
    pub fn all() -> Self {
        Self {
            names: P::field_names().to_vec(),
            _record: PhantomData,
        }
    }

    /// Watched field names in watch order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Number of watched fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the watch set is empty. An empty set never reports changes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<P: Record> Clone for Watch<P> {
    fn clone(&self) -> Self {
        Self {
            names: self.names.clone(),
            _record: PhantomData,
        }
    }
}

impl<P: Record> fmt::Debug for Watch<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Watch").field(&self.names).finish()
    }
}
