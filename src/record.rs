//! Typed field access for props and component state.

/// A record type with named fields that can be read by name.
///
/// Props and state containers implement this trait so that a
/// [`Watch`](crate::Watch) set can be validated against the declared fields
/// at setup time and so the evaluator can read watched fields generically.
/// Field values share one associated `Value` type; records with fields of
/// several shapes use an enum that each field converts into.
///
/// Implementations must yield `Some` for every name listed by
/// [`field_names`](Self::field_names) and `None` for any other name.
///
/// For plain structs, [`impl_record!`](crate::impl_record) writes this
/// implementation for you.
///
/// # Example
///
/// ```rust
/// use prop_delta::Record;
///
/// #[derive(Clone, PartialEq)]
/// struct SliderProps {
///     value: i64,
///     max: i64,
/// }
///
/// impl Record for SliderProps {
///     type Value = i64;
///
///     fn field_names() -> &'static [&'static str] {
///         &["value", "max"]
///     }
///
///     fn field(&self, name: &str) -> Option<i64> {
///         match name {
///             "value" => Some(self.value),
///             "max" => Some(self.max),
///             _ => None,
///         }
///     }
/// }
///
/// let props = SliderProps { value: 3, max: 10 };
/// assert_eq!(props.field("value"), Some(3));
/// assert_eq!(props.field("nope"), None);
/// ```
pub trait Record {
    /// Common type of the record's field values.
    type Value: Clone + PartialEq;

    /// Names of the record's fields, in declaration order.
    ///
    /// # Returns
    ///
    /// The full set of names [`field`](Self::field) answers for. Watched
    /// names are checked against this list when a
    /// [`Watch`](crate::Watch) is built.
    fn field_names() -> &'static [&'static str];

    /// Read one field by name.
    ///
    /// # Arguments
    ///
    /// * `name` - The field name to read
    ///
    /// # Returns
    ///
    /// The field's current value, or `None` when the record declares no
    /// such field.
    fn field(&self, name: &str) -> Option<Self::Value>;
}

/// A [`Record`] whose fields can also be written by name.
///
/// State containers implement this so
/// [`reset_with_changes`](crate::reset_with_changes) and
/// [`StatePatch`](crate::StatePatch) can snap individual state fields to
/// new values. For plain structs whose listed fields are all of the value
/// type, [`impl_patch_record!`](crate::impl_patch_record) writes the
/// implementation.
pub trait PatchRecord: Record {
    /// Write one field by name.
    ///
    /// # Arguments
    ///
    /// * `name` - The field name to write
    /// * `value` - The new value
    ///
    /// # Returns
    ///
    /// `true` when the field exists and was written, `false` when the
    /// record declares no such field (the write is a no-op).
    fn set_field(&mut self, name: &str, value: Self::Value) -> bool;
}

/// Implements [`Record`] for a struct.
///
/// Lists the struct type, the value type, and the fields to expose. Each
/// listed field must be `Clone` and convert into the value type with
/// `Into`.
///
/// # Example
///
/// ```rust
/// use prop_delta::{impl_record, Record};
///
/// #[derive(Clone, PartialEq)]
/// struct SliderProps {
///     value: i64,
///     max: i64,
/// }
///
/// impl_record!(SliderProps, i64, [value, max]);
///
/// assert_eq!(SliderProps::field_names(), &["value", "max"]);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($record:ty, $value:ty, [$($field:ident),+ $(,)?]) => {
        impl $crate::Record for $record {
            type Value = $value;

            fn field_names() -> &'static [&'static str] {
                &[$(stringify!($field)),+]
            }

            fn field(&self, name: &str) -> Option<Self::Value> {
                match name {
                    $(stringify!($field) => Some(self.$field.clone().into()),)+
                    _ => None,
                }
            }
        }
    };
}

/// Implements [`PatchRecord`] for a struct that already implements
/// [`Record`].
///
/// Each listed field must accept the record's value type via `Into`.
/// Fields left off the list stay read-only.
///
/// # Example
///
/// ```rust
/// use prop_delta::{impl_patch_record, impl_record, PatchRecord};
///
/// #[derive(Clone, PartialEq)]
/// struct SliderState {
///     value: i64,
/// }
///
/// impl_record!(SliderState, i64, [value]);
/// impl_patch_record!(SliderState, [value]);
///
/// let mut state = SliderState { value: 1 };
/// assert!(state.set_field("value", 5));
/// assert!(!state.set_field("nope", 5));
/// assert_eq!(state.value, 5);
/// ```
#[macro_export]
macro_rules! impl_patch_record {
    ($record:ty, [$($field:ident),+ $(,)?]) => {
        impl $crate::PatchRecord for $record {
            fn set_field(&mut self, name: &str, value: Self::Value) -> bool {
                match name {
                    $(stringify!($field) => {
                        self.$field = value.into();
                        true
                    })+
                    _ => false,
                }
            }
        }
    };
}
