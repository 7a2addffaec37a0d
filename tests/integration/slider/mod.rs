use prop_delta::{impl_patch_record, impl_record, Changed, StatePatch};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SliderProps {
    pub(crate) value: i64,
    pub(crate) max: i64,
}

impl_record!(SliderProps, i64, [value, max]);

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SliderState {
    pub(crate) value: i64,
    pub(crate) effective_max: i64,
}

impl_record!(SliderState, i64, [value, effective_max]);
impl_patch_record!(SliderState, [value, effective_max]);

#[cfg_attr(test, mockall::automock)]
pub(crate) trait DeriveDependency {
    fn on_props_changed(&self, changed: Option<Changed<i64>>) -> Option<StatePatch<i64>>;
}
