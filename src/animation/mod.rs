pub(crate) mod directive;
pub(crate) mod ease;
pub(crate) mod tween;
