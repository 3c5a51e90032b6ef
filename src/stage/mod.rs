pub(crate) mod entrance;
pub(crate) mod outer;
pub(crate) mod signal;
