pub(crate) mod config;
pub(crate) mod gated;
pub(crate) mod render;
pub(crate) mod reveal;
