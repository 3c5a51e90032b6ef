pub(crate) mod mount_gate;
pub(crate) mod timers;
