pub(crate) mod choreography;
pub(crate) mod layout;
