pub(crate) mod attachment;
pub(crate) mod configuration;
