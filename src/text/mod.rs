pub(crate) mod appearance;
pub(crate) mod engine;
pub(crate) mod helper;
pub(crate) mod service;
