//! Order Handlers

pub(crate) mod create;
