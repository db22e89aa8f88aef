//! HTTP request handlers.

pub(crate) mod document;
pub(crate) mod hot_reload;
pub(crate) mod page;
