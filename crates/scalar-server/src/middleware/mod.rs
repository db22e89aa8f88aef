//! Response middleware.

pub(crate) mod cors;
pub(crate) mod security;
