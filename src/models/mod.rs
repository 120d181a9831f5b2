//! Typed records shared by the store and the HTTP layer.

pub mod log;
pub mod request;
pub mod response;
