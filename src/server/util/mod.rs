//! Small helpers shared by controllers and services.

pub mod extract;
pub mod parse;
pub mod password;
pub mod validate;
