//! Syntactic email address validation.

pub mod errors;
pub mod validator;

pub use errors::EmailError;
pub use validator::validate;
