pub mod identity;
pub mod note;
pub mod sanitize;
