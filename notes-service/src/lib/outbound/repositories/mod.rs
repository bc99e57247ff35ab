pub mod credential;
pub mod note;

pub use credential::PostgresCredentialStore;
pub use note::PostgresNoteStore;
