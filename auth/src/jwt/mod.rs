pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use codec::TokenCodec;
pub use codec::ACCESS_TOKEN_MINUTES;
pub use codec::REFRESH_TOKEN_DAYS;
pub use errors::TokenError;
