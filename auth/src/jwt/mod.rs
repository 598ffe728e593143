pub mod claims;
pub mod errors;
pub mod expiry;
pub mod handler;

pub use claims::SessionClaims;
pub use errors::JwtError;
pub use expiry::ExpiryPolicy;
pub use handler::JwtHandler;
