pub mod argon2;
pub mod errors;
pub mod scheme;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
pub use scheme::PasswordScheme;
