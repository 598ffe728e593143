//! Authentication utilities library
//!
//! Reusable building blocks for services that authenticate accounts:
//! - Session token minting and verification (HS256 JWT)
//! - Token expiry policies
//! - Password schemes (Argon2id, plus a plaintext compatibility mode)
//!
//! Services define their own domain traits and adapt these implementations.
//!
//! # Examples
//!
//! ## Session Tokens
//! ```
//! use auth::{ExpiryPolicy, JwtError, TokenCodec};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", ExpiryPolicy::FarFuture);
//! let token = codec.mint("account-42").unwrap();
//!
//! let verified = codec.verify(&token).unwrap();
//! assert_eq!(verified.subject, "account-42");
//!
//! let other = TokenCodec::new(b"another_key_at_least_32_bytes_long", ExpiryPolicy::FarFuture);
//! assert_eq!(other.verify(&token), Err(JwtError::InvalidSignature));
//! ```
//!
//! ## Password Schemes
//! ```
//! use auth::PasswordScheme;
//!
//! let scheme = PasswordScheme::Argon2;
//! let stored = scheme.seal("my_password").unwrap();
//! assert!(scheme.matches("my_password", &stored).unwrap());
//! assert!(!scheme.matches("other", &stored).unwrap());
//! ```

pub mod codec;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use codec::TokenCodec;
pub use codec::VerifiedToken;
pub use jwt::ExpiryPolicy;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordScheme;
