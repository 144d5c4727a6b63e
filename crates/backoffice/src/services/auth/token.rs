//! Session token generation.
//!
//! Tokens are 32 bytes from the thread-local CSPRNG, URL-safe base64
//! without padding. The legacy system derived tokens from
//! md5(username + timestamp); unpredictability is a hard requirement
//! here, not an accident.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;

use mfh_store_core::SessionToken;

/// Number of random bytes per token (256 bits).
const TOKEN_BYTES: usize = 32;

/// Issue a fresh opaque session token.
///
/// Unique per call with overwhelming probability.
#[must_use]
pub fn issue() -> SessionToken {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    SessionToken::new(URL_SAFE_NO_PAD.encode(bytes))
}
