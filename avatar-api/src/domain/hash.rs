use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `bytes`, used to fingerprint cached avatars.
pub fn content_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
