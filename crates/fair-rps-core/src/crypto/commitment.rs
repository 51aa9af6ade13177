//! HmacKey and MoveDigest for the keyed commit-reveal scheme.

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of both the key and the digest
pub const KEY_LEN: usize = 32;

/// Errors from parsing a hex-encoded key or digest
#[derive(Debug, Error, PartialEq)]
pub enum ParseHexError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

fn decode_32(s: &str) -> Result<[u8; KEY_LEN], ParseHexError> {
    let bytes = hex::decode(s.trim())?;
    <[u8; KEY_LEN]>::try_from(bytes.as_slice()).map_err(|_| ParseHexError::InvalidLength(bytes.len()))
}

/// Secret HMAC key, 256 bits from the operating system's CSPRNG
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacKey(#[serde(with = "hex_bytes")] [u8; KEY_LEN]);

impl HmacKey {
    /// Generate a fresh key from `OsRng`
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.0).expect("HMAC accepts keys of any length")
    }
}

// Never print key material through Debug; a sealed round may be logged.
impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HmacKey(..)")
    }
}

impl fmt::Display for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for HmacKey {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_32(s).map(Self)
    }
}

/// Digest = HMAC-SHA256(key, move_name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDigest(#[serde(with = "hex_bytes")] [u8; KEY_LEN]);

impl MoveDigest {
    /// Compute the digest of a move name under a key
    pub fn compute(key: &HmacKey, move_name: &str) -> Self {
        let mut mac = key.mac();
        mac.update(move_name.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Verify that the given key and move name produce this digest.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &HmacKey, move_name: &str) -> bool {
        let mut mac = key.mac();
        mac.update(move_name.as_bytes());
        mac.verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for MoveDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveDigest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for MoveDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for MoveDigest {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_32(s).map(Self)
    }
}

/// Recompute `HMAC(key, move_name)` and compare it with a published digest
pub fn verify(key: &HmacKey, move_name: &str, digest: &MoveDigest) -> bool {
    digest.verify(key, move_name)
}

mod hex_bytes {
    use super::KEY_LEN;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; KEY_LEN], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; KEY_LEN], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_32(&hex_str).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_verification() {
        let key = HmacKey::generate();
        let digest = MoveDigest::compute(&key, "rock");

        assert!(digest.verify(&key, "rock"));
        assert!(verify(&key, "rock", &digest));
    }

    #[test]
    fn test_digest_is_deterministic() {
        let key = HmacKey::from_bytes([7u8; KEY_LEN]);
        assert_eq!(
            MoveDigest::compute(&key, "lizard"),
            MoveDigest::compute(&key, "lizard")
        );
    }

    #[test]
    fn test_rfc4231_case_2() {
        // Short-key vector from RFC 4231; exercises the raw HMAC path.
        let mut mac = HmacSha256::new_from_slice(b"Jefe").unwrap();
        mac.update(b"what do ya want for nothing?");
        assert_eq!(
            hex::encode(mac.finalize().into_bytes()),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_different_moves_different_digests() {
        let key = HmacKey::generate();
        assert_ne!(
            MoveDigest::compute(&key, "rock"),
            MoveDigest::compute(&key, "paper")
        );
    }

    #[test]
    fn test_different_keys_different_digests() {
        let key1 = HmacKey::generate();
        let key2 = HmacKey::generate();
        assert_ne!(key1, key2);
        assert_ne!(
            MoveDigest::compute(&key1, "rock"),
            MoveDigest::compute(&key2, "rock")
        );
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let key = HmacKey::generate();
        let digest = MoveDigest::compute(&key, "rock");

        assert!(!digest.verify(&key, "paper"));
        assert!(!digest.verify(&key, "Rock"));
        assert!(!digest.verify(&key, "rock "));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let key = HmacKey::generate();
        let digest = MoveDigest::compute(&key, "rock");

        let mut bytes = *key.as_bytes();
        bytes[31] ^= 0x01;
        assert!(!digest.verify(&HmacKey::from_bytes(bytes), "rock"));
    }

    #[test]
    fn test_tampered_digest_fails_verification() {
        let key = HmacKey::generate();
        let digest = MoveDigest::compute(&key, "rock");

        let mut bytes = *digest.as_bytes();
        bytes[0] ^= 0x80;
        assert!(!verify(&key, "rock", &MoveDigest::from_bytes(bytes)));
    }

    #[test]
    fn test_hex_display_parses_back() {
        let key = HmacKey::generate();
        let digest = MoveDigest::compute(&key, "spock");

        let key_hex = key.to_string();
        assert_eq!(key_hex.len(), 64);
        assert_eq!(key_hex.parse::<HmacKey>().unwrap(), key);
        assert_eq!(digest.to_string().parse::<MoveDigest>().unwrap(), digest);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "zz".parse::<HmacKey>(),
            Err(ParseHexError::InvalidHex(_))
        ));
        assert_eq!(
            "abcd".parse::<MoveDigest>(),
            Err(ParseHexError::InvalidLength(2))
        );
    }

    #[test]
    fn test_key_debug_is_redacted() {
        let key = HmacKey::from_bytes([0xab; KEY_LEN]);
        assert_eq!(format!("{:?}", key), "HmacKey(..)");
    }

    #[test]
    fn test_json_uses_hex_strings() {
        let key = HmacKey::from_bytes([1u8; KEY_LEN]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(KEY_LEN)));
        assert_eq!(serde_json::from_str::<HmacKey>(&json).unwrap(), key);
    }
}
