use crate::consts::BYTES_ARG;
use crate::prelude::*;
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Random 128-bit identifier tying a reported failure to the call chain that raised it.
///
/// Displays in canonical hyphenated form (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// A fresh version 4 identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// # Errors
    /// Returns `DateError::InvalidArgument` on parameter `bytes` unless exactly 16 bytes are given.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DateError> {
        Uuid::from_slice(bytes).map(Self).map_err(|_| {
            DateError::invalid_argument(BYTES_ARG, format!("expected 16 bytes, got {}", bytes.len()))
        })
    }

    /// Big-endian raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::random()
    }
}

impl FromStr for CorrelationId {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| DateError::invalid_argument("correlation_id", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_differ() {
        assert_ne!(CorrelationId::random(), CorrelationId::random());
    }

    #[test]
    fn test_bytes_and_text_agree() {
        let bytes = [
            0x12, 0x3e, 0x45, 0x67, 0xe8, 0x9b, 0x12, 0xd3, 0xa4, 0x56, 0x42, 0x66, 0x14, 0x17,
            0x40, 0x00,
        ];
        let id = CorrelationId::from_bytes(bytes);
        assert_eq!(id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
        assert_eq!(id.as_bytes(), &bytes);
        assert_eq!(CorrelationId::from_slice(&bytes).unwrap(), id);
        assert_eq!(
            "123e4567-e89b-12d3-a456-426614174000"
                .parse::<CorrelationId>()
                .unwrap(),
            id
        );
    }

    #[test]
    fn test_random_id_is_version_4() {
        let id = CorrelationId::random();
        assert_eq!(id.as_uuid().get_version_num(), 4);
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(matches!(
            CorrelationId::from_slice(&[0u8; 15]),
            Err(DateError::InvalidArgument { param: "bytes", .. })
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let id = CorrelationId::from_bytes([0xab; 16]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""abababab-abab-abab-abab-abababababab""#);
        let parsed: CorrelationId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
