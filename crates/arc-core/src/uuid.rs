use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 128-bit UUID held as its canonical big-endian byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uuid128(pub [u8; 16]);

impl Uuid128 {
    /// Parses the hyphenated hex form (`8D4DD795-D603-...`). Hyphen
    /// placement is not enforced; exactly 32 hex digits are.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let mut bytes = [0_u8; 16];
        let mut idx = 0;
        let mut high: Option<u8> = None;
        for ch in s.chars() {
            if ch == '-' {
                continue;
            }
            let nibble = ch
                .to_digit(16)
                .ok_or(CoreError::InvalidUuid("non-hex digit"))? as u8;
            match high.take() {
                None => high = Some(nibble),
                Some(h) => {
                    if idx == bytes.len() {
                        return Err(CoreError::InvalidUuid("more than 32 hex digits"));
                    }
                    bytes[idx] = (h << 4) | nibble;
                    idx += 1;
                }
            }
        }
        if idx != bytes.len() || high.is_some() {
            return Err(CoreError::InvalidUuid("expected 32 hex digits"));
        }
        Ok(Self(bytes))
    }

    /// Bytes in transport (little-endian) order, as carried inside
    /// advertising AD structures.
    pub fn to_le_bytes(&self) -> [u8; 16] {
        let mut out = self.0;
        out.reverse();
        out
    }
}

impl std::str::FromStr for Uuid128 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Uuid128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                write!(f, "-")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
