//! CRC-16/CCITT-FALSE checksum for the payload trailer.
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Polynomial | 0x1021 |
//! | Init | 0xFFFF |
//! | RefIn / RefOut | false |
//! | XorOut | 0x0000 |
//!
//! The checksum covers the payload up to and including the `6304` tag and
//! length of the CRC field itself, but not its value.

/// CRC-16/CCITT-FALSE polynomial.
pub const POLY: u16 = 0x1021;

/// Initial register value.
pub const INIT: u16 = 0xFFFF;

/// Streaming CRC state.
///
/// Useful when the input arrives in pieces; [`crc16`] is the one-shot form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc16(u16);

impl Crc16 {
    /// Start a new checksum.
    pub const fn new() -> Self {
        Self(INIT)
    }

    /// Feed more bytes into the register.
    #[must_use]
    pub fn update(self, data: &[u8]) -> Self {
        Self(data.iter().fold(self.0, |crc, &byte| step(crc, byte)))
    }

    /// The final register value.
    pub const fn finish(self) -> u16 {
        self.0
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

/// Shift one byte through the register, MSB first.
fn step(crc: u16, byte: u8) -> u16 {
    (0..8).fold(crc ^ (u16::from(byte) << 8), |crc, _| {
        if crc & 0x8000 != 0 {
            (crc << 1) ^ POLY
        } else {
            crc << 1
        }
    })
}

/// Compute CRC-16/CCITT-FALSE over `data`.
#[must_use]
pub fn crc16(data: &[u8]) -> u16 {
    Crc16::new().update(data).finish()
}

/// Compute the checksum of a payload and render it as 4 upper-case hex digits.
#[must_use]
pub fn crc16_hex(payload: &str) -> String {
    format_crc(crc16(payload.as_bytes()))
}

/// Render a CRC value the way it appears in the payload trailer.
pub fn format_crc(crc: u16) -> String {
    format!("{:04X}", crc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_vector() {
        assert_eq!(crc16(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_empty_input_is_init() {
        assert_eq!(crc16(b""), INIT);
        assert_eq!(crc16_hex(""), "FFFF");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(crc16(b"A"), 0xB915);
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let whole = crc16(b"123456789");
        let split = Crc16::new().update(b"1234").update(b"56789").finish();
        assert_eq!(whole, split);
    }

    #[test]
    fn test_hex_is_zero_padded_upper_case() {
        assert_eq!(format_crc(0x00ab), "00AB");
        assert_eq!(format_crc(0x0000), "0000");
        assert_eq!(format_crc(0xbeef), "BEEF");
    }

    #[test]
    fn test_known_payload_trailer() {
        let partial = "00020101021226370014BR.GOV.BCB.PIX0115pix@example.com\
                       5204000053039865406100.005802BR5913ACME CONCRETO6009SAO PAULO\
                       62200516SUPERMIXCONCRETO6304";
        assert_eq!(crc16_hex(partial), "5282");
    }
}
