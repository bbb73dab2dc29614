//! Structured carrier message parsing and primary message packing (modes 2
//! and 3).

use crate::codewords::Codewords;
use crate::{HeaderError, Mode};

/// Group separator.
pub const GS: u8 = 0x1D;
/// Record separator.
pub const RS: u8 = 0x1E;
/// End of transmission.
pub const EOT: u8 = 0x04;

/// Header opening every structured carrier message.
pub const SCM_HEADER: &[u8; 7] = b"[)>\x1e01\x1d";

/// The header and the two digit year stay with the secondary message, the
/// postcode starts right after them.
const POSTCODE_START: usize = 9;

/// Postcode length marker packed with a numeric postcode.
const NUMERIC_POSTCODE_LEN: u32 = 9;

/// Postcode of the primary message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Postcode {
    /// Mode 2, 9 digits.
    Numeric(u32),
    /// Mode 3, 6 raw characters.
    Alphanumeric([u8; 6]),
}

/// A validated structured carrier message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarrierMessage<'a> {
    pub postcode: Postcode,
    pub country: u16,
    pub service: u16,
    /// Start of the secondary message: header and year.
    pub head: &'a [u8],
    /// Rest of the secondary message: everything after the service class.
    pub tail: &'a [u8],
}

impl<'a> CarrierMessage<'a> {
    /// Checks the `[)>` RS `01` GS `yy` postcode GS country GS class GS ...
    /// RS EOT layout of a mode 2 or 3 message.
    pub fn parse(mode: Mode, data: &'a [u8]) -> Result<Self, HeaderError> {
        debug_assert!(mode.is_structured_carrier());

        if !data.starts_with(SCM_HEADER) {
            return Err(HeaderError::MissingHeader);
        }

        let min = if mode == Mode::UsCarrier { 44 } else { 41 };
        if data.len() < min {
            return Err(HeaderError::TooShort { len: data.len(), min });
        }

        if data.last() != Some(&EOT) {
            return Err(HeaderError::MissingEot);
        }

        let mut groups = data[POSTCODE_START..].splitn(4, |&b| b == GS);
        let (Some(postcode), Some(country), Some(service)) = (groups.next(), groups.next(), groups.next()) else {
            return Err(HeaderError::MissingFields);
        };
        let tail = groups.next().unwrap_or(&[]);

        let expected = if mode == Mode::UsCarrier { 9 } else { 6 };
        if postcode.len() != expected {
            return Err(HeaderError::PostcodeLength { len: postcode.len(), expected });
        }
        if country.len() != 3 {
            return Err(HeaderError::CountryCodeLength(country.len()));
        }
        if service.len() != 3 {
            return Err(HeaderError::ServiceClassLength(service.len()));
        }

        let country = parse_digits(country).ok_or(HeaderError::CountryCodeNotNumeric)? as u16;
        let service = parse_digits(service).ok_or(HeaderError::ServiceClassNotNumeric)? as u16;

        let postcode = if mode == Mode::UsCarrier {
            if country != 840 {
                return Err(HeaderError::NotUnitedStates(country));
            }
            Postcode::Numeric(parse_digits(postcode).ok_or(HeaderError::PostcodeNotNumeric)?)
        } else {
            let mut raw = [0u8; 6];
            raw.copy_from_slice(postcode);
            Postcode::Alphanumeric(raw)
        };

        Ok(Self { postcode, country, service, head: &data[..POSTCODE_START], tail })
    }

    /// Writes the 10 primary data codewords.
    pub fn pack(&self, codewords: &mut Codewords) {
        pack_primary(codewords, self.postcode, self.country, self.service);
    }
}

/// At most 9 ASCII digits.
fn parse_digits(s: &[u8]) -> Option<u32> {
    if s.is_empty() || s.len() > 9 || !s.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(s.iter().fold(0, |n, &c| n * 10 + (c - b'0') as u32))
}

/// Maps a mode 3 postcode character onto its Code Set A value. Bytes below 27
/// are kept as is, scanners read them as the letter with the same value (LF
/// reads as 'J').
const fn postcode_value(c: u8) -> u32 {
    match c {
        b'A'..=b'Z' => (c - b'A' + 1) as u32,
        27 | 31 | 33 | 59..=u8::MAX => b' ' as u32,
        c => c as u32,
    }
}

/// Bit packs the primary message: postcode, country code and service class,
/// with the mode in the two low bits of codeword 0. Inputs are assumed valid.
pub fn pack_primary(codewords: &mut Codewords, postcode: Postcode, country: u16, service: u16) {
    let cw = &mut codewords.0;
    let country = country as u32;
    let service = service as u32;

    match postcode {
        Postcode::Numeric(pc) => {
            let len = NUMERIC_POSTCODE_LEN;
            cw[0] = (((pc & 0x03) << 4) | 2) as u8;
            cw[1] = ((pc & 0xFC) >> 2) as u8;
            cw[2] = ((pc & 0x3F00) >> 8) as u8;
            cw[3] = ((pc & 0xF_C000) >> 14) as u8;
            cw[4] = ((pc & 0x3F0_0000) >> 20) as u8;
            cw[5] = (((pc & 0x3C00_0000) >> 26) | ((len & 0x3) << 4)) as u8;
            cw[6] = (((len & 0x3C) >> 2) | ((country & 0x3) << 4)) as u8;
        }
        Postcode::Alphanumeric(raw) => {
            let pc = raw.map(postcode_value);
            cw[0] = (((pc[5] & 0x03) << 4) | 3) as u8;
            for i in 1..6 {
                cw[i] = (((pc[5 - i] & 0x03) << 4) | ((pc[6 - i] & 0x3C) >> 2)) as u8;
            }
            cw[6] = (((pc[0] & 0x3C) >> 2) | ((country & 0x3) << 4)) as u8;
        }
    }

    cw[7] = ((country & 0xFC) >> 2) as u8;
    cw[8] = (((country & 0x300) >> 8) | ((service & 0xF) << 2)) as u8;
    cw[9] = ((service & 0x3F0) >> 4) as u8;
}
