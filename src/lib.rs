//! MaxiCode (ISO/IEC 16023) symbol encoder.
//!
//! The encoder turns a message into the 144 six-bit codewords of a symbol
//! (primary message, secondary message, Reed-Solomon ECC) and maps them onto
//! the 30 x 33 hexagonal module grid. Drawing the grid (hexagons and the
//! central bullseye) is left to the caller.
//!
//! ```
//! use maxicode::{MaxiCode, Mode};
//!
//! let grid = MaxiCode::new(Mode::Standard)
//!     .encode(b"MaxiCode from rust")
//!     .unwrap();
//! assert!(grid.get(0, 28));
//! ```

mod tables;
mod error;
pub mod ecc;
pub mod codewords;
pub mod high_level;
pub mod primary;
pub mod grid;
mod builder;

pub use builder::MaxiCode;
pub use codewords::Codewords;
pub use ecc::ReedSolomon;
pub use error::{Error, HeaderError};
pub use grid::ModuleGrid;

/// Symbol mode, stored in the low bits of the first codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// Structured carrier message with a numeric (US) postcode.
    UsCarrier = 2,
    /// Structured carrier message with a 6 character alphanumeric postcode.
    InternationalCarrier = 3,
    /// Free-form message with standard error correction.
    Standard = 4,
    /// Free-form message with enhanced error correction.
    FullEcc = 5,
    /// Free-form message addressed to the reader itself.
    ReaderProgramming = 6,
}

impl Mode {
    /// Modes 2 and 3 carry a postcode, country and service class in the
    /// primary message.
    #[inline]
    pub const fn is_structured_carrier(self) -> bool {
        matches!(self, Mode::UsCarrier | Mode::InternationalCarrier)
    }

    /// Maximum number of symbols available to the secondary message,
    /// including the nine spilled into the primary region by modes 4 to 6.
    pub const fn capacity(self) -> usize {
        match self {
            Mode::UsCarrier | Mode::InternationalCarrier => 84,
            Mode::Standard | Mode::ReaderProgramming => 93,
            Mode::FullEcc => 77,
        }
    }

    /// Number of data codewords in the secondary region (both interleaves).
    pub const fn secondary_data_len(self) -> usize {
        match self {
            Mode::FullEcc => 68,
            _ => 84,
        }
    }

    /// Number of ECC codewords in the secondary region (both interleaves).
    pub const fn secondary_ecc_len(self) -> usize {
        match self {
            Mode::FullEcc => 56,
            _ => 40,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(mode: u8) -> Result<Self, Error> {
        match mode {
            2 => Ok(Mode::UsCarrier),
            3 => Ok(Mode::InternationalCarrier),
            4 => Ok(Mode::Standard),
            5 => Ok(Mode::FullEcc),
            6 => Ok(Mode::ReaderProgramming),
            _ => Err(Error::InvalidMode(mode)),
        }
    }
}

/// Encodes `data` as a MaxiCode symbol in the given `mode` (2 to 6). A
/// non-zero `eci` is announced at the start of the secondary message.
pub fn encode(mode: u8, eci: u32, data: &[u8]) -> Result<ModuleGrid, Error> {
    MaxiCode::new(Mode::try_from(mode)?)
        .with_eci(eci)
        .encode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_u8() {
        assert_eq!(Mode::try_from(2), Ok(Mode::UsCarrier));
        assert_eq!(Mode::try_from(6), Ok(Mode::ReaderProgramming));
        assert_eq!(Mode::try_from(1), Err(Error::InvalidMode(1)));
        assert_eq!(Mode::try_from(7), Err(Error::InvalidMode(7)));
    }

    #[test]
    fn test_mode_sizes_add_up() {
        for mode in [Mode::UsCarrier, Mode::InternationalCarrier, Mode::Standard, Mode::FullEcc, Mode::ReaderProgramming] {
            assert_eq!(mode.secondary_data_len() + mode.secondary_ecc_len(), 124);
        }
        assert_eq!(Mode::FullEcc.capacity(), 9 + 68);
        assert_eq!(Mode::Standard.capacity(), 9 + 84);
    }

    #[test]
    fn test_encode_rejects_mode() {
        assert_eq!(encode(1, 0, b"x"), Err(Error::InvalidMode(1)));
        assert_eq!(encode(7, 0, b"x"), Err(Error::InvalidMode(7)));
    }
}
