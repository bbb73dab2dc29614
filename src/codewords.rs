use core::ops::Index;

use crate::Mode;

/// Total number of codewords in a MaxiCode symbol.
pub const CODEWORD_COUNT: usize = 144;
/// Number of data codewords of the primary message.
pub const PRIMARY_DATA_LEN: usize = 10;
/// Index of the first secondary message codeword.
pub const SECONDARY_START: usize = 20;
/// Number of secondary symbols stored in the primary data region (modes 4 to 6).
pub const PRIMARY_SPILL_LEN: usize = 9;

/// The 144 six-bit codewords of a symbol: primary data `[0, 10)`, primary ECC
/// `[10, 20)` and the interleaved secondary message `[20, 144)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codewords(pub(crate) [u8; CODEWORD_COUNT]);

impl Codewords {
    pub const fn new() -> Self {
        Self([0; CODEWORD_COUNT])
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn primary(&self) -> &[u8] {
        &self.0[..PRIMARY_DATA_LEN]
    }

    pub fn primary_ecc(&self) -> &[u8] {
        &self.0[PRIMARY_DATA_LEN..SECONDARY_START]
    }

    pub fn secondary(&self) -> &[u8] {
        &self.0[SECONDARY_START..]
    }

    /// Copies the packed secondary message in place. Modes without a primary
    /// message spill the first nine symbols into the primary data region,
    /// after the mode codeword.
    pub(crate) fn place_secondary(&mut self, mode: Mode, symbols: &[u8]) {
        let data_len = mode.secondary_data_len();
        let symbols = if mode.is_structured_carrier() {
            symbols
        } else {
            self.0[0] = mode as u8;
            self.0[1..PRIMARY_DATA_LEN].copy_from_slice(&symbols[..PRIMARY_SPILL_LEN]);
            &symbols[PRIMARY_SPILL_LEN..]
        };
        self.0[SECONDARY_START..SECONDARY_START + data_len].copy_from_slice(&symbols[..data_len]);
    }
}

impl Default for Codewords {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Codewords {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl AsRef<[u8]> for Codewords {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
