use tracing::debug;

use crate::codewords::Codewords;
use crate::ecc::generate_ecc;
use crate::grid::ModuleGrid;
use crate::high_level::{encode_secondary, MAX_INPUT_LEN};
use crate::primary::CarrierMessage;
use crate::{Error, Mode};

/// MaxiCode symbol encoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxiCode {
    mode: Mode,
    eci: u32,
}

impl MaxiCode {
    pub const fn new(mode: Mode) -> Self {
        Self { mode, eci: 0 }
    }

    /// Announces the ECI assignment number `eci` (0 to 999999) at the start
    /// of the secondary message. 0 sends no ECI.
    pub const fn with_eci(self, eci: u32) -> Self {
        Self { eci, ..self }
    }

    #[inline]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub const fn eci(&self) -> u32 {
        self.eci
    }

    /// Computes the 144 codewords of the symbol encoding `data`. In modes 2
    /// and 3 `data` must be a structured carrier message, its postcode,
    /// country and service class go to the primary message.
    pub fn codewords(&self, data: &[u8]) -> Result<Codewords, Error> {
        let mut codewords = Codewords::new();

        let mut joined = [0u8; MAX_INPUT_LEN];
        let secondary = if self.mode.is_structured_carrier() {
            let msg = CarrierMessage::parse(self.mode, data)?;
            msg.pack(&mut codewords);

            let len = msg.head.len() + msg.tail.len();
            if len > MAX_INPUT_LEN {
                return Err(Error::Capacity { len, capacity: MAX_INPUT_LEN });
            }
            joined[..msg.head.len()].copy_from_slice(msg.head);
            joined[msg.head.len()..len].copy_from_slice(msg.tail);
            encode_secondary(self.mode, self.eci, &joined[..len])?
        } else {
            encode_secondary(self.mode, self.eci, data)?
        };

        codewords.place_secondary(self.mode, secondary.symbols());
        generate_ecc(&mut codewords, self.mode);

        debug!(mode = ?self.mode, eci = self.eci, input = data.len(), len = secondary.len(),
            "codewords generated");
        Ok(codewords)
    }

    /// Encodes `data` into the module grid of a symbol.
    pub fn encode(&self, data: &[u8]) -> Result<ModuleGrid, Error> {
        self.codewords(data).map(|codewords| ModuleGrid::from_codewords(&codewords))
    }
}
