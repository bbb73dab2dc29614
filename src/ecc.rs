use crate::codewords::{Codewords, PRIMARY_DATA_LEN, SECONDARY_START};
use crate::{Error, Mode};

/// Primitive polynomial x^6 + x + 1 generating the MaxiCode field GF(64).
pub const GF64_POLYNOMIAL: u16 = 0x43;
/// Largest number of ECC symbols a [ReedSolomon] encoder can produce.
pub const MAX_ECC_SYMBOLS: usize = 32;

/// Encoder for the 10 ECC codewords of the primary message.
pub static PRIMARY_ECC: ReedSolomon = ReedSolomon::new(GF64_POLYNOMIAL, 10, 1);
/// Encoder for each secondary interleave in modes 2, 3, 4 and 6.
pub static STANDARD_ECC: ReedSolomon = ReedSolomon::new(GF64_POLYNOMIAL, 20, 1);
/// Encoder for each secondary interleave in mode 5.
pub static ENHANCED_ECC: ReedSolomon = ReedSolomon::new(GF64_POLYNOMIAL, 28, 1);

/// Table driven systematic Reed-Solomon encoder over GF(2^m), m <= 8.
#[derive(Debug, Clone)]
pub struct ReedSolomon {
    log_size: usize,
    ecc_symbols: usize,
    log: [u8; 256],
    alog: [u8; 256],
    generator: [u8; MAX_ECC_SYMBOLS + 1],
}

impl ReedSolomon {
    /// Builds the encoder, panics if `polynomial` is not primitive. See
    /// [ReedSolomon::try_new].
    pub const fn new(polynomial: u16, ecc_symbols: usize, first_root: usize) -> Self {
        match Self::try_new(polynomial, ecc_symbols, first_root) {
            Ok(rs) => rs,
            Err(_) => panic!("polynomial does not generate a Galois field"),
        }
    }

    /// Builds the log/antilog tables of the field generated by `polynomial`
    /// and the generator polynomial with roots a^first_root ..
    /// a^(first_root + ecc_symbols - 1).
    pub const fn try_new(polynomial: u16, ecc_symbols: usize, first_root: usize) -> Result<Self, Error> {
        assert!(ecc_symbols > 0 && ecc_symbols <= MAX_ECC_SYMBOLS,
            "the number of ECC symbols must be between 1 and 32");

        if polynomial < 0b100 || polynomial > 0x1FF {
            return Err(Error::Polynomial(polynomial));
        }

        // find the top bit, and hence the symbol size
        let mut size = 0;
        let mut top: u32 = 1;
        while top <= polynomial as u32 {
            size += 1;
            top <<= 1;
        }
        size -= 1;
        top >>= 1;

        let log_size = (1usize << size) - 1;
        let mut log = [0u8; 256];
        let mut alog = [0u8; 256];

        let mut p: u32 = 1;
        let mut v = 0;
        while v < log_size {
            // a primitive element cycles through every non-zero value once
            if p == 0 || (v > 0 && p == 1) {
                return Err(Error::Polynomial(polynomial));
            }
            alog[v] = p as u8;
            log[p as usize] = v as u8;
            p <<= 1;
            if p & top != 0 {
                p ^= polynomial as u32;
            }
            v += 1;
        }
        if p != 1 {
            return Err(Error::Polynomial(polynomial));
        }

        let mut generator = [0u8; MAX_ECC_SYMBOLS + 1];
        generator[0] = 1;
        let mut index = first_root;
        let mut i = 1;
        while i <= ecc_symbols {
            generator[i] = 1;
            let mut k = i - 1;
            while k > 0 {
                if generator[k] != 0 {
                    generator[k] = alog[(log[generator[k] as usize] as usize + index) % log_size];
                }
                generator[k] ^= generator[k - 1];
                k -= 1;
            }
            generator[0] = alog[(log[generator[0] as usize] as usize + index) % log_size];
            index += 1;
            i += 1;
        }

        Ok(Self { log_size, ecc_symbols, log, alog, generator })
    }

    /// Number of ECC symbols produced by [ReedSolomon::encode].
    #[inline]
    pub const fn ecc_symbols(&self) -> usize {
        self.ecc_symbols
    }

    /// Number of non-zero field elements (63 for GF(64)).
    #[inline]
    pub const fn field_size(&self) -> usize {
        self.log_size
    }

    /// Generator polynomial coefficients, constant term first.
    pub fn generator(&self) -> &[u8] {
        &self.generator[..=self.ecc_symbols]
    }

    /// Computes the parity of `data` into `ecc`. The shift register layout is
    /// kept: `ecc[ecc_symbols - 1]` holds the highest order symbol, so
    /// callers emit it reversed.
    pub fn encode(&self, data: &[u8], ecc: &mut [u8]) {
        assert!(ecc.len() == self.ecc_symbols, "ecc must hold exactly ecc_symbols() symbols");
        ecc.fill(0);

        let n = self.ecc_symbols;
        for &d in data {
            let m = ecc[n - 1] ^ d;
            for j in (1..n).rev() {
                ecc[j] = ecc[j - 1] ^ self.mul(m, self.generator[j]);
            }
            ecc[0] = self.mul(m, self.generator[0]);
        }
    }

    #[inline]
    fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.alog[(self.log[a as usize] as usize + self.log[b as usize] as usize) % self.log_size]
    }
}

const fn secondary_ecc(mode: Mode) -> &'static ReedSolomon {
    match mode {
        Mode::FullEcc => &ENHANCED_ECC,
        _ => &STANDARD_ECC,
    }
}

/// Fills the primary ECC codewords and the ECC of both secondary interleaves.
/// The data regions must already be complete.
pub fn generate_ecc(codewords: &mut Codewords, mode: Mode) {
    let cw = &mut codewords.0;
    let mut ecc = [0u8; MAX_ECC_SYMBOLS];

    let check = &mut ecc[..PRIMARY_ECC.ecc_symbols()];
    PRIMARY_ECC.encode(&cw[..PRIMARY_DATA_LEN], check);
    for (j, &e) in check.iter().rev().enumerate() {
        cw[PRIMARY_DATA_LEN + j] = e;
    }

    let rs = secondary_ecc(mode);
    let data_len = mode.secondary_data_len();
    let check = &mut ecc[..rs.ecc_symbols()];

    // even and odd codewords form two independent blocks
    for parity in 0..2 {
        let mut block = [0u8; 42];
        let block = &mut block[..data_len / 2];
        for (j, slot) in block.iter_mut().enumerate() {
            *slot = cw[SECONDARY_START + 2 * j + parity];
        }

        rs.encode(block, check);
        for (j, &e) in check.iter().rev().enumerate() {
            cw[SECONDARY_START + data_len + 2 * j + parity] = e;
        }
    }
}
