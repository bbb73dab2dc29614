//! Secondary message encoding: code set selection, shift and latch
//! codewords, number compression and ECI.

use tracing::{debug, trace};

use crate::codewords::{CODEWORD_COUNT, PRIMARY_SPILL_LEN};
use crate::tables::{CODE_SET, SYMBOL_VALUE};
use crate::{Error, Mode};

use awint_core::{InlAwi, Bits};
type U30 = InlAwi<30, { Bits::unstable_raw_digits(30) }>;

/// Longest input accepted for the secondary message, in bytes.
pub const MAX_INPUT_LEN: usize = 138;

/// Codeword announcing an ECI assignment number.
pub const ECI: u8 = 27;
/// Codeword announcing 9 digits compressed in the 5 following codewords.
pub const NS: u8 = 31;
/// Codeword used as padding after the message (Code Sets A and B).
pub const PAD: u8 = 33;
/// Code Set B: the next two symbols are in set A.
pub const SHIFT_2A: u8 = 56;
/// Code Set B: the next three symbols are in set A.
pub const SHIFT_3A: u8 = 57;
/// Code Sets C, D and E: latch to set A.
pub const LATCH_A: u8 = 58;
/// Set A: the next symbol is in set B. Set B: the next symbol is in set A.
pub const SHIFT_AB: u8 = 59;
/// Shift to set C for the next symbol, twice in a row locks in set C. Sets D
/// and E use the two following codewords.
pub const SHIFT_C: u8 = 60;
/// Set A: latch to set B. Set B: latch to set A.
pub const LATCH_AB: u8 = 63;

/// Digits packed per number compression.
const NUMERIC_RUN: usize = 9;
/// Codewords holding the 30 bit value of a compressed run.
const NUMERIC_SLICES: usize = 5;

/// MaxiCode character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CodeSet {
    /// Uppercase, digits and common punctuation.
    A = 1,
    /// Lowercase and punctuation.
    B,
    /// Latin-1 uppercase accented letters.
    C,
    /// Latin-1 lowercase accented letters.
    D,
    /// Control characters and the remaining Latin-1 bytes.
    E,
}

impl CodeSet {
    const ALL: [CodeSet; 5] = [CodeSet::A, CodeSet::B, CodeSet::C, CodeSet::D, CodeSet::E];

    /// Set of a byte in the lookup table, `None` for bytes present in more
    /// than one set.
    fn of(byte: u8) -> Option<Self> {
        match CODE_SET[byte as usize] {
            1 => Some(CodeSet::A),
            2 => Some(CodeSet::B),
            3 => Some(CodeSet::C),
            4 => Some(CodeSet::D),
            5 => Some(CodeSet::E),
            _ => None,
        }
    }

    /// Shift codeword of sets C, D and E.
    const fn shift_codeword(self) -> u8 {
        SHIFT_C + self as u8 - CodeSet::C as u8
    }
}

/// Codewords to emit before a symbol of another set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    /// `count` symbols are taken from the target set, then the current set
    /// applies again.
    Shift { codeword: u8, count: usize },
    /// The target set becomes current.
    Latch { codeword: u8, set: CodeSet },
    /// Two shift codewords in a row, the set becomes current.
    Lock(CodeSet),
}

/// Chooses how to reach `target` from `current`, `run` being the number of
/// symbols (0 to 3) of `target` right after the one being encoded.
pub fn switch(current: CodeSet, target: CodeSet, run: usize) -> Switch {
    debug_assert_ne!(current, target);

    match target {
        CodeSet::A if current == CodeSet::B => match run {
            0 => Switch::Shift { codeword: SHIFT_AB, count: 1 },
            1 => Switch::Shift { codeword: SHIFT_2A, count: 2 },
            2 => Switch::Shift { codeword: SHIFT_3A, count: 3 },
            _ => Switch::Latch { codeword: LATCH_AB, set: CodeSet::A },
        },
        CodeSet::A => Switch::Latch { codeword: LATCH_A, set: CodeSet::A },
        CodeSet::B if current != CodeSet::A || run > 0 => {
            Switch::Latch { codeword: LATCH_AB, set: CodeSet::B }
        }
        CodeSet::B => Switch::Shift { codeword: SHIFT_AB, count: 1 },
        set if run >= 3 => Switch::Lock(set),
        set => Switch::Shift { codeword: set.shift_codeword(), count: 1 },
    }
}

/// Sets a byte marked as ambiguous in the lookup table can be encoded in.
fn ambiguous_sets(value: u8) -> &'static [CodeSet] {
    match value {
        b'\r' => &[CodeSet::A, CodeSet::E],
        0x1C..=0x1E | b' ' => &CodeSet::ALL,
        b',' | b'.' | b'/' | b':' => &[CodeSet::A, CodeSet::B],
        _ => &[CodeSet::A],
    }
}

/// Prefers the set of a neighbour, the lowest one when both qualify.
fn pick_set(allowed: &[CodeSet], prev: CodeSet, next: Option<CodeSet>) -> CodeSet {
    let prev = allowed.contains(&prev).then_some(prev);
    let next = next.filter(|set| allowed.contains(set));
    match (prev, next) {
        (Some(p), Some(n)) => p.min(n),
        (Some(set), None) | (None, Some(set)) => set,
        (None, None) => allowed[0],
    }
}

/// Symbol value of an ambiguous byte once its set is known.
const fn substitute(value: u8, set: CodeSet) -> u8 {
    match (value, set) {
        (b'\r', CodeSet::E) => b'\r',
        (b'\r', _) => 0,
        (0x1C..=0x1E, CodeSet::E) => value + 4,
        (b' ', CodeSet::A) => 32,
        (b' ', CodeSet::B) => 47,
        (b' ', _) => 59,
        (b',', CodeSet::B) => 48,
        (b'.', CodeSet::B) => 49,
        (b'/', CodeSet::B) => 50,
        (b':', CodeSet::B) => 51,
        _ => value,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Set(CodeSet),
    /// Part of a run of 9 digits sent with number compression.
    Numeric,
}

/// Resolves the set and symbol value of every input byte.
fn resolve(data: &[u8], slots: &mut [Slot], values: &mut [u8]) {
    let mut prev = CodeSet::A;
    for (i, &byte) in data.iter().enumerate() {
        let value = SYMBOL_VALUE[byte as usize];
        let (set, value) = match CodeSet::of(byte) {
            Some(set) => (set, value),
            None => {
                let set = if i == 0 {
                    CodeSet::A
                } else {
                    let next = data.get(i + 1).and_then(|&b| CodeSet::of(b));
                    pick_set(ambiguous_sets(byte), prev, next)
                };
                (set, substitute(value, set))
            }
        };
        slots[i] = Slot::Set(set);
        values[i] = value;
        prev = set;
    }
}

/// Marks every run of 9 set A digits found from `start` on.
fn mark_numeric_runs(slots: &mut [Slot], values: &[u8], start: usize) {
    let mut count = 0;
    for i in start..slots.len() {
        if slots[i] == Slot::Set(CodeSet::A) && values[i].is_ascii_digit() {
            count += 1;
        } else {
            count = 0;
        }
        if count == NUMERIC_RUN {
            slots[i + 1 - NUMERIC_RUN..=i].fill(Slot::Numeric);
            count = 0;
        }
    }
}

/// Number of slots of `set` at the start of `ahead`, at most 3.
fn run_length(ahead: &[Slot], set: CodeSet) -> usize {
    ahead.iter().take(3).take_while(|&&slot| slot == Slot::Set(set)).count()
}

macro_rules! push {
    ($out:expr, $($cw:expr),+; $post:ident = $new:expr) => {{
        push!($out, $($cw),+);
        $post = $new;
    }};
    ($out:expr, $($cw:expr),+) => {{
        $( $out.push($cw); )+
    }};
}

/// A packed secondary message: every symbol of the padded stream, the first
/// [Secondary::len] of them being the message itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secondary {
    symbols: [u8; CODEWORD_COUNT],
    written: usize,
    len: usize,
}

impl Secondary {
    const fn new() -> Self {
        Self { symbols: [PAD; CODEWORD_COUNT], written: 0, len: 0 }
    }

    /// Counts every codeword, the ones past the buffer are dropped.
    fn push(&mut self, codeword: u8) {
        if let Some(slot) = self.symbols.get_mut(self.written) {
            *slot = codeword;
        }
        self.written += 1;
    }

    fn push_eci(&mut self, eci: u32) -> Result<(), Error> {
        match eci {
            0 => (),
            1..=31 => push!(self, ECI, eci as u8),
            32..=32_767 => push!(self,
                ECI,
                0x30 | ((eci >> 12) & 0x07) as u8,
                ((eci >> 6) & 0x3F) as u8,
                (eci & 0x3F) as u8
            ),
            32_768..=999_999 => push!(self,
                ECI,
                0x38 | ((eci >> 18) & 0x03) as u8,
                ((eci >> 12) & 0x3F) as u8,
                ((eci >> 6) & 0x3F) as u8,
                (eci & 0x3F) as u8
            ),
            _ => return Err(Error::InvalidEci(eci)),
        }
        Ok(())
    }

    /// NS followed by the 30 bit value of the 9 digits, 6 bits per codeword,
    /// most significant first.
    fn push_numeric(&mut self, at: usize, digits: &[u8]) -> Result<(), Error> {
        if digits.len() != NUMERIC_RUN || !digits.iter().all(u8::is_ascii_digit) {
            return Err(Error::NumericRun(at));
        }

        let mut n = U30::zero();
        {
            let mut p0 = U30::zero();
            let mut p1 = U30::zero();
            n.bytes_radix_(None, digits, 10, &mut p0, &mut p1)
                .map_err(|_| Error::NumericRun(at))?;
        }

        let mut slices = [0u8; NUMERIC_SLICES];
        for slice in slices.iter_mut().rev() {
            *slice = n.digit_udivide_inplace_(64).expect("64 > 0") as u8;
        }
        trace!(at, ?slices, "number compression");

        self.push(NS);
        for slice in slices {
            self.push(slice);
        }
        Ok(())
    }

    /// Message length in codewords, padding excluded.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The message followed by its padding.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}

/// Encodes `data` as the secondary message of a `mode` symbol, optionally
/// announcing `eci` first. Fails when the message needs more codewords than
/// the mode can hold.
pub fn encode_secondary(mode: Mode, eci: u32, data: &[u8]) -> Result<Secondary, Error> {
    if data.len() > MAX_INPUT_LEN {
        return Err(Error::Capacity { len: data.len(), capacity: MAX_INPUT_LEN });
    }

    let mut slots = [Slot::Set(CodeSet::A); CODEWORD_COUNT];
    let mut values = [PAD; CODEWORD_COUNT];
    resolve(data, &mut slots, &mut values);

    // padding stays in set B after a set B symbol
    let pad_set = match data.len().checked_sub(1).map(|last| slots[last]) {
        Some(Slot::Set(CodeSet::B)) => CodeSet::B,
        _ => CodeSet::A,
    };
    slots[data.len()..].fill(Slot::Set(pad_set));

    let start = if mode.is_structured_carrier() { 0 } else { PRIMARY_SPILL_LEN };
    mark_numeric_runs(&mut slots[..data.len()], &values, start);

    let mut out = Secondary::new();
    out.push_eci(eci)?;

    let mut current = CodeSet::A;
    let mut len = None;
    let mut i = 0;
    while i < CODEWORD_COUNT {
        if len.is_none() && i >= data.len() {
            // symbols consumed past the data by the last shift were padding.
            // A latch emitted before the padding is left out: when the message
            // fills the symbol it lands past the data region and is dropped.
            len = Some(out.written - (i - data.len()));
        }

        let set = match slots[i] {
            Slot::Set(set) => set,
            Slot::Numeric => {
                out.push_numeric(i, &values[i..i + NUMERIC_RUN])?;
                i += NUMERIC_RUN;
                continue;
            }
        };

        let mut count = 1;
        if set != current {
            let action = switch(current, set, run_length(&slots[i + 1..], set));
            trace!(position = i, ?current, target = ?set, ?action, "code set switch");
            match action {
                Switch::Shift { codeword, count: n } => {
                    push!(out, codeword);
                    count = n;
                }
                Switch::Latch { codeword, set } => push!(out, codeword; current = set),
                Switch::Lock(set) => {
                    push!(out, set.shift_codeword(), set.shift_codeword(); current = set)
                }
            }
        }

        for &value in &values[i..i + count] {
            out.push(value);
        }
        i += count;
    }

    out.len = len.unwrap_or(out.written);
    let capacity = mode.capacity();
    debug!(?mode, eci, input = data.len(), len = out.len, capacity, "secondary message encoded");

    if out.len > capacity {
        return Err(Error::Capacity { len: out.len, capacity });
    }
    Ok(out)
}
