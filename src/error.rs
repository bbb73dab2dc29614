use thiserror::Error;

/// Reasons a MaxiCode symbol can not be produced from the given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("only modes 2 to 6 are supported, got mode {0}")]
    InvalidMode(u8),
    #[error("invalid structured carrier message: {0}")]
    Header(#[from] HeaderError),
    /// The message does not fit, `len` counts codewords (or input bytes when
    /// the raw input itself is too long).
    #[error("input data is too long: {len} for a capacity of {capacity}")]
    Capacity { len: usize, capacity: usize },
    #[error("ECI {0} is outside the 0 to 999999 range")]
    InvalidEci(u32),
    /// A run marked for number compression did not hold nine digits.
    #[error("digit run at symbol {0} is not a 9-digit number")]
    NumericRun(usize),
    #[error("polynomial {0:#x} does not generate a Galois field")]
    Polynomial(u16),
}

/// Structured carrier message (modes 2 and 3) validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("missing \"[)>\\x1e01\\x1d\" header")]
    MissingHeader,
    #[error("{len} bytes is shorter than the mandatory {min} bytes")]
    TooShort { len: usize, min: usize },
    #[error("message should end with an EOT marker")]
    MissingEot,
    #[error("postcode, country code and service class should be separated by GS")]
    MissingFields,
    #[error("postcode has {len} characters, expected {expected}")]
    PostcodeLength { len: usize, expected: usize },
    #[error("country code has {0} characters, expected 3")]
    CountryCodeLength(usize),
    #[error("service class has {0} characters, expected 3")]
    ServiceClassLength(usize),
    #[error("country code must be numeric")]
    CountryCodeNotNumeric,
    #[error("service class must be numeric")]
    ServiceClassNotNumeric,
    #[error("mode 2 requires the US country code 840, got {0}")]
    NotUnitedStates(u16),
    #[error("postcode must be numeric in mode 2")]
    PostcodeNotNumeric,
}
