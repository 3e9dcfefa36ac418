use core::fmt::Display;

/// Parameter validation failure. Every variant is raised before any
/// expansion or mixing work happens, and is fatal to the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    MissingCost,
    CostOutOfRange,
    CostNotPowerOfTwo,
    LogCostOutOfRange,
    BlockSizeTooSmall,
    ParallelismTooSmall,
    ParametersTooLarge,
    OutputTooLong,
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingCost => f.write_str("missing N parameter"),
            Self::CostOutOfRange => f.write_str("N is out of range"),
            Self::CostNotPowerOfTwo => f.write_str("N is not a power of 2"),
            Self::LogCostOutOfRange => f.write_str("logN must be between 1 and 30"),
            Self::BlockSizeTooSmall => f.write_str("invalid r"),
            Self::ParallelismTooSmall => f.write_str("invalid p"),
            Self::ParametersTooLarge => f.write_str("parameters are too large"),
            Self::OutputTooLong => f.write_str("derived key is too long"),
        }
    }
}

impl std::error::Error for Error {}
