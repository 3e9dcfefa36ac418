use scrypt::{check_derived_len, Error, Params};

/// How the memory-hard mixing step is executed. Both strategies produce
/// byte-identical keys; they only differ in how the work is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Mix every lane on the current task, yielding to the scheduler after
    /// every `interrupt_step` mixing iterations so a long derivation does
    /// not monopolize it. A step of 0 runs each lane in one chunk with no
    /// yielding at all.
    Cooperative { interrupt_step: usize },
    /// Dispatch each lane to its own blocking worker and join the results.
    Parallel,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Cooperative { interrupt_step: 0 }
    }
}

/// Derivation request: cost (`n`, or `log_n` when `n` is unset), block
/// factor `r`, parallelization `p`, requested key length, and the execution
/// strategy for the mixing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub n: Option<u64>,
    pub log_n: Option<u8>,
    pub r: u32,
    pub p: u32,
    pub dk_len: usize,
    pub strategy: Strategy,
}

impl Options {
    #[must_use]
    pub const fn new(n: u64, r: u32, p: u32, dk_len: usize) -> Self {
        Self {
            n: Some(n),
            log_n: None,
            r,
            p,
            dk_len,
            strategy: Strategy::Cooperative { interrupt_step: 0 },
        }
    }

    #[must_use]
    pub const fn from_log_n(log_n: u8, r: u32, p: u32, dk_len: usize) -> Self {
        Self {
            n: None,
            log_n: Some(log_n),
            r,
            p,
            dk_len,
            strategy: Strategy::Cooperative { interrupt_step: 0 },
        }
    }

    #[must_use]
    pub const fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validate into `Params`. `n` wins when both cost forms are set.
    pub fn params(&self) -> Result<Params, Error> {
        check_derived_len(self.dk_len)?;
        match (self.n, self.log_n) {
            (Some(n), _) => Params::new(n, self.r, self.p),
            (None, Some(log_n)) => Params::from_log_n(log_n, self.r, self.p),
            (None, None) => Err(Error::MissingCost),
        }
    }
}
