use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot estimate statistics of an empty sample")]
    EmptySample,

    #[error("dimension must be at least 1")]
    ZeroDimension,

    #[error("sample count must be at least 1")]
    ZeroSamples,

    #[error("invalid dimension range {start}..={end} (step {step})")]
    InvalidRange {
        start: usize,
        end: usize,
        step: usize,
    },

    #[error("band half-width must lie in (0, 1), got {0}")]
    InvalidBand(f64),

    #[error("sigma multiplier must be 1, 2 or 3, got {0}")]
    InvalidSigma(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
