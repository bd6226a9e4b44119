//! Cascada IO - WAV reading and writing for analysis output.
//!
//! The DSP core never touches files; this crate exists for the CLI's
//! export paths (clipper waveforms, rendered test signals).

pub mod wav;

pub use wav::{read_wav, write_wav};

/// IO error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV encoding or decoding failed.
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),

    /// Underlying filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for IO results.
pub type Result<T> = std::result::Result<T, Error>;
