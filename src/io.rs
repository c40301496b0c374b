//! Sample file loading
//!
//! Reads real-valued samples from a plain text file, one sample per
//! whitespace- or newline-delimited token. This is the only input collaborator
//! of the transform; it either produces a full sample buffer or fails, so the
//! transform is never invoked on partially-parsed input.

use std::fs;
use std::path::Path;

use num_traits::{Float, FromPrimitive};
use thiserror::Error;

/// Errors from reading a sample file
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read sample file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: not a number: {token:?}")]
    Parse { line: usize, token: String },
}

/// Read all samples from a file
pub fn read_samples<T, P>(path: P) -> Result<Vec<T>, InputError>
where
    T: Float + FromPrimitive,
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path)?;
    parse_samples(&text)
}

/// Parse whitespace-delimited samples from already-loaded text
///
/// Lines are numbered from 1 in parse errors. Non-finite spellings accepted
/// by the float parser (`NaN`, `inf`) pass through; the transform handles
/// them per IEEE arithmetic.
pub fn parse_samples<T: Float + FromPrimitive>(text: &str) -> Result<Vec<T>, InputError> {
    let mut samples = Vec::new();
    for (index, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| InputError::Parse {
                line: index + 1,
                token: token.to_string(),
            })?;
            let sample = T::from_f64(value).ok_or_else(|| InputError::Parse {
                line: index + 1,
                token: token.to_string(),
            })?;
            samples.push(sample);
        }
    }
    Ok(samples)
}
