//! This module defines the errors realizing a sequence can fail with.

use alloc::string::{String, ToString};

use core::fmt::Display;

/// [`SeqError`] enumerates why a realization was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// A count or index was not a non-negative integer fitting into `usize`.
    #[error("invalid argument `{argument}`: expected a non-negative integer, got {value}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },
    /// An index lay beyond the end of a finite sequence which has `len` elements.
    #[error("index {index} out of range for sequence of {len} elements")]
    OutOfRange { index: usize, len: usize },
}

/// Validate that `value` can serve as a count or index named `argument`.
pub(crate) fn count<N>(argument: &'static str, value: N) -> Result<usize, SeqError>
where
    N: TryInto<usize> + Display + Copy,
{
    value.try_into().map_err(|_| {
        tracing::debug!(argument, %value, "rejected count");
        SeqError::InvalidArgument {
            argument,
            value: value.to_string(),
        }
    })
}
