//! Query arguments shared by the retriever, the config layer and the CLI.

use crate::error::{Error, Result};

/// Default number of passages returned per query.
pub const DEFAULT_TOP_K: usize = 2;

/// Parse a caller-supplied `top_k`.
///
/// Non-numeric input is an `InvalidArgument`. Negative counts are a valid,
/// if degenerate, request and clamp to zero ("return nothing").
pub fn parse_top_k(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("top_k must be an integer, got {trimmed:?}")))?;
    if value < 0 {
        tracing::warn!(top_k = value, "Negative top_k clamped to 0");
    }
    Ok(clamp_top_k(value))
}

/// Clamp a signed count to a usable `top_k`; anything `<= 0` becomes 0.
pub fn clamp_top_k(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}
