//! Vertex-id decoding for event-script tokens (§9): plain decimal, or an
//! `n`-prefixed decimal with the prefix stripped.

use closeness_core::VertexId;

use crate::error::CliError;

/// Decode one token into a [`VertexId`].
///
/// Accepts `"7"` or `"n7"`; anything else is [`CliError::InvalidIdentifier`].
pub fn decode_identifier(token: &str, line: usize) -> Result<VertexId, CliError> {
    let digits = token.strip_prefix('n').unwrap_or(token);
    digits
        .parse::<VertexId>()
        .map_err(|_| CliError::InvalidIdentifier {
            line,
            token: token.to_string(),
        })
}
