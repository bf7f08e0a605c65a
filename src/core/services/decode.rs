//! Decoding of module tool output
//!
//! `go mod download -json` prints one JSON object per module, back to back
//! with no enclosing array, and may surround them with diagnostic lines such
//! as `go: downloading ...`. [`sanitize`] trims that noise and
//! [`decode_stream`] reads the objects one at a time.

use serde::de::DeserializeOwned;

/// Trim everything before the first `{` and after the last `}`
///
/// This is a byte-level heuristic, not a JSON-aware scan: braces inside the
/// surrounding noise will defeat it. When no `{` is present the input is
/// returned untouched so the decoder can reject it. When there is a `{` but
/// no later `}`, only the leading noise is dropped.
#[must_use]
pub fn sanitize(output: &[u8]) -> &[u8] {
    let Some(start) = output.iter().position(|&b| b == b'{') else {
        return output;
    };
    let output = &output[start..];
    match output.iter().rposition(|&b| b == b'}') {
        Some(end) => &output[..=end],
        None => output,
    }
}

/// Decode a concatenation of JSON values, in stream order
///
/// Whitespace between values is allowed; anything else that is not a
/// complete value is an error. Empty input yields an empty vector.
pub fn decode_stream<T: DeserializeOwned>(input: &[u8]) -> Result<Vec<T>, serde_json::Error> {
    serde_json::Deserializer::from_slice(input).into_iter::<T>().collect()
}
