/// Marker prepended to every fallback summary so callers can tell it apart
/// from provider output.
pub const MOCK_PREFIX: &str = "[MOCK] ";

/// Appended when the input had more tokens than the fallback keeps.
pub const TRUNCATION_MARKER: &str = "...";

const MAX_TOKENS: usize = 30;

/// Deterministic local summary used when no API key is configured.
///
/// Keeps the first 30 whitespace-delimited tokens rejoined with single
/// spaces, marks truncation when tokens were dropped. Never fails and never
/// touches the network.
pub fn mock_summary(text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut summary = format!(
        "{}{}",
        MOCK_PREFIX,
        tokens.iter().take(MAX_TOKENS).copied().collect::<Vec<_>>().join(" ")
    );
    if tokens.len() > MAX_TOKENS {
        summary.push_str(TRUNCATION_MARKER);
    }
    summary
}
