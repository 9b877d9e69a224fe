use sumd_core::SummaryLength;

/// Fixed instruction sent as the system message for every summarization call.
pub const SYSTEM_PROMPT: &str = "You are a concise, faithful summarizer. \
Return a short, self-contained summary capturing key points.";

/// Renders the system and user prompts for a summarization request.
///
/// Deterministic: identical inputs produce byte-identical prompts. The text
/// is interpolated verbatim, any escaping is left to the transport layer.
pub fn build_prompts(text: &str, language: &str, length: SummaryLength) -> (String, String) {
    let user_prompt = format!(
        "Summarize the following text in {}.\n\nLength: {}.\nText:\n{}",
        language,
        length.as_str(),
        text
    );
    (SYSTEM_PROMPT.to_string(), user_prompt)
}
