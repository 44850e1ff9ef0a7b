use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static SECRET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(bearer\s+|api_key=|password=|secret=|token=)[^\s&"']+"#)
        .expect("secret pattern is valid")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d[\d\s().-]{7,}\d").expect("phone pattern is valid")
});

/// Makes user-supplied free text (voice transcripts, prompts) safe to log:
/// credentials and contact details are redacted, long text is truncated.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = SECRET_PATTERN.replace_all(trimmed, "${1}[REDACTED]");
    let redacted = EMAIL_PATTERN.replace_all(&redacted, "[EMAIL]");
    let redacted = PHONE_PATTERN.replace_all(&redacted, "[PHONE]");

    let total_chars = redacted.chars().count();
    if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = redacted.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        redacted.into_owned()
    }
}
