// ============================================================================
// Log Sanitization
// ============================================================================
//
// Visitor-supplied form fields end up in operator logs. Before logging they
// are stripped of newlines, ANSI escapes and other control characters so a
// crafted name or email cannot forge log entries or mangle a terminal.
//
// ============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters of user input written to a log line.
const MAX_LOG_LENGTH: usize = 200;

static ANSI_ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").expect("ANSI escape pattern is valid")
});

/// Sanitize user input for safe logging.
///
/// ```
/// use papaleguas_site::utils::log_sanitizer::sanitize_for_log;
///
/// assert_eq!(
///     sanitize_for_log("maria\nINFO: Fake log entry"),
///     "maria INFO: Fake log entry"
/// );
/// assert_eq!(sanitize_for_log("test\x1b[31mred\x1b[0m"), "testred");
/// ```
pub fn sanitize_for_log(input: &str) -> String {
    let no_ansi = ANSI_ESCAPE_REGEX.replace_all(input, "");

    let cleaned: String = no_ansi
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            other => other,
        })
        .filter(|c| !c.is_control())
        .collect();

    // Truncate on a character boundary; names and messages are often accented
    if cleaned.chars().count() > MAX_LOG_LENGTH {
        let truncated: String = cleaned.chars().take(MAX_LOG_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        cleaned
    }
}
