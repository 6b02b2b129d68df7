const MAX_PREVIEW_CHARS: usize = 80;

const SECRET_MARKERS: &[&str] = &["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Short, log-safe rendition of user text: truncated on a char boundary and
/// with credential-looking values masked.
pub fn preview_for_log(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "[EMPTY]".to_string();
    }

    let total_chars = trimmed.chars().count();
    let mut preview: String = trimmed.chars().take(MAX_PREVIEW_CHARS).collect();
    preview = mask_secrets(&preview);

    if total_chars > MAX_PREVIEW_CHARS {
        preview.push_str(&format!("... ({total_chars} chars)"));
    }

    preview
}

fn mask_secrets(text: &str) -> String {
    let mut masked = text.to_string();
    for marker in SECRET_MARKERS {
        let mut search_from = 0;
        while let Some(found) = masked[search_from..].find(marker) {
            let value_start = search_from + found + marker.len();
            let value_end = masked[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
                .map_or(masked.len(), |i| value_start + i);
            masked.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }
    masked
}
