use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

pub const FALLBACK_FILENAME: &str = "upload";

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").unwrap());

const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "LPT1", "LPT2", "LPT3",
];

/// Reduces a client-supplied filename to a flat ASCII name that is safe to
/// join onto a storage directory. Never returns an empty string.
pub fn secure_filename(raw: &str) -> String {
    let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
    let flattened = ascii.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    let stripped = DISALLOWED.replace_all(&joined, "");
    let trimmed = stripped.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        return FALLBACK_FILENAME.to_string();
    }

    let stem = trimmed.split('.').next().unwrap_or_default();
    if RESERVED_DEVICE_NAMES.contains(&stem.to_ascii_uppercase().as_str()) {
        return format!("_{trimmed}");
    }

    trimmed.to_string()
}
