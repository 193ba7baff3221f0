/// Split text into raw tokens on any run of whitespace.
///
/// Newlines, tabs and spaces all separate tokens; consecutive separators
/// collapse and never yield empty tokens. No-break spaces do not separate.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

/// Unicode whitespace minus the no-break spaces and NEL, plus the
/// ASCII information separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{A0}' | '\u{2007}' | '\u{202F}' | '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Normalize a raw token into a frequency-table key.
///
/// Keeps ASCII letters, spaces and apostrophes, then lowercases. Anything
/// else (digits, punctuation, non-ASCII letters) is dropped, so the result
/// may be empty.
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|&c| is_kept(c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' ' || c == '\''
}
