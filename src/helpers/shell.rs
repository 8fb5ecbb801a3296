//! Quoting helpers for POSIX shell command lines.

/// Escape a value for use inside a double-quoted shell word.
/// `a"b` → `a\"b`; backslash, `$` and backtick are escaped too.
pub fn escape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Wrap a value in double quotes, escaping its contents.
pub fn double_quote(value: &str) -> String {
    format!("\"{}\"", escape_double_quoted(value))
}

/// True when `word` needs no quoting at all.
pub fn is_shell_safe(word: &str) -> bool {
    !word.is_empty()
        && word.chars().all(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.' | '/' | ',' | ':' | '=' | '@' | '%' | '+')
        })
}

/// Program paths and similar words: bare when safe, double-quoted otherwise.
pub fn quote_if_needed(word: &str) -> String {
    if is_shell_safe(word) { word.to_string() } else { double_quote(word) }
}

/// `2501`, `5`, `0.5` → true. Anything else is passed through quoted.
pub fn is_plain_number(value: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for ch in value.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Clipboard payload form of a command: every `"` becomes `\"`.
pub fn escape_clipboard(command: &str) -> String {
    command.replace('"', "\\\"")
}

/// Inverse of [`escape_clipboard`].
pub fn unescape_clipboard(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut chars = payload.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&'"') {
            continue;
        }
        out.push(ch);
    }
    out
}
