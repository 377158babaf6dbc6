/// One whitespace-delimited substring of the input line.
pub type Token<'a> = &'a str;

/// Split a line on runs of separators (see [`is_separator`]).
///
/// Empty tokens never appear and input order is kept. Leading, trailing and
/// repeated separators (spaces, tabs, a trailing `\r\n`) are all ignored.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    line.split(is_separator).filter(|t| !t.is_empty()).collect()
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F
/// (file, group, record and unit separator).
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// `0x` followed by the token, unchanged.
pub fn render_token(token: Token<'_>) -> String {
    format!("0x{token}")
}

/// True for one or two ASCII hex digits, i.e. something that fits in a byte.
///
/// Informational only; rendering never consults this.
pub fn is_hex_byte(token: Token<'_>) -> bool {
    (1..=2).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_hexdigit())
}
