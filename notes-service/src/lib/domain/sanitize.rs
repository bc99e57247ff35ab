/// Trim surrounding whitespace and escape markup-significant characters.
///
/// Escapes `&`, `<`, `>`, `"` and `'` to HTML entities and replaces NUL with
/// U+FFFD so stored values are inert if a client later renders them as HTML.
pub fn clean(input: &str) -> String {
    escape_html(input.trim())
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            '\0' => escaped.push('\u{FFFD}'),
            _ => escaped.push(c),
        }
    }

    escaped
}
