//! Text value normalisation for the quoted CSV columns.

/// Resolve iCalendar text escapes and double every quote for CSV.
///
/// `\n` (or `\N`) becomes a newline, `\,` a comma and `\;` a semicolon. `\\` yields a
/// single backslash and `\"` a bare quote. Escapes are resolved before quote doubling, so
/// a quote produced by an escape is doubled exactly once. Unknown escapes are kept as
/// written.
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        let c = match c {
            '\\' => match chars.next() {
                Some('n' | 'N') => '\n',
                Some(escaped @ (',' | ';' | '\\' | '"')) => escaped,
                Some(other) => {
                    out.push('\\');
                    other
                }
                None => '\\',
            },
            other => other,
        };
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out
}
