//! Search term to SQL pattern translation

/// Build an `ILIKE` pattern matching `term` as a literal substring.
///
/// `\`, `%` and `_` in the term are escaped, so the matching engine never
/// interprets the term as a pattern of its own.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
