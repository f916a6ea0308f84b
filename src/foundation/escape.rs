//! Literal escaping and stream-label helpers for filtergraph text.

const SPECIAL: [char; 5] = [':', '=', '[', ']', '\\'];

/// Prefix every filtergraph-significant character in `value` with a backslash.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape `value` and wrap it in single quotes so it survives as one argument value.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape(value))
}

/// Wrap a stream label in brackets: `in` -> `[in]`.
pub fn label(name: &str) -> String {
    format!("[{name}]")
}

/// Bracket-wrap and concatenate labels with no separator: `[a][b]`.
pub fn labels<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().fold(String::new(), |mut acc, name| {
        acc.push('[');
        acc.push_str(name.as_ref());
        acc.push(']');
        acc
    })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/escape.rs"]
mod tests;
