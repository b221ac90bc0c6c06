//! String helpers shared by the query and report code
//!
//! Case folding is ASCII-only: non-ASCII characters pass through unchanged.

/// Lower-case the ASCII letters of `s`
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Upper-case the ASCII letters of `s`
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Join `parts` with `separator` between each pair
pub fn join<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(part.as_ref());
    }
    out
}
