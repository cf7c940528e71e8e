//! Identifier case conversion.

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// An underscore goes in front of every uppercase character except a leading
/// one, then the whole string is lowercased. Strings without inner capitals
/// come back lowercased and otherwise unchanged.
pub fn camel_to_dash(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 4);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}
