//! Small string and byte encodings used when talking to the site.

use base64::Engine;

/// Standard (padded) base64 of a raw byte buffer.
pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// camelCase to kebab-case: a `-` before every uppercase char except the
/// first, then lowercased. Digits and punctuation are left alone.
pub fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for (i, c) in input.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
