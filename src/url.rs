//! Site URL helpers: note URL paths, slugs and base URLs.

use deunicode::deunicode;
use unicode_normalization::UnicodeNormalization;

/// URL path of the note at `file_path`.
///
/// The final segment's extension is stripped. With `slugify_path` every
/// segment is slugified independently. The result always ends with `/`.
/// An empty path stays empty.
pub fn url_path(file_path: &str, slugify_path: bool) -> String {
    if file_path.is_empty() {
        return String::new();
    }
    let without_extension = strip_extension(file_path);
    if !slugify_path {
        return format!("{}/", without_extension);
    }
    let segments: Vec<String> = without_extension.split('/').map(slugify).collect();
    format!("{}/", segments.join("/"))
}

/// Full note URL under the site at `site_url`.
pub fn note_url(site_url: &str, file_path: &str, slugify_path: bool) -> String {
    format!("https://{}/{}", base_url(site_url), url_path(file_path, slugify_path))
}

/// Host and path of `url` without the scheme or a single trailing `/`.
pub fn base_url(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    stripped.strip_suffix('/').unwrap_or(stripped).to_string()
}

/// Lowercase, dash-separated ASCII slug of one path segment.
///
/// Text is transliterated to ASCII first (`ß` reads as `ss`, Cyrillic as
/// Latin). camelCase boundaries then become separators, `&` reads as "and",
/// apostrophes vanish and every other run of non-alphanumerics collapses to a
/// single `-`.
pub fn slugify(segment: &str) -> String {
    let composed: String = segment.nfc().collect();
    let spaced = decamelize(&deunicode(&composed)).replace('&', " and ");
    let mut slug = String::with_capacity(spaced.len());
    let mut pending_dash = false;
    for c in spaced.chars() {
        if c == '\'' {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn strip_extension(path: &str) -> &str {
    let base_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[base_start..].rfind('.') {
        Some(dot) => &path[..base_start + dot],
        None => path,
    }
}

fn decamelize(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}
