/// Turn a human label into a machine-safe field key.
///
/// Accents fold to their ASCII base letter, whitespace becomes an
/// underscore, anything outside `[a-z0-9_]` is dropped, repeated
/// underscores collapse and leading/trailing ones are trimmed.
/// The transform is idempotent.
pub fn slugify(label: &str) -> String {
    let mut raw = String::with_capacity(label.len());
    for ch in label.to_lowercase().chars() {
        match ch {
            'à' | 'â' | 'ä' | 'á' | 'ã' => raw.push('a'),
            'é' | 'è' | 'ê' | 'ë' => raw.push('e'),
            'î' | 'ï' | 'í' => raw.push('i'),
            'ô' | 'ö' | 'ó' | 'õ' => raw.push('o'),
            'ù' | 'û' | 'ü' | 'ú' => raw.push('u'),
            'ç' => raw.push('c'),
            'ñ' => raw.push('n'),
            'ÿ' => raw.push('y'),
            'œ' => raw.push_str("oe"),
            'æ' => raw.push_str("ae"),
            c if c.is_whitespace() => raw.push('_'),
            c if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' => raw.push(c),
            _ => {}
        }
    }

    let mut slug = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '_' && slug.ends_with('_') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches('_').to_string()
}
