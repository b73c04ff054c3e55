// src/utils/text.rs

//! Text normalization for search strings.

/// Lowercase `text` and strip the accents of Latin letters.
///
/// Course names in the catalog are Portuguese, so searching "calculo" has
/// to find "Cálculo".
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(strip_accent)
        .collect()
}

fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold() {
        assert_eq!(fold("Cálculo Diferencial"), "calculo diferencial");
        assert_eq!(fold("PROGRAMAÇÃO"), "programacao");
        assert_eq!(fold("abc-123"), "abc-123");
    }
}
