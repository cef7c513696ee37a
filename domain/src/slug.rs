//! URL slugs for blog posts.

/// Turn a post title into a URL slug.
///
/// Turkish letters are transliterated to ASCII, everything is lowercased,
/// punctuation is dropped, and runs of whitespace or hyphens collapse into a
/// single hyphen. Leading and trailing hyphens are trimmed.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        let mapped = match c {
            'ç' | 'Ç' => 'c',
            'ğ' | 'Ğ' => 'g',
            'ı' | 'İ' | 'I' => 'i',
            'ö' | 'Ö' => 'o',
            'ş' | 'Ş' => 's',
            'ü' | 'Ü' => 'u',
            other => other.to_ascii_lowercase(),
        };

        if mapped.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(mapped);
        } else if mapped.is_whitespace() || mapped == '-' {
            pending_dash = true;
        }
        // any other character is dropped without breaking the word
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_seeded_post_slugs() {
        assert_eq!(
            slugify("EMS Antrenmanının Bilimsel Temelleri"),
            "ems-antrenmaninin-bilimsel-temelleri"
        );
        assert_eq!(
            slugify("20 Dakikada Maksimum Verim: EMS'in Sırrı"),
            "20-dakikada-maksimum-verim-emsin-sirri"
        );
        assert_eq!(
            slugify("Beslenme ve EMS: Mükemmel İkili"),
            "beslenme-ve-ems-mukemmel-ikili"
        );
    }

    #[test]
    fn collapses_and_trims_separators() {
        assert_eq!(slugify("  Hello -- World  "), "hello-world");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("Çok Güzel Şeyler!"), "cok-guzel-seyler");
    }
}
