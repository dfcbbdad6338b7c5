//! Slug derivation for article titles.

use std::collections::HashSet;

/// Fallback slug for titles that reduce to nothing (punctuation-only, empty).
const FALLBACK_SLUG: &str = "article";

/// Derive a URL-safe slug from a title.
#[must_use]
pub fn slugify(title: &str) -> String {
    let slug = ::slug::slugify(title);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Derive a slug that is not already taken, appending `-2`, `-3`, … as needed.
/// Slugs must stay unique across all articles.
#[must_use]
pub fn unique_slug(title: &str, taken: &HashSet<String>) -> String {
    let base = slugify(title);
    if !taken.contains(&base) {
        return base;
    }
    let mut n: u32 = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{slugify, unique_slug};

    #[test]
    fn slugify_lowercases_and_strips_accents() {
        assert_eq!(slugify("Gérer le Stress au Travail"), "gerer-le-stress-au-travail");
    }

    #[test]
    fn slugify_handles_empty_titles() {
        assert_eq!(slugify("!!!"), "article");
    }

    #[test]
    fn unique_slug_appends_counter_on_collision() {
        let taken: HashSet<String> =
            ["sommeil".to_string(), "sommeil-2".to_string()].into_iter().collect();
        assert_eq!(unique_slug("Sommeil", &taken), "sommeil-3");
        assert!(!taken.contains(&unique_slug("Sommeil", &taken)));
    }

    #[test]
    fn unique_slug_is_stable_without_collision() {
        assert_eq!(unique_slug("Confiance en soi", &HashSet::new()), "confiance-en-soi");
    }
}
