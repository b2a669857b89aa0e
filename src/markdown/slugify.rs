//! Pure slug generation for heading anchors.

use std::collections::HashMap;

/// Generate a GitHub-style slug from text.
///
/// Converts text to lowercase, replaces spaces and special characters with hyphens,
/// and removes consecutive/leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use richblocks::markdown::slugify;
///
/// assert_eq!(slugify("Our Work"), "our-work");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                // Skip other characters
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Hands out unique slugs within one document.
///
/// Repeats get `-1`, `-2`, … appended. Text that slugifies to nothing uses
/// `"section"` as its base.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    seen: HashMap<String, usize>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `text` and make the result unique.
    pub fn slug_for(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = "section".to_string();
        }

        let count = self.seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("FAQ & Pricing?"), "faq-pricing");
        assert_eq!(slugify("step_one"), "step-one");
        assert_eq!(slugify("¡Olé!"), "ol");
    }

    #[test]
    fn test_registry_deduplicates() {
        let mut slugs = SlugRegistry::new();
        assert_eq!(slugs.slug_for("Intro"), "intro");
        assert_eq!(slugs.slug_for("Intro"), "intro-1");
        assert_eq!(slugs.slug_for("intro"), "intro-2");
        assert_eq!(slugs.slug_for("!!!"), "section");
        assert_eq!(slugs.slug_for(""), "section-1");
    }
}
