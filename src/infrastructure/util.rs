// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slug generator backed by the `slug` crate: transliterates to ASCII,
/// lowercases, and collapses every run of other characters into one hyphen.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_matches_board_naming_rules() {
        let g = DefaultSlugGenerator;
        assert_eq!(g.slugify("Pre-Production"), "pre-production");
        assert_eq!(g.slugify("  Support   Tier 2 "), "support-tier-2");
        assert_eq!(g.slugify("Billing & Refunds!"), "billing-refunds");
        assert_eq!(g.slugify("Café Ops"), "cafe-ops");
        assert_eq!(g.slugify("***"), "");
    }
}
