// src/application/ports/util.rs

/// Turns a display name into a URL-safe slug. Implementations must be pure:
/// lowercase output, hyphen-separated, no leading or trailing hyphen.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
