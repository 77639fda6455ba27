// src/domain/board/services/mod.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::board::entity::NewBoard;
use crate::domain::board::hooks::BoardSaveHook;
use crate::domain::board::repository::BoardReadRepository;
use crate::domain::board::value_objects::{BOARD_SLUG_MAX_CHARS, BoardName, BoardSlug};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service responsible for producing unique slugs for boards.
///
/// A slug the caller supplied is authoritative: it is kept verbatim and
/// rejected with [`DomainError::DuplicateSlug`] if another board owns it.
/// A slug derived from the name is disambiguated with a numeric suffix
/// (`ops`, `ops-1`, `ops-2`, ...).
pub struct BoardSlugService {
    read_repo: Arc<dyn BoardReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl BoardSlugService {
    pub fn new(read_repo: Arc<dyn BoardReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Returns `existing_slug` when it is non-empty, otherwise the slugified
    /// `name`. Performs no lookups.
    pub fn assign_slug(&self, name: &str, existing_slug: Option<&str>) -> String {
        match existing_slug {
            Some(slug) if !slug.is_empty() => slug.to_owned(),
            _ => self.generator.slugify(name),
        }
    }

    pub async fn generate_unique_slug(&self, name: &BoardName) -> DomainResult<BoardSlug> {
        let base = self.assign_slug(name.as_str(), None);
        let base_slug = if base.is_empty() {
            format!("board-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut suffix = 0u64;

        loop {
            let candidate = if suffix == 0 {
                truncate_slug(&base_slug, BOARD_SLUG_MAX_CHARS).to_owned()
            } else {
                let tail = format!("-{suffix}");
                let head = truncate_slug(&base_slug, BOARD_SLUG_MAX_CHARS - tail.len());
                format!("{head}{tail}")
            };
            let slug = BoardSlug::new(candidate)?;
            if self.read_repo.find_by_slug(&slug).await?.is_none() {
                if suffix > 0 {
                    tracing::debug!(base = %base_slug, slug = %slug, "disambiguated board slug");
                }
                return Ok(slug);
            }
            suffix += 1;
        }
    }

    pub async fn ensure_available(&self, slug: &BoardSlug) -> DomainResult<()> {
        if self.read_repo.find_by_slug(slug).await?.is_some() {
            tracing::warn!(slug = %slug, "rejected duplicate board slug");
            return Err(DomainError::DuplicateSlug(format!(
                "a board with slug '{slug}' already exists"
            )));
        }
        Ok(())
    }
}

/// Cuts `slug` to at most `max_len` bytes, preferring the last word boundary.
///
/// Transliteration can turn a short name into a much longer slug, so the
/// derived base has to be cut before a suffix is appended.
fn truncate_slug(slug: &str, max_len: usize) -> &str {
    if slug.len() <= max_len {
        return slug;
    }
    let mut end = max_len;
    while !slug.is_char_boundary(end) {
        end -= 1;
    }
    let head = &slug[..end];
    let head = if slug[end..].starts_with('-') {
        head
    } else {
        match head.rfind('-') {
            Some(at) if at > 0 => &head[..at],
            _ => head,
        }
    };
    head.trim_end_matches('-')
}

/// Save hook that assigns a slug to boards persisted without one.
pub struct SlugAssignmentHook {
    slugs: Arc<BoardSlugService>,
}

impl SlugAssignmentHook {
    pub fn new(slugs: Arc<BoardSlugService>) -> Self {
        Self { slugs }
    }
}

#[async_trait]
impl BoardSaveHook for SlugAssignmentHook {
    async fn before_save(&self, board: &mut NewBoard) -> DomainResult<()> {
        match &board.slug {
            Some(slug) => self.slugs.ensure_available(slug).await,
            None => {
                let slug = self.slugs.generate_unique_slug(&board.name).await?;
                board.slug = Some(slug);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::entity::Board;
    use crate::domain::board::value_objects::BoardId;
    use crate::infrastructure::util::DefaultSlugGenerator;
    use std::sync::Mutex;

    #[derive(Default)]
    struct TakenSlugs(Mutex<Vec<String>>);

    impl TakenSlugs {
        fn with(slugs: &[&str]) -> Self {
            Self(Mutex::new(slugs.iter().map(|s| (*s).to_string()).collect()))
        }
    }

    #[async_trait]
    impl BoardReadRepository for TakenSlugs {
        async fn find_by_id(&self, _id: BoardId) -> DomainResult<Option<Board>> {
            Ok(None)
        }

        async fn find_by_slug(&self, slug: &BoardSlug) -> DomainResult<Option<Board>> {
            let taken = self.0.lock().unwrap();
            Ok(taken.iter().any(|s| s == slug.as_str()).then(|| Board {
                id: BoardId::new(1).unwrap(),
                name: BoardName::new("taken").unwrap(),
                slug: slug.clone(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        }

        async fn list(&self) -> DomainResult<Vec<Board>> {
            Ok(vec![])
        }

        async fn count(&self) -> DomainResult<u64> {
            Ok(self.0.lock().unwrap().len() as u64)
        }
    }

    fn service(taken: &[&str]) -> Arc<BoardSlugService> {
        Arc::new(BoardSlugService::new(
            Arc::new(TakenSlugs::with(taken)),
            Arc::new(DefaultSlugGenerator),
        ))
    }

    #[test]
    fn assign_slug_derives_from_name() {
        let slugs = service(&[]);
        assert_eq!(slugs.assign_slug("Pre-Production", None), "pre-production");
        assert_eq!(slugs.assign_slug("  Tier 2 / Billing!! ", None), "tier-2-billing");
        assert_eq!(slugs.assign_slug("Pre-Production", Some("")), "pre-production");
    }

    #[test]
    fn assign_slug_keeps_supplied_value() {
        let slugs = service(&[]);
        assert_eq!(slugs.assign_slug("Anything At All", Some("custom-slug")), "custom-slug");
    }

    #[test]
    fn derived_slugs_are_lowercase_without_whitespace() {
        let slugs = service(&[]);
        for name in ["Pre Production", "QA\tTeam", "Mixed CASE name", "a  --  b"] {
            let slug = slugs.assign_slug(name, None);
            assert!(!slug.chars().any(char::is_whitespace), "{slug:?}");
            assert_eq!(slug, slug.to_lowercase());
            assert!(!slug.contains("--"), "{slug:?}");
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug:?}");
        }
    }

    #[tokio::test]
    async fn colliding_derived_slug_gets_suffix() {
        let slugs = service(&["pre-production", "pre-production-1"]);
        let name = BoardName::new("Pre Production").unwrap();
        let slug = slugs.generate_unique_slug(&name).await.unwrap();
        assert_eq!(slug.as_str(), "pre-production-2");
    }

    #[tokio::test]
    async fn name_without_alphanumerics_falls_back_to_board_prefix() {
        let slugs = service(&[]);
        let name = BoardName::new("!!!").unwrap();
        let slug = slugs.generate_unique_slug(&name).await.unwrap();
        assert!(slug.as_str().starts_with("board-"), "{slug}");
    }

    #[test]
    fn truncate_slug_cuts_at_word_boundary() {
        assert_eq!(truncate_slug("alpha-beta-gamma", 16), "alpha-beta-gamma");
        assert_eq!(truncate_slug("alpha-beta-gamma", 13), "alpha-beta");
        assert_eq!(truncate_slug("alpha-beta-gamma", 10), "alpha-beta");
        assert_eq!(truncate_slug("alphabetagamma", 5), "alpha");
    }

    /// 漢字は一文字が複数の ASCII 文字に転写されるため、名前の上限内でも slug が長くなる。
    #[tokio::test]
    async fn transliterated_long_name_fits_slug_limit() {
        let slugs = service(&[]);
        let name = BoardName::new("北京".repeat(50)).unwrap();
        assert!(slugs.assign_slug(name.as_str(), None).len() > BOARD_SLUG_MAX_CHARS);

        let slug = slugs.generate_unique_slug(&name).await.unwrap();
        assert!(slug.as_str().len() <= BOARD_SLUG_MAX_CHARS, "{slug}");
        assert!(!slug.as_str().ends_with('-'), "{slug}");
        assert!(slug.as_str().starts_with("bei-jing-"), "{slug}");
    }

    #[tokio::test]
    async fn suffix_on_truncated_slug_stays_within_limit() {
        let name = BoardName::new("北京".repeat(50)).unwrap();
        let first = service(&[]).generate_unique_slug(&name).await.unwrap();

        let slugs = service(&[first.as_str()]);
        let second = slugs.generate_unique_slug(&name).await.unwrap();
        assert_ne!(second, first);
        assert!(second.as_str().ends_with("-1"), "{second}");
        assert!(second.as_str().len() <= BOARD_SLUG_MAX_CHARS, "{second}");
        assert!(!second.as_str().contains("--"), "{second}");
    }

    #[tokio::test]
    async fn hook_assigns_slug_once() {
        let hook = SlugAssignmentHook::new(service(&[]));
        let mut board = NewBoard::new(BoardName::new("Pre-Production").unwrap(), Utc::now());

        hook.before_save(&mut board).await.unwrap();
        assert_eq!(board.slug.as_ref().unwrap().as_str(), "pre-production");

        board.name = BoardName::new("Something Else").unwrap();
        hook.before_save(&mut board).await.unwrap();
        assert_eq!(board.slug.as_ref().unwrap().as_str(), "pre-production");
    }

    #[tokio::test]
    async fn hook_rejects_taken_supplied_slug() {
        let hook = SlugAssignmentHook::new(service(&["pre-production"]));
        let mut board = NewBoard::new(BoardName::new("Pre-Production").unwrap(), Utc::now())
            .with_slug(BoardSlug::new("pre-production").unwrap());

        let err = hook.before_save(&mut board).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateSlug(_)));
    }
}
