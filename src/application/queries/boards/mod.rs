mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use get_by_id::GetBoardByIdQuery;
pub use get_by_slug::GetBoardBySlugQuery;
pub use service::BoardQueryService;
