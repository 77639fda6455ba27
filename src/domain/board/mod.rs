pub mod entity;
pub mod hooks;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Board, BoardUpdate, NewBoard};
pub use hooks::{BoardSaveHook, HookedBoardWriteRepository};
pub use repository::{BoardReadRepository, BoardWriteRepository};
pub use value_objects::{BoardId, BoardName, BoardSlug};
