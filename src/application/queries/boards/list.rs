use super::BoardQueryService;
use crate::application::{dto::BoardDto, error::ApplicationResult};

impl BoardQueryService {
    /// All boards ordered by name.
    pub async fn list_boards(&self) -> ApplicationResult<Vec<BoardDto>> {
        let boards = self.read_repo.list().await?;
        Ok(boards.into_iter().map(Into::into).collect())
    }

    pub async fn count_boards(&self) -> ApplicationResult<u64> {
        Ok(self.read_repo.count().await?)
    }
}
