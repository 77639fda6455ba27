mod get_by_id;
mod list_by_board;
mod service;

pub use get_by_id::GetTicketQuery;
pub use list_by_board::ListBoardTicketsQuery;
pub use service::TicketQueryService;
