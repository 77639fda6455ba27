pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTicket, Ticket, TicketFields, TicketUpdate};
pub use repository::{TicketReadRepository, TicketWriteRepository};
pub use value_objects::{
    Priority, Requester, TicketComment, TicketId, TicketSubject, TicketTags, TicketType,
    ZendeskTicketId,
};
