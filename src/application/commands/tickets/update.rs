use super::{TicketCommandService, TicketInput};
use crate::{
    application::{
        dto::TicketDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::ticket::{TicketId, TicketUpdate},
};

/// Full replacement of a ticket's editable fields, as submitted by the edit form.
pub struct UpdateTicketCommand {
    pub id: i64,
    pub input: TicketInput,
}

impl TicketCommandService {
    pub async fn update_ticket(&self, command: UpdateTicketCommand) -> ApplicationResult<TicketDto> {
        let id = TicketId::new(command.id)?;
        let mut ticket = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("ticket not found"))?;

        let fields = self.validate_input(command.input).await?;
        ticket.replace_fields(fields, self.clock.now());

        let updated = self.write_repo.update(TicketUpdate::from(&ticket)).await?;
        Ok(updated.into())
    }
}
