use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::intake::IntakeLogic;
use crate::errors::{AppError, AppResult};
use crate::forms::TicketForm;
use crate::ui::messages::{error, info, success};

pub async fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Ticket { kind, register } = cmd {
        let form = TicketForm {
            kind: kind.clone(),
            register: register.clone(),
        };

        let api = ctx.api()?;
        match IntakeLogic::create(&api, &mut ctx.pool, ctx.session.as_ref(), &form).await {
            Ok(id) => {
                success("Ticket sent!");
                info("Give this ticket number to the customer so they can rate the service:");
                println!("Ticket number: {id}");
            }
            Err(e @ (AppError::NotLoggedIn | AppError::AccessDenied(_))) => return Err(e),
            Err(e) => {
                error("There was an error sending the ticket!");
                return Err(e);
            }
        }
    }
    Ok(())
}
