use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::survey::SurveyLogic;
use crate::errors::AppResult;
use crate::forms::SurveyForm;
use crate::models::Question;
use crate::ui::messages::{error, header, success};
use crate::ui::prompt::fill_missing;
use std::io::{self, IsTerminal};

pub async fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Rate {
        ticket,
        atendimento,
        tempo,
        solucao,
        postura,
        no_input,
    } = cmd
    {
        let mut form = SurveyForm::new(*ticket);
        let given = [
            (Question::Atendimento, atendimento),
            (Question::Tempo, tempo),
            (Question::Solucao, solucao),
            (Question::Postura, postura),
        ];
        for (q, a) in given {
            if let Some(a) = a {
                form.answer(q, *a);
            }
        }

        if !form.missing().is_empty() && !*no_input && io::stdin().is_terminal() {
            header(format!("Pesquisa de satisfação, atendimento {ticket}"));
            let stdin = io::stdin();
            fill_missing(&mut form, &mut stdin.lock(), &mut io::stdout())?;
        }

        let api = ctx.api()?;
        match SurveyLogic::submit(&api, &mut ctx.pool, &form).await {
            Ok(()) => {
                success("Survey sent!");
                println!("Thank you for your feedback.");
            }
            Err(e) => {
                error("There was an error sending the survey!");
                return Err(e);
            }
        }
    }
    Ok(())
}
