//! Interactive questionnaire input.

use crate::errors::{AppError, AppResult};
use crate::forms::{FormErrors, SurveyForm};
use crate::models::{Question, Satisfaction};
use std::io::{BufRead, Write};

/// Ask `question` until a valid option number is entered.
/// End of input is an error.
pub fn ask_satisfaction<R: BufRead, W: Write>(
    question: Question,
    input: &mut R,
    out: &mut W,
) -> AppResult<Satisfaction> {
    writeln!(out, "\n{}", question.prompt())?;
    for (i, option) in Satisfaction::ALL.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, option.label())?;
    }

    loop {
        write!(out, "Choice [1-{}]: ", Satisfaction::ALL.len())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            let mut errs = FormErrors::default();
            errs.push(question.key(), "An answer is required");
            return Err(AppError::Validation(errs));
        }

        let answer = line.trim();
        let parsed = answer
            .parse::<usize>()
            .ok()
            .and_then(Satisfaction::from_choice)
            .or_else(|| Satisfaction::from_key(answer));

        match parsed {
            Some(s) => return Ok(s),
            None => writeln!(out, "Invalid choice '{answer}'.")?,
        }
    }
}

/// Prompt for every unanswered question of `form`, in order.
pub fn fill_missing<R: BufRead, W: Write>(
    form: &mut SurveyForm,
    input: &mut R,
    out: &mut W,
) -> AppResult<()> {
    for q in form.missing() {
        let answer = ask_satisfaction(q, input, out)?;
        form.answer(q, answer);
    }
    Ok(())
}
