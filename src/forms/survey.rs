use super::FormErrors;
use crate::api::model::CreateRatingRequest;
use crate::models::{Question, QuestionAnswer, Satisfaction};
use std::collections::BTreeMap;

/// Satisfaction questionnaire bound to one ticket id.
#[derive(Debug, Clone)]
pub struct SurveyForm {
    ticket_id: i64,
    answers: BTreeMap<Question, Satisfaction>,
}

impl SurveyForm {
    pub fn new(ticket_id: i64) -> Self {
        Self {
            ticket_id,
            answers: BTreeMap::new(),
        }
    }

    pub fn ticket_id(&self) -> i64 {
        self.ticket_id
    }

    pub fn answer(&mut self, question: Question, value: Satisfaction) {
        self.answers.insert(question, value);
    }

    pub fn get(&self, question: Question) -> Option<Satisfaction> {
        self.answers.get(&question).copied()
    }

    /// Unanswered questions, in display order.
    pub fn missing(&self) -> Vec<Question> {
        Question::ALL
            .into_iter()
            .filter(|q| !self.answers.contains_key(q))
            .collect()
    }

    /// All four answers are mandatory; the body lists them in fixed order.
    pub fn validate(&self) -> Result<CreateRatingRequest, FormErrors> {
        let mut errs = FormErrors::default();

        if self.ticket_id <= 0 {
            errs.push("id_service", format!("Invalid ticket id {}", self.ticket_id));
        }
        for q in self.missing() {
            errs.push(q.key(), "An answer is required");
        }
        errs.into_result()?;

        let questions = Question::ALL
            .into_iter()
            .filter_map(|q| {
                self.get(q).map(|a| QuestionAnswer {
                    question: q.key().to_string(),
                    answer: a.key().to_string(),
                })
            })
            .collect();

        Ok(CreateRatingRequest {
            id_service: self.ticket_id,
            questions,
        })
    }
}
