use serde::{Deserialize, Serialize};

/// One answered question, as stored by the backend (`question`/`answer` keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub questions: Vec<QuestionAnswer>,
}

