use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The four fixed questions of the satisfaction survey, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    Atendimento,
    Tempo,
    Solucao,
    Postura,
}

impl Question {
    pub const ALL: [Question; 4] = [
        Question::Atendimento,
        Question::Tempo,
        Question::Solucao,
        Question::Postura,
    ];

    /// Wire key sent to `/create-rating`.
    pub fn key(&self) -> &'static str {
        match self {
            Question::Atendimento => "atendimento",
            Question::Tempo => "tempo",
            Question::Solucao => "solucao",
            Question::Postura => "postura",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Question::Atendimento => {
                "1 - Qual foi seu grau de satisfação com o atendimento recebido?"
            }
            Question::Tempo => "2 - Em relação ao tempo de atendimento, você se considera?",
            Question::Solucao => {
                "3 - Em relação a solução apresentada ao seu problema/dúvida, você se considera?"
            }
            Question::Postura => "4 - Em relação a postura do atendente você considera?",
        }
    }
}

/// Single-choice answer shared by every question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Satisfaction {
    #[value(name = "muito_satisfeito")]
    MuitoSatisfeito,
    #[value(name = "ligeiramente_satisfeito")]
    LigeiramenteSatisfeito,
    #[value(name = "neutro")]
    Neutro,
    #[value(name = "satisfeito")]
    Satisfeito,
    #[value(name = "pouco_satisfeito")]
    PoucoSatisfeito,
}

impl Satisfaction {
    pub const ALL: [Satisfaction; 5] = [
        Satisfaction::MuitoSatisfeito,
        Satisfaction::LigeiramenteSatisfeito,
        Satisfaction::Neutro,
        Satisfaction::Satisfeito,
        Satisfaction::PoucoSatisfeito,
    ];

    /// Convert enum → wire value
    pub fn key(&self) -> &'static str {
        match self {
            Satisfaction::MuitoSatisfeito => "muito_satisfeito",
            Satisfaction::LigeiramenteSatisfeito => "ligeiramente_satisfeito",
            Satisfaction::Neutro => "neutro",
            Satisfaction::Satisfeito => "satisfeito",
            Satisfaction::PoucoSatisfeito => "pouco_satisfeito",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Satisfaction::MuitoSatisfeito => "Muito satisfeito",
            Satisfaction::LigeiramenteSatisfeito => "Ligeiramente satisfeito",
            Satisfaction::Neutro => "Neutro",
            Satisfaction::Satisfeito => "Satisfeito",
            Satisfaction::PoucoSatisfeito => "Pouco satisfeito",
        }
    }

    /// Convert wire value → enum
    pub fn from_key(key: &str) -> Option<Self> {
        Satisfaction::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Helper for interactive input: 1-based option number.
    pub fn from_choice(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Satisfaction::ALL.get(i).copied())
    }
}
