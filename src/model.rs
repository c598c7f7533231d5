use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::QuizError;

/// Número fijo de opciones por pregunta (A-D).
pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basics,
    Maintenance,
    Safety,
    Technical,
    Seasonal,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Basics,
        Category::Maintenance,
        Category::Safety,
        Category::Technical,
        Category::Seasonal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Basics => "Tire Basics",
            Category::Maintenance => "Maintenance",
            Category::Safety => "Safety",
            Category::Technical => "Technical",
            Category::Seasonal => "Seasonal",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,   // Enunciado
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub category: Category,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer]
    }

    /// Comprueba las invariantes de una pregunta suelta.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.id.trim().is_empty() || self.text.trim().is_empty() {
            return Err(QuizError::InvalidQuestion {
                id: self.id.clone(),
                reason: "empty id or prompt".into(),
            });
        }
        if self.options.len() != OPTION_COUNT {
            return Err(QuizError::InvalidQuestion {
                id: self.id.clone(),
                reason: format!("expected {OPTION_COUNT} options, found {}", self.options.len()),
            });
        }
        if self.correct_answer >= self.options.len() {
            return Err(QuizError::InvalidQuestion {
                id: self.id.clone(),
                reason: format!("correct answer {} out of range", self.correct_answer),
            });
        }
        Ok(())
    }
}

/// Valida un banco completo: no vacío, preguntas válidas e ids únicos.
pub fn validate_bank(questions: &[Question]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::EmptyBank);
    }
    let mut seen = HashSet::new();
    for q in questions {
        q.validate()?;
        if !seen.insert(q.id.as_str()) {
            return Err(QuizError::DuplicateId(q.id.clone()));
        }
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tip {
    pub title: String,
    pub description: String,
    pub category: Category,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Launch,
    External,
    Welcome,
    Quiz,
    Results,
}
