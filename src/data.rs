// src/data.rs

use crate::error::QuizError;
use crate::model::{Question, Tip, validate_bank};
use log::info;

const QUESTIONS_YAML: &str = include_str!("data/tire_questions.yaml");
const TIPS_YAML: &str = include_str!("data/tips.yaml");

/// Carga y valida el banco de preguntas embebido.
pub fn read_questions_embedded() -> Result<Vec<Question>, QuizError> {
    let questions = parse_questions(QUESTIONS_YAML)?;
    info!("loaded {} embedded questions", questions.len());
    Ok(questions)
}

/// Carga los consejos de seguridad embebidos.
pub fn read_tips_embedded() -> Result<Vec<Tip>, QuizError> {
    parse_tips(TIPS_YAML)
}

pub fn parse_questions(yaml: &str) -> Result<Vec<Question>, QuizError> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    validate_bank(&questions)?;
    Ok(questions)
}

pub fn parse_tips(yaml: &str) -> Result<Vec<Tip>, QuizError> {
    let tips: Vec<Tip> = serde_yaml::from_str(yaml)?;
    if tips.is_empty() {
        return Err(QuizError::EmptyTips);
    }
    Ok(tips)
}
