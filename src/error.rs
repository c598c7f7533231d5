use thiserror::Error;

/// Errores al construir el banco de preguntas o una sesión.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question bank is empty")]
    EmptyBank,
    #[error("question `{id}` is invalid: {reason}")]
    InvalidQuestion { id: String, reason: String },
    #[error("duplicate question id `{0}`")]
    DuplicateId(String),
    #[error("tip bank is empty")]
    EmptyTips,
    #[error("could not parse embedded data: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Motivo por el que `select_answer` no registró nada.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnswerError {
    #[error("question already answered with option {recorded}")]
    AlreadyAnswered { recorded: usize },
    #[error("option {index} is out of range ({option_count} options)")]
    InvalidOption { index: usize, option_count: usize },
}

/// Fallos del chequeo externo del gate. Todos acaban en `UseNative`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GateError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("access check returned invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("access check returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("access check returned an invalid destination `{0}`")]
    InvalidDestination(String),
}
