// src/view_models.rs

use crate::model::{Category, Question};
use crate::session::QuizSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerformanceLevel {
    Expert,
    GreatJob,
    GoodWork,
    KeepLearning,
}

impl PerformanceLevel {
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage >= 90.0 {
            PerformanceLevel::Expert
        } else if percentage >= 75.0 {
            PerformanceLevel::GreatJob
        } else if percentage >= 60.0 {
            PerformanceLevel::GoodWork
        } else {
            PerformanceLevel::KeepLearning
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PerformanceLevel::Expert => "Expert!",
            PerformanceLevel::GreatJob => "Great Job!",
            PerformanceLevel::GoodWork => "Good Work!",
            PerformanceLevel::KeepLearning => "Keep Learning!",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            PerformanceLevel::Expert => "🏆",
            PerformanceLevel::GreatJob => "⭐",
            PerformanceLevel::GoodWork => "👍",
            PerformanceLevel::KeepLearning => "📚",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PerformanceLevel::Expert => "You're a tire expert! Outstanding knowledge!",
            PerformanceLevel::GreatJob => "Excellent performance! You know your tires well!",
            PerformanceLevel::GoodWork => "Good job! Keep learning more about tire safety!",
            PerformanceLevel::KeepLearning => "Don't give up! Review the material and try again!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub category: Category,
    pub correct: usize,
    pub total: usize,
}

impl CategoryRow {
    pub fn label(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f32 / self.total as f32
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: f32,
    pub level: PerformanceLevel,
    pub categories: Vec<CategoryRow>,
}

impl ResultsSummary {
    pub fn from_session(session: &QuizSession) -> Self {
        let score = session.score();
        let total = session.len();
        let percentage = score as f32 / total as f32 * 100.0;
        let categories = session
            .category_breakdown()
            .into_iter()
            .map(|(category, s)| CategoryRow {
                category,
                correct: s.correct,
                total: s.total,
            })
            .collect();

        Self {
            score,
            total,
            percentage,
            level: PerformanceLevel::from_percentage(percentage),
            categories,
        }
    }

    pub fn incorrect(&self) -> usize {
        self.total - self.score
    }

    /// Porcentaje truncado, como se muestra en pantalla.
    pub fn whole_percentage(&self) -> u32 {
        self.percentage as u32
    }

    pub fn share_text(&self) -> String {
        format!(
            "I scored {}/{} ({}%) on the Tire Knowledge Quiz! 🚗",
            self.score,
            self.total,
            self.whole_percentage()
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRow {
    pub number: usize, // 1-based
    pub category: Category,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub user_answer: Option<usize>,
    pub explanation: String,
}

impl ReviewRow {
    fn new(number: usize, question: &Question, user_answer: Option<usize>) -> Self {
        Self {
            number,
            category: question.category,
            text: question.text.clone(),
            options: question.options.clone(),
            correct_answer: question.correct_answer,
            user_answer,
            explanation: question.explanation.clone(),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.user_answer == Some(self.correct_answer)
    }

    pub fn status_icon(&self) -> &'static str {
        match self.user_answer {
            None => "⭕",
            Some(_) if self.is_correct() => "✅",
            Some(_) => "❌",
        }
    }

    /// Marca de cada opción en la revisión: la correcta y la elegida si falló.
    pub fn option_marker(&self, option: usize) -> &'static str {
        if option == self.correct_answer {
            "✅"
        } else if self.user_answer == Some(option) {
            "❌"
        } else {
            "▫"
        }
    }
}

pub fn review_rows(session: &QuizSession) -> Vec<ReviewRow> {
    session
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| ReviewRow::new(i + 1, q, session.answer_at(i)))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressCard {
    pub position: usize, // 1-based
    pub total: usize,
    pub score: usize,
    pub answered: usize,
}

impl ProgressCard {
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            position: session.current_index() + 1,
            total: session.len(),
            score: session.score(),
            answered: session.answered_count(),
        }
    }

    pub fn position_label(&self) -> String {
        format!("{}/{}", self.position, self.total)
    }
}
