// src/session.rs

use std::collections::BTreeMap;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{AnswerError, QuizError};
use crate::model::{Category, Question, validate_bank};
use crate::signal::{Observers, SubscriptionId};

/// Resultado de registrar una respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryScore {
    pub correct: usize,
    pub total: usize,
}

impl CategoryScore {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f32 / self.total as f32
        }
    }
}

/// Cambios que publica la sesión a sus observadores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    AnswerRecorded {
        position: usize,
        option: usize,
        correct: bool,
    },
    Moved {
        from: usize,
        to: usize,
    },
    Reset,
}

/// Un intento completo sobre el banco de preguntas.
///
/// Es el único dueño de la posición actual, las respuestas y la puntuación.
/// `user_answers` siempre tiene la misma longitud que `questions` y una
/// respuesta registrada no se sobrescribe nunca.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    user_answers: Vec<Option<usize>>,
    score: usize,
    observers: Observers<SessionEvent>,
}

impl QuizSession {
    /// Crea una sesión barajando las preguntas con el RNG del hilo.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        Self::new_with_rng(questions, &mut rand::rng())
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        mut questions: Vec<Question>,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        validate_bank(&questions)?;
        questions.shuffle(rng);
        let user_answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            current_index: 0,
            user_answers,
            score: 0,
            observers: Observers::new(),
        })
    }

    // ----------- Mutaciones -----------

    /// Registra la opción elegida para la pregunta actual.
    ///
    /// La primera respuesta es definitiva: una segunda llamada devuelve
    /// `AlreadyAnswered` sin tocar ni respuestas ni puntuación. Un índice fuera
    /// de rango se rechaza igual, sin mutar nada.
    pub fn select_answer(&mut self, index: usize) -> Result<AnswerOutcome, AnswerError> {
        let position = self.position();
        let question = &self.questions[position];

        if let Some(recorded) = self.user_answers[position] {
            return Err(AnswerError::AlreadyAnswered { recorded });
        }
        if index >= question.options.len() {
            return Err(AnswerError::InvalidOption {
                index,
                option_count: question.options.len(),
            });
        }

        let correct = question.is_correct(index);
        let correct_answer = question.correct_answer;
        self.user_answers[position] = Some(index);
        if correct {
            self.score += 1;
        }

        debug!(
            "answer recorded: question {} option {} correct={}",
            question.id, index, correct
        );
        self.observers.publish(&SessionEvent::AnswerRecorded {
            position,
            option: index,
            correct,
        });

        Ok(AnswerOutcome {
            correct,
            correct_answer,
        })
    }

    /// Avanza una posición; en la última no hace nada.
    pub fn next_question(&mut self) {
        let from = self.position();
        if from < self.questions.len() - 1 {
            self.current_index = from + 1;
            self.observers.publish(&SessionEvent::Moved {
                from,
                to: self.current_index,
            });
        }
    }

    /// Retrocede una posición; en la primera no hace nada.
    pub fn previous_question(&mut self) {
        let from = self.position();
        if from > 0 {
            self.current_index = from - 1;
            self.observers.publish(&SessionEvent::Moved {
                from,
                to: self.current_index,
            });
        }
    }

    pub fn reset(&mut self) {
        self.reset_with_rng(&mut rand::rng());
    }

    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
        self.user_answers = vec![None; self.questions.len()];
        self.score = 0;
        self.current_index = 0;
        self.observers.publish(&SessionEvent::Reset);
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&SessionEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ----------- Consultas -----------

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn user_answers(&self) -> &[Option<usize>] {
        &self.user_answers
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Nunca es cierto: una sesión siempre tiene al menos una pregunta.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.position()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.position()]
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.user_answers[self.position()]
    }

    pub fn answer_at(&self, position: usize) -> Option<usize> {
        self.user_answers.get(position).copied().flatten()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.user_answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_first(&self) -> bool {
        self.position() == 0
    }

    pub fn is_last(&self) -> bool {
        self.position() == self.questions.len() - 1
    }

    pub fn first_unanswered(&self) -> Option<usize> {
        self.user_answers.iter().position(|a| a.is_none())
    }

    /// Fracción de preguntas respondidas, en [0, 1].
    pub fn progress(&self) -> f32 {
        self.answered_count() as f32 / self.questions.len() as f32
    }

    pub fn is_complete(&self) -> bool {
        self.user_answers.iter().all(|a| a.is_some())
    }

    /// Aciertos y total por categoría. Solo aparecen las categorías presentes.
    pub fn category_breakdown(&self) -> BTreeMap<Category, CategoryScore> {
        let mut breakdown: BTreeMap<Category, CategoryScore> = BTreeMap::new();
        for (question, answer) in self.questions.iter().zip(&self.user_answers) {
            let entry = breakdown.entry(question.category).or_default();
            entry.total += 1;
            if *answer == Some(question.correct_answer) {
                entry.correct += 1;
            }
        }
        breakdown
    }

    // Índice actual acotado al rango válido.
    fn position(&self) -> usize {
        debug_assert!(self.current_index < self.questions.len());
        self.current_index.min(self.questions.len() - 1)
    }
}
