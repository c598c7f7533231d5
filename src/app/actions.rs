use super::*;
use crate::error::AnswerError;
use log::{debug, info, warn};

impl QuizApp {
    pub fn start_quiz(&mut self) {
        self.state = AppState::Quiz;
        self.message.clear();
    }

    /// Toca una opción de la pregunta actual.
    pub fn choose_answer(&mut self, option: usize) {
        match self.session.select_answer(option) {
            Ok(_) => self.absorb_session_events(),
            // Los botones ya están deshabilitados; la primera respuesta manda.
            Err(AnswerError::AlreadyAnswered { .. }) => {}
            Err(err) => warn!("rejected answer: {err}"),
        }
    }

    /// "Next" o "Finish" según la posición.
    pub fn go_next(&mut self) {
        if self.session.is_last() {
            self.finish_quiz();
        } else {
            self.session.next_question();
            self.absorb_session_events();
        }
    }

    pub fn go_previous(&mut self) {
        self.session.previous_question();
        self.absorb_session_events();
    }

    /// Pasa a resultados si todo está respondido; si no, lleva a la primera
    /// pregunta pendiente.
    pub fn finish_quiz(&mut self) {
        match self.session.first_unanswered() {
            None => {
                info!(
                    "quiz finished: {}/{}",
                    self.session.score(),
                    self.session.len()
                );
                self.state = AppState::Results;
                self.show_menu = false;
                self.message.clear();
            }
            Some(target) => {
                let left = self.session.len() - self.session.answered_count();
                self.go_to(target);
                self.message = format!("⚠ {left} question(s) still unanswered.");
            }
        }
    }

    /// Empieza un intento nuevo con las preguntas rebarajadas.
    pub fn restart_quiz(&mut self) {
        self.session.reset();
        self.absorb_session_events();
        self.close_overlays();
        self.confirm_restart = false;
        self.state = AppState::Quiz;
        info!("quiz restarted");
    }

    pub fn go_home(&mut self) {
        self.session.reset();
        self.absorb_session_events();
        self.close_overlays();
        self.state = AppState::Welcome;
    }

    /// El cambio llega al observador del tema; `take_theme_change` lo recoge.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    /// Último tema publicado desde la llamada anterior, si hubo cambio.
    pub fn take_theme_change(&mut self) -> Option<AppTheme> {
        self.theme_events.drain().pop()
    }

    pub fn share_text(&self) -> String {
        self.results_summary().share_text()
    }

    // Navega con las operaciones de la sesión hasta `target`.
    fn go_to(&mut self, target: usize) {
        while self.session.current_index() > target {
            self.session.previous_question();
        }
        while self.session.current_index() < target && !self.session.is_last() {
            self.session.next_question();
        }
        self.absorb_session_events();
    }

    // Responder, moverse o reiniciar deja obsoleto el aviso en pantalla.
    fn absorb_session_events(&mut self) {
        for event in self.session_events.drain() {
            if let SessionEvent::AnswerRecorded {
                position,
                option,
                correct,
            } = event
            {
                debug!("answer at {position}: option {option}, correct={correct}");
            }
            self.message.clear();
        }
    }
}
