use super::*;

impl QuizApp {
    pub fn open_menu(&mut self) {
        self.show_menu = true;
    }

    pub fn close_menu(&mut self) {
        self.show_menu = false;
    }

    pub fn open_review(&mut self) {
        self.show_review = true;
    }

    pub fn open_tips(&mut self) {
        self.show_tips = true;
    }

    pub fn open_about(&mut self) {
        self.show_about = true;
    }

    /// Cierra menú y ventanas secundarias.
    pub fn close_overlays(&mut self) {
        self.show_menu = false;
        self.show_review = false;
        self.show_tips = false;
        self.show_about = false;
    }

    /// Título de la barra superior según la pantalla.
    pub fn title(&self) -> String {
        match self.state {
            AppState::Quiz => format!(
                "Question {} of {}",
                self.session.current_index() + 1,
                self.session.len()
            ),
            AppState::Results => "Quiz Results".to_owned(),
            _ => "Tire Knowledge Quiz".to_owned(),
        }
    }
}
