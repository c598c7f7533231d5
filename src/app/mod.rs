use crate::config::AppConfig;
use crate::data::{read_questions_embedded, read_tips_embedded};
use crate::error::QuizError;
use crate::gate::{AccessGate, GateStatus};
use crate::model::{AppState, Tip};
use crate::session::{QuizSession, SessionEvent};
use crate::signal::{Inbox, SubscriptionId};
use crate::theme::{AppTheme, ThemeManager};
use log::info;
use url::Url;

// Submódulos
pub mod actions;
pub mod launch;
pub mod navigation;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{ProgressCard, ResultsSummary, ReviewRow};

/// Destino externo aprobado por el gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalDestination {
    pub url: Url,
    pub payload: String,
    pub loaded: bool, // el renderer ya avisó de que cargó
}

pub struct QuizApp {
    pub state: AppState,
    pub session: QuizSession,
    pub tips: Vec<Tip>,
    pub theme: ThemeManager,
    pub gate: AccessGate,
    pub destination: Option<ExternalDestination>,
    pub message: String,
    pub show_menu: bool,
    pub show_review: bool,
    pub show_tips: bool,
    pub show_about: bool,
    pub confirm_restart: bool,
    // Lo publicado por sesión, gate y tema, pendiente de aplicar.
    session_events: Inbox<SessionEvent>,
    gate_events: Inbox<GateStatus>,
    theme_events: Inbox<AppTheme>,
    gate_watch: Option<SubscriptionId>,
}

impl QuizApp {
    /// Arranque normal: tema guardado, banco embebido y gate según config.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Result<Self, QuizError> {
        let theme = ThemeManager::load(cc.storage);
        cc.egui_ctx.set_theme(theme.current().preference());

        let session = QuizSession::new(read_questions_embedded()?)?;
        let tips = read_tips_embedded()?;
        let gate = AccessGate::from_config(&config.gate);

        info!(
            "quiz ready: {} questions, {} tips, gate endpoint configured: {}",
            session.len(),
            tips.len(),
            config.gate.endpoint.is_some()
        );

        Ok(Self::from_parts(session, tips, theme, gate))
    }

    /// Construye la app con piezas ya creadas (útil en tests).
    pub fn from_parts(
        mut session: QuizSession,
        tips: Vec<Tip>,
        mut theme: ThemeManager,
        gate: AccessGate,
    ) -> Self {
        let session_events = Inbox::new();
        session.subscribe(session_events.observer());
        let theme_events = Inbox::new();
        theme.subscribe(theme_events.observer());

        Self {
            state: AppState::Launch,
            session,
            tips,
            theme,
            gate,
            destination: None,
            message: String::new(),
            show_menu: false,
            show_review: false,
            show_tips: false,
            show_about: false,
            confirm_restart: false,
            session_events,
            gate_events: Inbox::new(),
            theme_events,
            gate_watch: None,
        }
    }
}
