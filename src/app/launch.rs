use super::*;
use log::{debug, info};

impl QuizApp {
    /// Lanza el chequeo de acceso SOLO la primera vez.
    pub fn ensure_access_check(&mut self) {
        if *self.gate.status() == GateStatus::Idle {
            self.watch_gate();
            self.gate.begin_check();
        }
    }

    /// Recoge el resultado del gate (si llegó) y aplica los cambios de estado
    /// que haya publicado.
    pub fn sync_gate(&mut self) {
        self.gate.poll();
        for status in self.gate_events.drain() {
            self.apply_gate_status(status);
        }
    }

    /// El usuario no quiere esperar: se descarta el chequeo y se usa el quiz.
    pub fn skip_access_check(&mut self) {
        if self.gate.cancel() {
            self.sync_gate();
        }
    }

    /// La pantalla de arranque sigue al gate hasta que se resuelve.
    pub fn is_watching_gate(&self) -> bool {
        self.gate_watch.is_some()
    }

    /// El renderer externo avisa de que el contenido ya cargó.
    pub fn mark_destination_loaded(&mut self) {
        if let Some(dest) = self.destination.as_mut() {
            dest.loaded = true;
        }
    }

    fn watch_gate(&mut self) {
        if self.gate_watch.is_none() {
            self.gate_watch = Some(self.gate.subscribe(self.gate_events.observer()));
        }
    }

    fn apply_gate_status(&mut self, status: GateStatus) {
        if status.is_terminal() {
            if let Some(id) = self.gate_watch.take() {
                self.gate.unsubscribe(id);
            }
        }

        // Solo la pantalla de arranque reacciona: un resultado tardío no
        // puede pisar una sesión que ya está en otra pantalla.
        if self.state != AppState::Launch {
            debug!("ignoring gate status {status:?} outside launch screen");
            return;
        }

        match status {
            GateStatus::Idle | GateStatus::Validating => {}
            GateStatus::Approved {
                payload,
                destination,
            } => {
                info!("showing external destination");
                self.destination = Some(ExternalDestination {
                    url: destination,
                    payload,
                    loaded: false,
                });
                self.state = AppState::External;
            }
            GateStatus::UseNative => {
                self.destination = None;
                self.state = AppState::Welcome;
            }
        }
    }
}
