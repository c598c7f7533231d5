// src/gate/mod.rs

pub mod http;

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use url::Url;

use crate::config::GateConfig;
use crate::error::GateError;
use crate::signal::{Observers, SubscriptionId};

pub use http::HttpAccessCheck;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateStatus {
    Idle,
    Validating,
    Approved { payload: String, destination: Url },
    UseNative,
}

impl GateStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GateStatus::Approved { .. } | GateStatus::UseNative)
    }
}

/// Lo que puede responder el chequeo externo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Approved { payload: String, destination: Url },
    Declined,
}

/// Chequeo externo que decide entre destino remoto y quiz nativo.
///
/// Se ejecuta en un hilo de fondo, una sola vez por `begin_check`, y debe
/// acotar su propia duración (timeout de red, etc.).
pub trait AccessCheck: Send + Sync {
    fn run(&self) -> Result<CheckOutcome, GateError>;
}

/// Sin endpoint configurado: siempre quiz nativo.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeOnly;

impl AccessCheck for NativeOnly {
    fn run(&self) -> Result<CheckOutcome, GateError> {
        Ok(CheckOutcome::Declined)
    }
}

pub fn check_from_config(config: &GateConfig) -> Arc<dyn AccessCheck> {
    match &config.endpoint {
        Some(endpoint) => Arc::new(HttpAccessCheck::new(
            endpoint.clone(),
            config.timeout,
            config.retries,
        )),
        None => Arc::new(NativeOnly),
    }
}

struct CheckMessage {
    generation: u64,
    result: Result<CheckOutcome, GateError>,
}

struct PendingCheck {
    generation: u64,
    started: Instant,
    rx: Receiver<CheckMessage>,
}

/// Máquina de estados `Idle -> Validating -> Approved | UseNative`.
///
/// Solo el hilo dueño cambia `status`; el resultado del hilo de fondo llega
/// por canal y se aplica en `poll`.
pub struct AccessGate {
    check: Arc<dyn AccessCheck>,
    deadline: Duration,
    status: GateStatus,
    pending: Option<PendingCheck>,
    generation: u64,
    observers: Observers<GateStatus>,
}

impl AccessGate {
    pub fn new(check: Arc<dyn AccessCheck>, deadline: Duration) -> Self {
        Self {
            check,
            deadline,
            status: GateStatus::Idle,
            pending: None,
            generation: 0,
            observers: Observers::new(),
        }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(check_from_config(config), config.deadline())
    }

    pub fn status(&self) -> &GateStatus {
        &self.status
    }

    pub fn is_validating(&self) -> bool {
        self.status == GateStatus::Validating
    }

    /// Lanza el chequeo si el gate está en `Idle`. Devuelve `true` solo si se
    /// inició uno nuevo: mientras valida, o ya resuelto, no hace nada.
    pub fn begin_check(&mut self) -> bool {
        match self.status {
            GateStatus::Idle => {}
            GateStatus::Validating => {
                debug!("access check already in flight");
                return false;
            }
            _ => {
                debug!("access check already resolved, ignoring");
                return false;
            }
        }

        self.generation += 1;
        let generation = self.generation;
        self.set_status(GateStatus::Validating);

        let (tx, rx) = mpsc::channel();
        let check = Arc::clone(&self.check);
        let spawned = thread::Builder::new()
            .name("access-check".into())
            .spawn(move || {
                let result = check.run();
                let _ = tx.send(CheckMessage { generation, result });
            });

        self.track(generation, spawned.map(|_| rx))
    }

    // Guarda el chequeo recién lanzado. Si el hilo no arrancó, el gate se
    // resuelve a `UseNative` y se devuelve `false`.
    fn track(&mut self, generation: u64, spawned: io::Result<Receiver<CheckMessage>>) -> bool {
        match spawned {
            Ok(rx) => {
                info!("access check started");
                self.pending = Some(PendingCheck {
                    generation,
                    started: Instant::now(),
                    rx,
                });
                true
            }
            Err(err) => {
                warn!("could not start access check: {err}");
                self.set_status(GateStatus::UseNative);
                false
            }
        }
    }

    /// Recoge el resultado del hilo de fondo, si ya llegó. Devuelve el nuevo
    /// estado cuando hubo transición en esta llamada.
    pub fn poll(&mut self) -> Option<GateStatus> {
        let pending = self.pending.as_ref()?;

        let next = match pending.rx.try_recv() {
            Ok(message) if message.generation == pending.generation => {
                Some(resolve(message.result))
            }
            Ok(_) => {
                debug!("discarding stale access check result");
                None
            }
            Err(TryRecvError::Empty) if pending.started.elapsed() >= self.deadline => {
                warn!("access check exceeded {:?}, using native quiz", self.deadline);
                Some(GateStatus::UseNative)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("access check ended without a result, using native quiz");
                Some(GateStatus::UseNative)
            }
        };

        let status = next?;
        self.pending = None;
        self.set_status(status.clone());
        Some(status)
    }

    /// Descarta el chequeo en curso: su resultado se ignora cuando llegue.
    pub fn cancel(&mut self) -> bool {
        if self.pending.take().is_some() {
            info!("access check cancelled");
            self.set_status(GateStatus::UseNative);
            true
        } else {
            false
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&GateStatus) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn set_status(&mut self, status: GateStatus) {
        if self.status == status {
            return;
        }
        self.status = status;
        self.observers.publish(&self.status);
    }
}

fn resolve(result: Result<CheckOutcome, GateError>) -> GateStatus {
    match result {
        Ok(CheckOutcome::Approved {
            payload,
            destination,
        }) => {
            info!("access approved, destination {destination}");
            GateStatus::Approved {
                payload,
                destination,
            }
        }
        Ok(CheckOutcome::Declined) => {
            info!("access declined, using native quiz");
            GateStatus::UseNative
        }
        Err(err) => {
            warn!("access check failed: {err}");
            GateStatus::UseNative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const LONG: Duration = Duration::from_secs(30);

    fn approved() -> CheckOutcome {
        CheckOutcome::Approved {
            payload: "token".into(),
            destination: Url::parse("https://example.com/welcome").unwrap(),
        }
    }

    /// Responde siempre lo mismo y cuenta las llamadas.
    struct Scripted {
        calls: Arc<AtomicUsize>,
        outcome: fn() -> Result<CheckOutcome, GateError>,
    }

    impl AccessCheck for Scripted {
        fn run(&self) -> Result<CheckOutcome, GateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    /// Se bloquea hasta que el test lo libere.
    struct Held {
        calls: Arc<AtomicUsize>,
        release: Mutex<Receiver<()>>,
        outcome: CheckOutcome,
    }

    impl AccessCheck for Held {
        fn run(&self) -> Result<CheckOutcome, GateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let _ = self.release.lock().unwrap().recv();
            Ok(self.outcome.clone())
        }
    }

    fn held(outcome: CheckOutcome) -> (Arc<Held>, mpsc::Sender<()>, Arc<AtomicUsize>) {
        let (tx, rx) = mpsc::channel();
        let calls = Arc::new(AtomicUsize::new(0));
        let check = Arc::new(Held {
            calls: Arc::clone(&calls),
            release: Mutex::new(rx),
            outcome,
        });
        (check, tx, calls)
    }

    fn wait_for_resolution(gate: &mut AccessGate) -> GateStatus {
        let start = Instant::now();
        while start.elapsed() < Duration::from_secs(5) {
            if let Some(status) = gate.poll() {
                return status;
            }
            thread::sleep(Duration::from_millis(2));
        }
        panic!("gate never resolved");
    }

    fn record(gate: &mut AccessGate) -> Rc<RefCell<Vec<GateStatus>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        gate.subscribe(move |s| sink.borrow_mut().push(s.clone()));
        seen
    }

    #[test]
    fn begin_check_moves_to_validating_synchronously() {
        let (check, release, _) = held(CheckOutcome::Declined);
        let mut gate = AccessGate::new(check, LONG);
        assert_eq!(gate.status(), &GateStatus::Idle);

        assert!(gate.begin_check());
        assert_eq!(gate.status(), &GateStatus::Validating);
        assert_eq!(gate.poll(), None);

        release.send(()).unwrap();
        assert_eq!(wait_for_resolution(&mut gate), GateStatus::UseNative);
    }

    #[test]
    fn second_begin_while_validating_does_not_start_another_check() {
        let (check, release, calls) = held(approved());
        let mut gate = AccessGate::new(check, LONG);
        let seen = record(&mut gate);

        assert!(gate.begin_check());
        assert!(!gate.begin_check());
        assert!(!gate.begin_check());
        release.send(()).unwrap();

        let status = wait_for_resolution(&mut gate);
        assert!(matches!(status, GateStatus::Approved { .. }));
        thread::sleep(Duration::from_millis(20));
        assert_eq!(gate.poll(), None);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let terminal = seen.borrow().iter().filter(|s| s.is_terminal()).count();
        assert_eq!(terminal, 1);
    }

    #[test]
    fn failed_check_resolves_to_native_and_never_approves() {
        let calls = Arc::new(AtomicUsize::new(0));
        let check = Arc::new(Scripted {
            calls: Arc::clone(&calls),
            outcome: || Err(GateError::InvalidDestination("ftp://nope".into())),
        });
        let mut gate = AccessGate::new(check, LONG);
        let seen = record(&mut gate);

        gate.begin_check();
        assert_eq!(wait_for_resolution(&mut gate), GateStatus::UseNative);
        assert_eq!(
            *seen.borrow(),
            vec![GateStatus::Validating, GateStatus::UseNative]
        );
    }

    #[test]
    fn approval_carries_payload_and_destination() {
        let check = Arc::new(Scripted {
            calls: Arc::new(AtomicUsize::new(0)),
            outcome: || Ok(approved()),
        });
        let mut gate = AccessGate::new(check, LONG);
        gate.begin_check();

        match wait_for_resolution(&mut gate) {
            GateStatus::Approved {
                payload,
                destination,
            } => {
                assert_eq!(payload, "token");
                assert_eq!(destination.as_str(), "https://example.com/welcome");
            }
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn begin_after_resolution_is_a_no_op() {
        let calls = Arc::new(AtomicUsize::new(0));
        let check = Arc::new(Scripted {
            calls: Arc::clone(&calls),
            outcome: || Ok(CheckOutcome::Declined),
        });
        let mut gate = AccessGate::new(check, LONG);
        gate.begin_check();
        wait_for_resolution(&mut gate);

        assert!(!gate.begin_check());
        assert_eq!(gate.status(), &GateStatus::UseNative);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn deadline_overrun_falls_back_to_native() {
        let (check, release, _) = held(approved());
        let mut gate = AccessGate::new(check, Duration::from_millis(20));
        gate.begin_check();

        assert_eq!(wait_for_resolution(&mut gate), GateStatus::UseNative);

        // El resultado tardío no cambia nada.
        release.send(()).unwrap();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(gate.poll(), None);
        assert_eq!(gate.status(), &GateStatus::UseNative);
    }

    #[test]
    fn panicking_check_falls_back_to_native() {
        struct Boom;
        impl AccessCheck for Boom {
            fn run(&self) -> Result<CheckOutcome, GateError> {
                panic!("collaborator blew up");
            }
        }

        let mut gate = AccessGate::new(Arc::new(Boom), LONG);
        gate.begin_check();
        assert_eq!(wait_for_resolution(&mut gate), GateStatus::UseNative);
    }

    #[test]
    fn cancel_discards_late_result() {
        let (check, release, _) = held(approved());
        let mut gate = AccessGate::new(check, LONG);
        let seen = record(&mut gate);
        gate.begin_check();

        assert!(gate.cancel());
        assert!(!gate.cancel());
        release.send(()).unwrap();
        thread::sleep(Duration::from_millis(20));

        assert_eq!(gate.poll(), None);
        assert_eq!(
            *seen.borrow(),
            vec![GateStatus::Validating, GateStatus::UseNative]
        );
    }

    #[test]
    fn failed_spawn_reports_no_check_started() {
        let (check, _release, _calls) = held(approved());
        let mut gate = AccessGate::new(check, LONG);
        let seen = record(&mut gate);
        gate.generation += 1;
        gate.set_status(GateStatus::Validating);

        let started = gate.track(gate.generation, Err(io::Error::other("no threads left")));

        assert!(!started);
        assert_eq!(*gate.status(), GateStatus::UseNative);
        assert!(gate.pending.is_none());
        assert_eq!(*seen.borrow(), vec![GateStatus::Validating, GateStatus::UseNative]);
    }

    #[test]
    fn native_only_declines() {
        let config = GateConfig::default();
        let mut gate = AccessGate::from_config(&config);
        gate.begin_check();
        assert_eq!(wait_for_resolution(&mut gate), GateStatus::UseNative);
    }
}
