use std::sync::{Arc, Mutex};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tires_quiz::QuizApp;
use tires_quiz::data::read_questions_embedded;
use tires_quiz::error::GateError;
use tires_quiz::gate::{AccessCheck, AccessGate, CheckOutcome};
use tires_quiz::model::AppState;
use tires_quiz::session::QuizSession;
use tires_quiz::theme::ThemeManager;
use url::Url;

/// Chequeo que espera a que el test le dé la respuesta.
struct Remote {
    rx: Mutex<Receiver<Result<CheckOutcome, GateError>>>,
}

impl AccessCheck for Remote {
    fn run(&self) -> Result<CheckOutcome, GateError> {
        let rx = self.rx.lock().unwrap();
        rx.recv().unwrap_or(Ok(CheckOutcome::Declined))
    }
}

fn app_with_remote(deadline: Duration) -> (QuizApp, Sender<Result<CheckOutcome, GateError>>) {
    let (tx, rx) = mpsc::channel();
    let gate = AccessGate::new(Arc::new(Remote { rx: Mutex::new(rx) }), deadline);
    let session =
        QuizSession::new_with_rng(read_questions_embedded().unwrap(), &mut StdRng::seed_from_u64(3))
            .unwrap();
    let app = QuizApp::from_parts(session, Vec::new(), ThemeManager::default(), gate);
    (app, tx)
}

fn wait_until(app: &mut QuizApp, done: impl Fn(&QuizApp) -> bool) {
    let start = Instant::now();
    while !done(app) {
        assert!(start.elapsed() < Duration::from_secs(5), "timed out waiting");
        app.sync_gate();
        thread::sleep(Duration::from_millis(5));
    }
}

fn approved() -> CheckOutcome {
    CheckOutcome::Approved {
        payload: "promo".into(),
        destination: Url::parse("https://tires.example.com/welcome").unwrap(),
    }
}

#[test]
fn approval_shows_external_destination() {
    let (mut app, tx) = app_with_remote(Duration::from_secs(5));
    app.ensure_access_check();
    assert!(app.gate.is_validating());

    tx.send(Ok(approved())).unwrap();
    wait_until(&mut app, |a| a.state != AppState::Launch);

    assert_eq!(app.state, AppState::External);
    let dest = app.destination.clone().unwrap();
    assert_eq!(dest.url.as_str(), "https://tires.example.com/welcome");
    assert_eq!(dest.payload, "promo");
    assert!(!dest.loaded);

    app.mark_destination_loaded();
    assert!(app.destination.as_ref().unwrap().loaded);
}

#[test]
fn failure_falls_back_to_native_quiz() {
    let (mut app, tx) = app_with_remote(Duration::from_secs(5));
    app.ensure_access_check();

    tx.send(Err(GateError::InvalidDestination("ftp://nope".into())))
        .unwrap();
    wait_until(&mut app, |a| a.state != AppState::Launch);

    assert_eq!(app.state, AppState::Welcome);
    assert!(app.destination.is_none());
}

#[test]
fn repeated_launch_frames_start_one_check() {
    let (mut app, tx) = app_with_remote(Duration::from_secs(5));
    for _ in 0..10 {
        app.ensure_access_check();
        app.sync_gate();
    }
    assert!(app.gate.is_validating());

    tx.send(Ok(CheckOutcome::Declined)).unwrap();
    wait_until(&mut app, |a| a.state != AppState::Launch);
    assert_eq!(app.state, AppState::Welcome);

    // Un gate ya resuelto no vuelve a validar
    app.ensure_access_check();
    assert!(!app.gate.is_validating());
}

#[test]
fn skipping_ignores_a_late_approval() {
    let (mut app, tx) = app_with_remote(Duration::from_secs(5));
    app.ensure_access_check();

    app.skip_access_check();
    assert_eq!(app.state, AppState::Welcome);
    assert!(!app.is_watching_gate());
    app.start_quiz();
    app.choose_answer(0);

    let _ = tx.send(Ok(approved()));
    thread::sleep(Duration::from_millis(50));
    app.sync_gate();

    assert_eq!(app.state, AppState::Quiz);
    assert!(app.destination.is_none());
    assert_eq!(app.session.answered_count(), 1);
}

#[test]
fn slow_check_hits_the_deadline() {
    let (mut app, _tx) = app_with_remote(Duration::from_millis(40));
    app.ensure_access_check();

    wait_until(&mut app, |a| a.state != AppState::Launch);

    assert_eq!(app.state, AppState::Welcome);
}
