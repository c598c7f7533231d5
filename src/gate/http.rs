use std::thread;
use std::time::Duration;

use log::warn;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use url::Url;

use super::{AccessCheck, CheckOutcome};
use crate::error::GateError;

const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Cuerpo JSON que devuelve el endpoint del gate.
#[derive(Debug, Default, Deserialize)]
pub struct GateResponse {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
}

/// Chequeo por HTTP: `GET` al endpoint, con timeout por petición y unos
/// pocos reintentos ante errores de red o 5xx.
#[derive(Clone, Debug)]
pub struct HttpAccessCheck {
    endpoint: String,
    timeout: Duration,
    retries: u32,
}

impl HttpAccessCheck {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, retries: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            retries,
        }
    }

    fn attempt(&self, client: &Client) -> Result<CheckOutcome, GateError> {
        let response = client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, concat!("TiresQuiz/", env!("CARGO_PKG_VERSION")))
            .send()?;

        let status = response.status();
        if matches!(status, StatusCode::NO_CONTENT | StatusCode::NOT_FOUND) {
            return Ok(CheckOutcome::Declined);
        }
        if !status.is_success() {
            return Err(GateError::HttpStatus(status));
        }

        let text = response.text()?;
        if text.trim().is_empty() {
            return Ok(CheckOutcome::Declined);
        }
        let body: GateResponse = serde_json::from_str(&text)?;
        interpret(body)
    }
}

impl AccessCheck for HttpAccessCheck {
    fn run(&self) -> Result<CheckOutcome, GateError> {
        let client = Client::builder().timeout(self.timeout).build()?;
        let mut attempt = 0;
        loop {
            match self.attempt(&client) {
                Err(err) if attempt < self.retries && is_retryable(&err) => {
                    attempt += 1;
                    warn!("access check attempt {attempt} failed: {err}, retrying");
                    thread::sleep(RETRY_BACKOFF * attempt);
                }
                other => return other,
            }
        }
    }
}

fn is_retryable(err: &GateError) -> bool {
    match err {
        GateError::Http(e) => e.is_timeout() || e.is_connect(),
        GateError::HttpStatus(status) => status.is_server_error(),
        _ => false,
    }
}

/// Traduce la respuesta a un resultado. Sin destino (o vacío) es un rechazo;
/// un destino que no sea http(s) es un error.
pub fn interpret(body: GateResponse) -> Result<CheckOutcome, GateError> {
    let Some(raw) = body
        .destination
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty())
    else {
        return Ok(CheckOutcome::Declined);
    };

    let destination = Url::parse(&raw).map_err(|_| GateError::InvalidDestination(raw.clone()))?;
    if !matches!(destination.scheme(), "http" | "https") {
        return Err(GateError::InvalidDestination(raw));
    }

    Ok(CheckOutcome::Approved {
        payload: body.payload.unwrap_or_default(),
        destination,
    })
}
