#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url_safety_check::application::services::UrlCheckService;
use url_safety_check::domain::entities::{ThreatMatch, WhoisResult};
use url_safety_check::domain::lookups::{RegistrationLookup, ThreatLookup, ThreatLookupError};
use url_safety_check::state::AppState;

/// How the fake threat service answers.
#[derive(Clone)]
pub enum ThreatBehaviour {
    Clean,
    Matches(Vec<Value>),
    Fail,
}

pub struct FakeThreatLookup {
    behaviour: ThreatBehaviour,
    calls: AtomicUsize,
}

impl FakeThreatLookup {
    pub fn new(behaviour: ThreatBehaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThreatLookup for FakeThreatLookup {
    async fn check_threats(&self, _url: &str) -> Result<Option<Vec<ThreatMatch>>, ThreatLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behaviour {
            ThreatBehaviour::Clean => Ok(None),
            ThreatBehaviour::Matches(matches) => Ok(Some(matches.clone())),
            ThreatBehaviour::Fail => Err(ThreatLookupError::Status {
                status: 503,
                body: "{\"error\":{\"code\":503,\"message\":\"unavailable\"}}".to_string(),
            }),
        }
    }
}

pub struct FakeRegistrationLookup {
    result: WhoisResult,
    domains: std::sync::Mutex<Vec<String>>,
}

impl FakeRegistrationLookup {
    pub fn new(result: WhoisResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            domains: std::sync::Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Self::new(WhoisResult::failed())
    }

    pub fn calls(&self) -> usize {
        self.domains.lock().unwrap().len()
    }

    pub fn domains(&self) -> Vec<String> {
        self.domains.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistrationLookup for FakeRegistrationLookup {
    async fn lookup(&self, domain: &str) -> WhoisResult {
        self.domains.lock().unwrap().push(domain.to_string());
        self.result.clone()
    }
}

pub fn registrar_record() -> WhoisResult {
    WhoisResult::Record(serde_json::json!({ "registrar": "Example Registrar" }))
}

pub fn create_test_state(
    threats: Arc<FakeThreatLookup>,
    registrations: Arc<FakeRegistrationLookup>,
) -> AppState {
    let service = UrlCheckService::new(threats, registrations);
    AppState::new(Arc::new(service))
}
