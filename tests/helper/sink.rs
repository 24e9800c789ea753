//! Sink test utilities

use std::sync::{Arc, Mutex};

use freshness_check::{Advisory, AdvisorySink};

/// Sink that records every advisory it receives
#[derive(Clone, Default)]
pub struct CollectingSink {
    advisories: Arc<Mutex<Vec<Advisory>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        self.advisories.lock().unwrap().clone()
    }
}

impl AdvisorySink for CollectingSink {
    fn emit(&self, advisory: &Advisory) {
        self.advisories.lock().unwrap().push(advisory.clone());
    }
}
