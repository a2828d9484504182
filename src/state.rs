use std::sync::Arc;

use crate::config::Config;
use crate::infrastructure::probe::HealthProbe;

/// Shared application state injected into handlers.
///
/// Cheap to clone; both fields are reference-counted. Handlers read the
/// configuration snapshot instead of touching the process environment.
#[derive(Clone)]
pub struct AppState {
    pub probe: Arc<dyn HealthProbe>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(probe: Arc<dyn HealthProbe>, config: Arc<Config>) -> Self {
        Self { probe, config }
    }
}
