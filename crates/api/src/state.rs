use std::sync::Arc;

use vitals_core::predictor::DrugPredictor;
use vitals_core::workflow::WorkflowController;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The single active measurement workflow.
    pub workflow: Arc<WorkflowController>,
    /// Prediction collaborator and its feature schema.
    pub predictor: Arc<dyn DrugPredictor>,
}

impl AppState {
    pub fn new(config: ServerConfig, predictor: Arc<dyn DrugPredictor>) -> Self {
        Self {
            config: Arc::new(config),
            workflow: Arc::new(WorkflowController::new()),
            predictor,
        }
    }
}
