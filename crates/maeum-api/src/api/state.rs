//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::CounselingService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Counseling service
  ///
  /// - Production: backed by `OpenRouterClient`
  /// - Test: backed by a stub `CompletionClient`
  pub service: Arc<CounselingService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<CounselingService>) -> Self {
    Self { config, service }
  }
}
