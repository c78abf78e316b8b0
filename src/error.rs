/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
  #[error("No valid running data available")]
  InsufficientData,
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
  #[error("Malformed goal time '{0}': expected H:MM:SS")]
  MalformedGoalTime(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid value for {var}: {value}")]
  Invalid { var: &'static str, value: String },
}

/// Errors surfaced by the command-line layer
#[derive(Debug, thiserror::Error)]
pub enum CliError {
  #[error(transparent)]
  Analysis(#[from] AnalysisError),

  #[error(transparent)]
  Plan(#[from] PlanError),

  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error("Failed to read {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Invalid JSON input: {0}")]
  Json(#[from] serde_json::Error),
}
