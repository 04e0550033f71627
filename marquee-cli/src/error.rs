use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Opening or migrating the database failed
    #[error("Database error: {0}")]
    Schema(#[from] marquee_db::SchemaError),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] marquee_db::OperationError),

    /// Report generation failed
    #[error("Report error: {0}")]
    Report(#[from] marquee_report::ReportError),

    /// Date/time argument could not be parsed
    #[error("{0}")]
    Time(#[from] marquee_facility::time::TimeError),

    /// Fixture loading failed
    #[error("Fixture error: {0}")]
    Fixture(#[from] marquee_facility::FixtureError),

    /// Bad command-line argument combination or value
    #[error("{0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
