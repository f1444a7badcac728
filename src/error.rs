use thiserror::Error;

/// Process-level error carried up to `main`, with the exit code to report.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Failures of a single distribution request.
///
/// The first three variants are caused by the caller (bad input); the rest
/// come from the provider or the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistributionError {
    #[error("fromDate ({from}) must not be later than toDate ({to})")]
    InvalidRange { from: String, to: String },

    #[error("invalid interval '{value}', expected one of Daily, Weekly, Monthly")]
    InvalidInterval { value: String },

    #[error("malformed request body: {0}")]
    InvalidRequest(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("no price data returned for the requested range")]
    EmptyData,

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl DistributionError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::InvalidInterval { .. } | Self::InvalidRequest(_)
        )
    }

    /// HTTP-equivalent status for the inbound contract.
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            _ if self.is_client_error() => 2,
            Self::Configuration(_) => 3,
            _ => 4,
        }
    }
}

impl From<DistributionError> for AppError {
    fn from(err: DistributionError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}
