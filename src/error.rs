#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    #[error("required input `{0}` was empty")]
    EmptyInput(&'static str),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("service returned status {status}")]
    Status { status: u16, body: String },
}

impl StatsError {
    /// Empty user input counts as cancellation, not failure: no request is
    /// made and no message is shown for it.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, StatsError::EmptyInput(_))
    }
}
