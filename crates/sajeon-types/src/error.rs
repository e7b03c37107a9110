/// Failures a lookup can surface. No-match is not an error; it is the
/// `None` result of a search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DictError {
    #[error("Failed to fetch data: {0}")]
    Network(String),

    #[error("Failed to parse JSON response: {0}")]
    Parse(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
