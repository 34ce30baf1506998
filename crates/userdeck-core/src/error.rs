use thiserror::Error;

/// Why a directory fetch did not produce a collection.
///
/// Variants carry rendered text rather than the transport error so the value
/// can be cloned into view state and sent across tasks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error: server responded with status {status}")]
    Http { status: u16 },
    #[error("Decode error: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn network(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::Network(error_chain(err))
    }
}

/// Joins an error and its sources into one line, e.g.
/// `error sending request: connection refused`.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        source = inner.source();
    }
    parts.join(": ")
}
