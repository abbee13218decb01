use atlas_core::ports::FetchError;
use reqwest::StatusCode;

/// Errors while constructing a [`WorldBankClient`](super::WorldBankClient).
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("invalid provider base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Map a reqwest failure onto the port error taxonomy.
pub(crate) fn map_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Network(format!("request timed out: {error}"))
    } else if error.is_decode() {
        FetchError::Decode(error.to_string())
    } else if let Some(status) = error.status() {
        map_status_code(status)
    } else {
        FetchError::Network(error.to_string())
    }
}

pub(crate) fn map_status_code(status: StatusCode) -> FetchError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            FetchError::Network(format!("provider timed out ({status})"))
        }
        StatusCode::TOO_MANY_REQUESTS => FetchError::Network(format!("rate limited ({status})")),
        _ if status.is_server_error() => FetchError::Network(format!("server error ({status})")),
        _ => FetchError::Network(format!("unexpected status {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_network_errors() {
        for status in [
            StatusCode::NOT_FOUND,
            StatusCode::BAD_GATEWAY,
            StatusCode::GATEWAY_TIMEOUT,
            StatusCode::TOO_MANY_REQUESTS,
        ] {
            assert!(matches!(map_status_code(status), FetchError::Network(_)));
        }
        assert!(map_status_code(StatusCode::SERVICE_UNAVAILABLE)
            .to_string()
            .contains("503"));
    }
}
