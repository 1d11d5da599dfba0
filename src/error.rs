use thiserror::Error;

/// HTTP status, kterým backend hlásí neplatnou nebo expirovanou session
pub const UNAUTHORIZED: u16 = 401;

/// Chyby při načítání snapshotu z aggregation API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request se nedostal na server nebo nepřišla odpověď
    #[error("network error: {0}")]
    Network(String),

    /// Server odpověděl neúspěšným statusem
    #[error("backend error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Session vypršela, uživatel musí znovu nahrát kubeconfig
    #[error("session expired, please upload your cluster config again")]
    AuthExpired,

    /// Tělo odpovědi neodpovídá očekávané obálce
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// HTTP status, pokud server vůbec odpověděl
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::AuthExpired => Some(UNAUTHORIZED),
            _ => None,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::InvalidResponse(err.to_string());
        }
        match err.status() {
            Some(status) => Self::http(status.as_u16(), err.to_string()),
            None => Self::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_detection() {
        assert!(FetchError::http(401, "unauthorized").is_auth_failure());
        assert!(FetchError::AuthExpired.is_auth_failure());
        assert!(!FetchError::http(500, "boom").is_auth_failure());
        assert!(!FetchError::Network("refused".to_string()).is_auth_failure());
    }

    #[test]
    fn test_display() {
        let err = FetchError::http(503, "refresh in progress");
        assert_eq!(err.to_string(), "backend error (503): refresh in progress");
        assert_eq!(err.status(), Some(503));
        assert_eq!(FetchError::Network("x".into()).status(), None);
    }
}
