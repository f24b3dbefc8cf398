use http::StatusCode;
use std::borrow::Cow;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything an account operation can fail with.
///
/// Renders as `<kind> - <message>[: <cause>]`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input error - {message}")]
    Input { message: Cow<'static, str> },

    #[error("api error - {message}{}", suffix(.source.as_ref()))]
    Api {
        status: StatusCode,
        message: String,
        source: Option<ApiErrorBody>,
    },

    #[error("internal error - {message}: {source}")]
    Internal {
        message: Cow<'static, str>,
        source: BoxError,
    },
}

impl Error {
    pub(crate) fn input<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::Input {
            message: message.into(),
        }
    }

    pub(crate) fn internal<M, E>(message: M, source: E) -> Self
    where
        M: Into<Cow<'static, str>>,
        E: Into<BoxError>,
    {
        Self::Internal {
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. })
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

fn suffix(source: Option<&ApiErrorBody>) -> String {
    source.map(|e| format!(": {e}")).unwrap_or_default()
}

/// Failure payload returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize, thiserror::Error)]
#[error("{error_message}")]
pub struct ApiErrorBody {
    pub error_message: String,
}

#[derive(Clone, Copy, Debug, thiserror::Error)]
#[error("operation cancelled")]
pub struct Cancelled;
