pub mod create_account;
pub mod delete_account;
pub mod fetch_account;
pub(crate) mod future;


use crate::account::{AccountData, Links};
use crate::error::{ApiErrorBody, Error};
use bytes::Bytes;
use http::{Response, StatusCode};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";

// RFC 3986 unreserved characters stay readable in the path
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn account_path(account_id: &str) -> String {
    format!(
        "{ACCOUNTS_PATH}/{}",
        percent_encoding::utf8_percent_encode(account_id, PATH_SEGMENT),
    )
}

fn check_account_id(account_id: &str) -> Result<(), Error> {
    if account_id.is_empty() {
        Err(Error::input("account id cannot be empty"))
    } else {
        Ok(())
    }
}

/// `{"data": ..., "links": {"self": ...}}` wrapper the server puts around an account.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Envelope {
    pub data: AccountData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operation {
    Create,
    Fetch,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Fetch => "fetch",
            Self::Delete => "delete",
        })
    }
}

/// Splits a buffered response into the success body or an [`Error`].
///
/// Anything but `expected` is a failure. A failure body is read as
/// [`ApiErrorBody`]; an empty one gets a reason derived from the status.
pub(crate) fn classify(
    operation: Operation,
    expected: StatusCode,
    response: Response<Bytes>,
) -> Result<Bytes, Error> {
    let (parts, body) = response.into_parts();
    let status = parts.status;
    if status == expected {
        return Ok(body);
    }

    let message = format!(
        "failed to {operation} account, status code {}",
        status.as_u16()
    );
    let e = if body.is_empty() {
        Error::Api {
            status,
            message: format!("{message}: {}", reason(status)),
            source: None,
        }
    } else {
        let payload = serde_json::from_slice::<ApiErrorBody>(&body)
            .map_err(|e| Error::internal("failed to unmarshal response body", e))?;
        Error::Api {
            status,
            message,
            source: Some(payload),
        }
    };
    tracing::debug!(%operation, %status, "request rejected");
    Err(e)
}

fn reason(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "account not found",
        StatusCode::INTERNAL_SERVER_ERROR => "server error",
        _ => "received response with unexpected status code from server",
    }
}

pub(crate) fn decode<T>(body: &[u8]) -> Result<T, Error>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_slice(body).map_err(|e| Error::internal("failed to unmarshal response body", e))
}
