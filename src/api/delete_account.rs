// https://api-docs.form3.tech/api.html#organisation-accounts-delete

use super::Operation;
use crate::client::Client;
use crate::error::{BoxError, Error};
use http::StatusCode;
use http_body::Body;
use tokio_util::sync::CancellationToken;

pub fn builder<A>(account_id: A, version: u64) -> Builder
where
    A: Into<String>,
{
    Builder {
        account_id: account_id.into(),
        version,
    }
}

pub struct Builder {
    account_id: String,
    version: u64,
}

impl Builder {
    /// Removes `version` of the account. A stale version is rejected by the
    /// server with `409 Conflict`.
    pub async fn send<S, B, U>(
        self,
        client: &Client<S, B>,
        cancel: &CancellationToken,
    ) -> Result<(), Error>
    where
        S: tower::Service<http::Request<B>, Response = http::Response<U>> + Clone,
        S::Error: Into<BoxError>,
        B: Body + Default + From<String>,
        U: Body,
        U::Error: Into<BoxError>,
    {
        let Self {
            account_id,
            version,
        } = self;
        super::check_account_id(&account_id)?;
        let path = format!("{}?version={version}", super::account_path(&account_id));
        let response = client.delete(cancel, &path).await?;
        super::classify(Operation::Delete, StatusCode::NO_CONTENT, response)?;
        Ok(())
    }
}
