// https://api-docs.form3.tech/api.html#organisation-accounts-create

use super::{Envelope, Operation, ACCOUNTS_PATH};
use crate::account::AccountData;
use crate::client::Client;
use crate::error::{BoxError, Error};
use http::StatusCode;
use http_body::Body;
use tokio_util::sync::CancellationToken;

pub fn builder(account: AccountData) -> Builder {
    Builder { account }
}

pub struct Builder {
    account: AccountData,
}

impl Builder {
    /// Expects `201 Created`; the returned record carries the server-assigned
    /// version and timestamps.
    pub async fn send<S, B, U>(
        self,
        client: &Client<S, B>,
        cancel: &CancellationToken,
    ) -> Result<Response, Error>
    where
        S: tower::Service<http::Request<B>, Response = http::Response<U>> + Clone,
        S::Error: Into<BoxError>,
        B: Body + Default + From<String>,
        U: Body,
        U::Error: Into<BoxError>,
    {
        let body = serde_json::to_string(&Request {
            data: &self.account,
        })
        .map_err(|e| Error::internal("failed to marshal input request", e))?;
        let response = client.post(cancel, ACCOUNTS_PATH, body).await?;
        let body = super::classify(Operation::Create, StatusCode::CREATED, response)?;
        super::decode(&body)
    }
}

#[derive(Debug, serde::Serialize)]
pub struct Request<'a> {
    pub data: &'a AccountData,
}

pub type Response = Envelope;
