// https://api-docs.form3.tech/api.html#organisation-accounts-fetch

use super::{Envelope, Operation};
use crate::client::Client;
use crate::error::{BoxError, Error};
use http::StatusCode;
use http_body::Body;
use tokio_util::sync::CancellationToken;

pub fn builder<A>(account_id: A) -> Builder
where
    A: Into<String>,
{
    Builder {
        account_id: account_id.into(),
    }
}

pub struct Builder {
    account_id: String,
}

impl Builder {
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
        let Self { account_id } = self;
        super::check_account_id(&account_id)?;
        let response = client.get(cancel, &super::account_path(&account_id)).await?;
        let body = super::classify(Operation::Fetch, StatusCode::OK, response)?;
        super::decode(&body)
    }
}

pub type Response = Envelope;
