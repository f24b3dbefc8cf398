use crate::account::AccountData;
use crate::api::{self, create_account, delete_account, fetch_account};
use crate::error::{BoxError, Cancelled, Error};
use crate::host::Host;
use crate::middleware::required_headers;
use bytes::Bytes;
use futures::future::{self, Either};
use http::{Request, Response};
use http_body::Body;
use std::fmt;
use std::marker::PhantomData;
use std::pin::pin;
use tokio_util::sync::CancellationToken;
use tower::Layer;

/// Account API client over any `tower` HTTP transport accepting `Request<B>`.
pub struct Client<S, B> {
    host: Host,
    service: required_headers::Service<S>,
    _body: PhantomData<fn(B)>,
}

impl<S, B> Client<S, B> {
    pub fn new(host: Host, service: S) -> Self {
        let service = required_headers::Layer::new(&host).layer(service);
        Self {
            host,
            service,
            _body: PhantomData,
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }
}

impl<S, B> Clone for Client<S, B>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            service: self.service.clone(),
            _body: PhantomData,
        }
    }
}

impl<S, B> fmt::Debug for Client<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").field("host", &self.host).finish()
    }
}

impl<S, B, U> Client<S, B>
where
    S: tower::Service<Request<B>, Response = Response<U>> + Clone,
    S::Error: Into<BoxError>,
    B: Body + Default + From<String>,
    U: Body,
    U::Error: Into<BoxError>,
{
    pub async fn create_account(
        &self,
        cancel: &CancellationToken,
        account: AccountData,
    ) -> Result<api::Envelope, Error> {
        create_account::builder(account).send(self, cancel).await
    }

    pub async fn fetch_account(
        &self,
        cancel: &CancellationToken,
        account_id: &str,
    ) -> Result<api::Envelope, Error> {
        fetch_account::builder(account_id).send(self, cancel).await
    }

    pub async fn delete_account(
        &self,
        cancel: &CancellationToken,
        account_id: &str,
        version: u64,
    ) -> Result<(), Error> {
        delete_account::builder(account_id, version)
            .send(self, cancel)
            .await
    }

    pub async fn get(
        &self,
        cancel: &CancellationToken,
        path: &str,
    ) -> Result<Response<Bytes>, Error> {
        let request = Request::get(self.host.uri(path)).body(B::default());
        self.execute(cancel, request).await
    }

    pub async fn post(
        &self,
        cancel: &CancellationToken,
        path: &str,
        body: String,
    ) -> Result<Response<Bytes>, Error> {
        let request = Request::post(self.host.uri(path)).body(B::from(body));
        self.execute(cancel, request).await
    }

    pub async fn delete(
        &self,
        cancel: &CancellationToken,
        path: &str,
    ) -> Result<Response<Bytes>, Error> {
        let request = Request::delete(self.host.uri(path)).body(B::default());
        self.execute(cancel, request).await
    }

    // Single attempt. Cancelling drops the in-flight exchange together with
    // any partially read body.
    async fn execute(
        &self,
        cancel: &CancellationToken,
        request: Result<Request<B>, http::Error>,
    ) -> Result<Response<Bytes>, Error> {
        let request =
            request.map_err(|e| Error::internal("failed to create http request", e))?;
        if cancel.is_cancelled() {
            return Err(Error::internal("failed to send http request", Cancelled));
        }
        tracing::debug!(method = %request.method(), uri = %request.uri(), "sending request");

        let exchange = pin!(api::future::exchange(self.service.clone(), request));
        let cancelled = pin!(cancel.cancelled());
        match future::select(exchange, cancelled).await {
            Either::Left((response, _)) => response,
            Either::Right(((), _)) => {
                tracing::debug!("request cancelled");
                Err(Error::internal("failed to send http request", Cancelled))
            }
        }
    }
}

#[cfg(feature = "hyper-util")]
mod connect {
    use super::Client;
    use crate::config::Config;
    use crate::error::BoxError;
    use bytes::Bytes;
    use http::{Request, Response};
    use http_body_util::Full;
    use hyper::body::Incoming;
    use hyper_util::client::legacy;
    use hyper_util::rt::TokioExecutor;
    use tower::timeout::TimeoutLayer;
    use tower::util::BoxCloneService;
    use tower::ServiceBuilder;

    pub type HttpService = BoxCloneService<Request<Full<Bytes>>, Response<Incoming>, BoxError>;
    pub type HttpClient = Client<HttpService, Full<Bytes>>;

    impl HttpClient {
        /// Must be called within a tokio runtime.
        pub fn connect(config: &Config) -> Self {
            let client = legacy::Client::builder(TokioExecutor::new()).build_http::<Full<Bytes>>();
            let service = ServiceBuilder::new()
                .boxed_clone()
                .option_layer(config.timeout.map(TimeoutLayer::new))
                .map_err(|e: legacy::Error| -> BoxError { e.into() })
                .service(client);
            Self::new(config.base_url.clone(), service)
        }
    }
}

#[cfg(feature = "hyper-util")]
pub use connect::{HttpClient, HttpService};
