use crate::error::{BoxError, Error};
use bytes::Bytes;
use http_body_util::BodyExt;
use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tower::ServiceExt;

/// Sends `request` and buffers the whole response body.
///
/// The body is drained whatever the status, so the connection goes back to
/// the pool before the response is classified.
pub(crate) fn exchange<S, T, U>(service: S, request: http::Request<T>) -> Exchange<S, T, U>
where
    S: tower::Service<http::Request<T>, Response = http::Response<U>>,
    U: http_body::Body,
{
    Exchange::S0(service.oneshot(request))
}

#[pin_project::pin_project(project = ExchangeProj)]
#[allow(clippy::large_enum_variant)]
pub(crate) enum Exchange<S, T, U>
where
    S: tower::Service<http::Request<T>>,
    U: http_body::Body,
{
    S0(#[pin] tower::util::Oneshot<S, http::Request<T>>),
    S1(
        #[pin] http_body_util::combinators::Collect<U>,
        Option<http::response::Parts>,
    ),
}

impl<S, T, U> Future for Exchange<S, T, U>
where
    S: tower::Service<http::Request<T>, Response = http::Response<U>>,
    S::Error: Into<BoxError>,
    U: http_body::Body,
    U::Error: Into<BoxError>,
{
    type Output = Result<http::Response<Bytes>, Error>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            match self.as_mut().project() {
                ExchangeProj::S0(f) => {
                    let response = ready!(f.poll(cx))
                        .map_err(|e| Error::internal("failed to send http request", e))?;
                    let (parts, body) = response.into_parts();
                    tracing::debug!(status = %parts.status, "received response");
                    self.set(Self::S1(body.collect(), Some(parts)));
                }
                ExchangeProj::S1(f, parts) => {
                    let body = ready!(f.poll(cx))
                        .map_err(|e| Error::internal("failed to read response body", e))?
                        .to_bytes();
                    let parts = parts.take().expect("polled after completion");
                    tracing::debug!(len = body.len(), "read response body");
                    break Poll::Ready(Ok(http::Response::from_parts(parts, body)));
                }
            }
        }
    }
}
