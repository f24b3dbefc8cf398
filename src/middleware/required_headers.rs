use crate::header::{Rfc3339Date, VND_API_JSON};
use crate::host::Host;
use headers::HeaderMapExt;
use http::header::{ACCEPT, CONTENT_TYPE, HOST};
use http::{HeaderValue, Request};
use http_body::Body;
use std::task::{Context, Poll};

/// Stamps the headers every account API request must carry.
///
/// `Accept`, `Host` and `Date` are always set; `Content-Type` only when the
/// request has a body. Responses and errors of the inner service pass through
/// untouched.
#[derive(Clone, Debug)]
pub struct Service<S> {
    inner: S,
    host: HeaderValue,
}

impl<S, B> tower::Service<Request<B>> for Service<S>
where
    S: tower::Service<Request<B>>,
    B: Body,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        let body = request.body();
        let has_body = !body.is_end_stream() && body.size_hint().exact() != Some(0);
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static(VND_API_JSON));
        headers.insert(HOST, self.host.clone());
        headers.typed_insert(Rfc3339Date::now());
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(VND_API_JSON));
        }
        self.inner.call(request)
    }
}

#[derive(Clone, Debug)]
pub struct Layer {
    host: HeaderValue,
}

impl Layer {
    pub fn new(host: &Host) -> Self {
        Self {
            host: host.header_value().clone(),
        }
    }
}

impl<S> tower::Layer<S> for Layer {
    type Service = Service<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Service {
            inner,
            host: self.host.clone(),
        }
    }
}
