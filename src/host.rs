use http::uri::{Authority, InvalidUri, Scheme};
use http::{HeaderValue, Uri};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum InvalidHost {
    #[error(transparent)]
    Uri(#[from] InvalidUri),
    #[error("base url has no scheme")]
    MissingScheme,
    #[error("base url has no authority")]
    MissingAuthority,
    #[error("base url must not carry user info")]
    UserInfo,
    #[error(transparent)]
    HeaderValue(#[from] http::header::InvalidHeaderValue),
}

/// Scheme and authority of the API; any path in the base url is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host {
    scheme: Scheme,
    authority: Authority,
    header_value: HeaderValue,
}

impl Host {
    pub fn parse(base_url: &str) -> Result<Self, InvalidHost> {
        let uri = base_url.parse::<Uri>()?;
        let parts = uri.into_parts();
        let scheme = parts.scheme.ok_or(InvalidHost::MissingScheme)?;
        let authority = parts.authority.ok_or(InvalidHost::MissingAuthority)?;
        if authority.as_str().contains('@') {
            return Err(InvalidHost::UserInfo);
        }
        let header_value = HeaderValue::try_from(match authority.port_u16() {
            Some(port) => format!("{}:{port}", authority.host()),
            None => authority.host().to_owned(),
        })?;
        Ok(Self {
            scheme,
            authority,
            header_value,
        })
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    pub(crate) fn header_value(&self) -> &HeaderValue {
        &self.header_value
    }

    pub(crate) fn uri(&self, path: &str) -> String {
        format!("{self}{path}")
    }
}

impl FromStr for Host {
    type Err = InvalidHost;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)
    }
}
