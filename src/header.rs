use chrono::{DateTime, SecondsFormat, Utc};
use http::{HeaderName, HeaderValue};

pub const VND_API_JSON: &str = "application/vnd.api+json";

// The account API expects `Date` as RFC 3339 rather than the HTTP-date of RFC 9110.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rfc3339Date(pub DateTime<Utc>);

impl Rfc3339Date {
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl headers::Header for Rfc3339Date {
    fn name() -> &'static HeaderName {
        &http::header::DATE
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        Self: Sized,
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let value = value.to_str().map_err(|_| headers::Error::invalid())?;
        let date = DateTime::parse_from_rfc3339(value).map_err(|_| headers::Error::invalid())?;
        Ok(Self(date.with_timezone(&Utc)))
    }

    fn encode<E>(&self, values: &mut E)
    where
        E: Extend<HeaderValue>,
    {
        let value = self.0.to_rfc3339_opts(SecondsFormat::Secs, true);
        // rfc3339 output is plain ascii
        values.extend(HeaderValue::from_str(&value).ok());
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use headers::HeaderMapExt;
    use http::{HeaderMap, HeaderValue};

    #[test]
    fn test_rfc3339_date_decode() {
        {
            let headers = HeaderMap::new();
            assert_eq!(headers.typed_get::<super::Rfc3339Date>(), None);
        }
        {
            let mut headers = HeaderMap::new();
            headers.insert("date", HeaderValue::from_static("2017-07-23T00:00:00Z"));
            assert_eq!(
                headers.typed_get::<super::Rfc3339Date>(),
                Some(super::Rfc3339Date(
                    Utc.with_ymd_and_hms(2017, 7, 23, 0, 0, 0).unwrap()
                )),
            );
        }
        {
            let mut headers = HeaderMap::new();
            headers.insert(
                "date",
                HeaderValue::from_static("2017-07-23T02:00:00+02:00"),
            );
            assert_eq!(
                headers.typed_get(),
                Some(super::Rfc3339Date(
                    Utc.with_ymd_and_hms(2017, 7, 23, 0, 0, 0).unwrap()
                )),
            );
        }
        {
            let mut headers = HeaderMap::new();
            headers.insert(
                "date",
                HeaderValue::from_static("Sun, 23 Jul 2017 00:00:00 GMT"),
            );
            assert_eq!(headers.typed_get::<super::Rfc3339Date>(), None);
        }
    }

    #[test]
    fn test_rfc3339_date_encode() {
        let mut headers = HeaderMap::new();
        headers.typed_insert(super::Rfc3339Date(
            Utc.with_ymd_and_hms(2017, 7, 23, 12, 30, 5).unwrap(),
        ));
        assert_eq!(
            headers.get("date"),
            Some(&HeaderValue::from_static("2017-07-23T12:30:05Z")),
        );
    }
}
