use crate::handler::Response;
use hyper::{
    HeaderMap,
    header::{HeaderName, HeaderValue},
};
use log::{trace, warn};

/// Write side of an outgoing response, as seen by the security headers.
///
/// Anything that can set and delete a named header can receive a [`Helmet`](super::Helmet).
pub trait HeaderSink {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    fn remove_header(&mut self, name: &HeaderName);
}

impl HeaderSink for HeaderMap {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.insert(name, value);
    }

    fn remove_header(&mut self, name: &HeaderName) {
        self.remove(name);
    }
}

impl HeaderSink for Response {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.set(name, value);
    }

    fn remove_header(&mut self, name: &HeaderName) {
        self.remove(name);
    }
}

/// Sets `name: value`, skipping values that are not legal header bytes.
pub(crate) fn emit(sink: &mut dyn HeaderSink, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            trace!("{}: {:?}", name, value);
            sink.set_header(name, value);
        }
        Err(_) => warn!("Skipping {} header, value {:?} is not a valid header value", name, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_sets_valid_values() {
        let mut headers = HeaderMap::new();
        emit(&mut headers, HeaderName::from_static("x-test"), "on");
        assert_eq!(headers["x-test"], "on");
    }

    #[test]
    fn emit_skips_invalid_values() {
        let mut headers = HeaderMap::new();
        emit(&mut headers, HeaderName::from_static("x-test"), "a\r\nb");
        assert!(headers.get("x-test").is_none());
    }

    #[test]
    fn response_sink_removes_headers() {
        let mut res = Response::new();
        res.set_header(
            HeaderName::from_static("x-powered-by"),
            HeaderValue::from_static("Helmet"),
        );
        res.remove_header(&HeaderName::from_static("x-powered-by"));
        assert!(res.get("x-powered-by").is_none());
    }
}
