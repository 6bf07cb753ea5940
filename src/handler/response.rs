use bytes::BytesMut;
use http_body_util::Full;
use hyper::{
    HeaderMap, Response as HyperResponse, StatusCode,
    body::Bytes,
    header::{self, HeaderName, HeaderValue, IntoHeaderName},
};
use std::str::FromStr;

pub mod error;

use error::ResponseError;

#[derive(Debug, Clone, Default)]
pub struct Response {
    status: StatusCode,
    body: BytesMut,
    headers: HeaderMap,
    ended: bool,
}

impl Response {
    pub fn new() -> Self {
        Response {
            status: StatusCode::OK,
            body: BytesMut::with_capacity(512),
            headers: HeaderMap::with_capacity(16),
            ended: false,
        }
    }

    pub fn bad_request() -> Self {
        let mut res = Self::new();
        res.status(StatusCode::BAD_REQUEST).send("Bad Request");
        res
    }

    pub fn status(&mut self, status: StatusCode) -> &mut Self {
        self.status = status;
        self
    }

    pub fn status_code(&mut self, status: u16) -> Result<&mut Self, ResponseError> {
        self.status =
            StatusCode::from_u16(status).map_err(|_| ResponseError::InvalidStatusCode(status))?;
        Ok(self)
    }

    pub fn get_status(&self) -> StatusCode {
        self.status
    }

    pub fn set<K: IntoHeaderName, V: Into<HeaderValue>>(&mut self, key: K, val: V) -> &mut Self {
        self.headers.insert(key, val.into());
        self
    }

    /// Sets a header from a string value, rejecting bytes that are illegal in HTTP.
    pub fn set_str<K: IntoHeaderName>(
        &mut self,
        key: K,
        val: &str,
    ) -> Result<&mut Self, ResponseError> {
        let val = HeaderValue::from_str(val)?;
        Ok(self.set(key, val))
    }

    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        HeaderName::from_str(key)
            .ok()
            .and_then(|k| self.headers.get(&k))
    }

    pub fn remove(&mut self, key: &HeaderName) -> Option<HeaderValue> {
        self.headers.remove(key)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn send(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        let data = data.as_ref();

        self.body.clear();
        self.body.reserve(data.len());
        self.body.extend_from_slice(data);

        self.set(header::CONTENT_LENGTH, HeaderValue::from(data.len()));

        if self.headers.get(header::CONTENT_TYPE).is_none() {
            // Best guess: plain text if it's utf8
            if std::str::from_utf8(data).is_ok() {
                self.set(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                );
            } else {
                self.set(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/octet-stream"),
                );
            }
        }

        self.end()
    }

    #[inline]
    pub fn end(&mut self) -> &mut Self {
        self.ended = true;
        self
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn r#type(&mut self, mime: impl Into<HeaderValue>) -> &mut Self {
        self.set(header::CONTENT_TYPE, mime);
        self
    }

    pub fn into_hyper(mut self) -> HyperResponse<Full<Bytes>> {
        if !self.ended {
            self.end();
        }

        let body = self.body.freeze();

        let status = if body.is_empty() && self.status == StatusCode::OK {
            StatusCode::NO_CONTENT
        } else {
            self.status
        };

        let mut response = HyperResponse::new(Full::new(body));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl From<Response> for HyperResponse<Full<Bytes>> {
    fn from(resp: Response) -> Self {
        resp.into_hyper()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_sets_body_and_content_headers() {
        let mut res = Response::new();
        res.send("OK");

        assert!(res.is_ended());
        assert_eq!(res.body(), b"OK");
        assert_eq!(res.get("content-length").unwrap(), "2");
        assert_eq!(
            res.get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn status_code_rejects_out_of_range() {
        let mut res = Response::new();
        assert!(matches!(
            res.status_code(1000),
            Err(ResponseError::InvalidStatusCode(1000))
        ));
        assert_eq!(res.get_status(), StatusCode::OK);

        res.status_code(418).unwrap();
        assert_eq!(res.get_status(), StatusCode::IM_A_TEAPOT);
    }

    #[test]
    fn set_str_rejects_newlines() {
        let mut res = Response::new();
        assert!(res.set_str("x-test", "a\nb").is_err());
        assert!(res.get("x-test").is_none());
    }

    #[test]
    fn into_hyper_keeps_status_and_headers() {
        let mut res = Response::new();
        res.status(StatusCode::CREATED)
            .set(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"))
            .send("done");

        let hyper_res = res.into_hyper();
        assert_eq!(hyper_res.status(), StatusCode::CREATED);
        assert_eq!(hyper_res.headers()[header::X_FRAME_OPTIONS], "DENY");
    }

    #[test]
    fn empty_ok_response_becomes_no_content() {
        let hyper_res = Response::new().into_hyper();
        assert_eq!(hyper_res.status(), StatusCode::NO_CONTENT);
    }
}
