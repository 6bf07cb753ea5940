use super::sink::{HeaderSink, emit};
use hyper::header::{self, HeaderName};
use std::borrow::Cow;

pub const CONTENT_SECURITY_POLICY: HeaderName = header::CONTENT_SECURITY_POLICY;
pub const EXPECT_CT: HeaderName = HeaderName::from_static("expect-ct");
pub const FEATURE_POLICY: HeaderName = HeaderName::from_static("feature-policy");
pub const REFERRER_POLICY: HeaderName = header::REFERRER_POLICY;
pub const STRICT_TRANSPORT_SECURITY: HeaderName = header::STRICT_TRANSPORT_SECURITY;
pub const X_CONTENT_TYPE_OPTIONS: HeaderName = header::X_CONTENT_TYPE_OPTIONS;
pub const X_DNS_PREFETCH_CONTROL: HeaderName = header::X_DNS_PREFETCH_CONTROL;
pub const X_DOWNLOAD_OPTIONS: HeaderName = HeaderName::from_static("x-download-options");
pub const X_FRAME_OPTIONS: HeaderName = header::X_FRAME_OPTIONS;
pub const X_PERMITTED_CROSS_DOMAIN_POLICIES: HeaderName =
    HeaderName::from_static("x-permitted-cross-domain-policies");
pub const X_POWERED_BY: HeaderName = HeaderName::from_static("x-powered-by");
pub const X_XSS_PROTECTION: HeaderName = header::X_XSS_PROTECTION;

/// A response header that knows its own name and textual value.
pub trait SecurityHeader {
    const NAME: HeaderName;

    /// `true` when the header must be left out of the response.
    fn is_empty(&self) -> bool;

    /// The serialized header value. Empty headers render as `""`.
    fn header_value(&self) -> Cow<'_, str>;

    fn write(&self, sink: &mut dyn HeaderSink) {
        if !self.is_empty() {
            emit(sink, Self::NAME, &self.header_value());
        }
    }
}

/// `None` is an unset header and is never written.
impl<T: SecurityHeader> SecurityHeader for Option<T> {
    const NAME: HeaderName = T::NAME;

    fn is_empty(&self) -> bool {
        self.as_ref().is_none_or(T::is_empty)
    }

    fn header_value(&self) -> Cow<'_, str> {
        match self {
            Some(inner) => inner.header_value(),
            None => Cow::Borrowed(""),
        }
    }

    fn write(&self, sink: &mut dyn HeaderSink) {
        if let Some(inner) = self {
            inner.write(sink);
        }
    }
}
