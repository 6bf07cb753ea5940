use super::header::{SecurityHeader, X_XSS_PROTECTION};
use hyper::header::HeaderName;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The `X-XSS-Protection` header.
///
/// Both `0` and `1` are meaningful, so a configured value is always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct XXssProtection {
    pub xss_filtering: bool,
    /// Append `mode=block`.
    pub mode_block: bool,
    /// Appended as `report=<uri>`, unquoted.
    pub report_uri: Option<String>,
}

impl XXssProtection {
    pub fn new(xss_filtering: bool, mode_block: bool, report_uri: impl Into<String>) -> Self {
        let report_uri = report_uri.into();
        Self {
            xss_filtering,
            mode_block,
            report_uri: (!report_uri.is_empty()).then_some(report_uri),
        }
    }

    /// Filtering disabled, rendered as `0`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn header_value(&self) -> String {
        let mut value = String::from(if self.xss_filtering { "1" } else { "0" });
        if self.mode_block {
            value.push_str("; mode=block");
        }
        if let Some(uri) = self.report_uri.as_deref().filter(|uri| !uri.is_empty()) {
            value.push_str("; report=");
            value.push_str(uri);
        }
        value
    }
}

impl SecurityHeader for XXssProtection {
    const NAME: HeaderName = X_XSS_PROTECTION;

    fn is_empty(&self) -> bool {
        false
    }

    fn header_value(&self) -> Cow<'_, str> {
        Cow::Owned(XXssProtection::header_value(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::HeaderMap;

    #[test]
    fn filtering_with_mode_block() {
        let xss = XXssProtection::new(true, true, "");
        assert_eq!(xss.header_value(), "1; mode=block");
    }

    #[test]
    fn report_uri_is_unquoted() {
        let xss = XXssProtection::new(true, false, "https://example.com/xss");
        assert_eq!(xss.header_value(), "1; report=https://example.com/xss");
    }

    #[test]
    fn disabled_filtering_is_still_written() {
        let xss = XXssProtection::empty();
        assert!(!SecurityHeader::is_empty(&xss));

        let mut headers = HeaderMap::new();
        xss.write(&mut headers);
        assert_eq!(headers["x-xss-protection"], "0");
    }
}
