use super::header::{EXPECT_CT, SecurityHeader};
use hyper::header::HeaderName;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The `Expect-CT` header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpectCt {
    /// Seconds the browser should cache and apply the policy. Required.
    pub max_age: i64,
    /// Enforce the policy instead of only reporting failures.
    pub enforce: bool,
    /// Where the browser reports missing CT information.
    pub report_uri: Option<String>,
}

impl ExpectCt {
    pub fn new(max_age: i64, enforce: bool, report_uri: impl Into<String>) -> Self {
        let report_uri = report_uri.into();
        Self {
            max_age,
            enforce,
            report_uri: (!report_uri.is_empty()).then_some(report_uri),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// `enforce` and `report-uri` are optional, `max-age` is not.
    pub fn is_empty(&self) -> bool {
        self.max_age <= 0
    }

    pub fn header_value(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut value = format!("max-age={}", self.max_age);
        if self.enforce {
            value.push_str(", enforce");
        }
        if let Some(uri) = self.report_uri.as_deref().filter(|uri| !uri.is_empty()) {
            value.push_str(&format!(", report-uri=\"{uri}\""));
        }
        value
    }
}

impl SecurityHeader for ExpectCt {
    const NAME: HeaderName = EXPECT_CT;

    fn is_empty(&self) -> bool {
        ExpectCt::is_empty(self)
    }

    fn header_value(&self) -> Cow<'_, str> {
        Cow::Owned(ExpectCt::header_value(self))
    }
}
