use super::header::{STRICT_TRANSPORT_SECURITY, SecurityHeader};
use hyper::header::HeaderName;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The `Strict-Transport-Security` header.
///
/// Nothing is sent unless `max_age` is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrictTransportSecurity {
    /// Seconds the browser should remember to only use HTTPS for this site.
    pub max_age: i64,
    /// Apply the rule to every subdomain as well.
    pub include_sub_domains: bool,
    /// Opt in to the browser preload list.
    pub preload: bool,
}

impl StrictTransportSecurity {
    pub fn new(max_age: i64, include_sub_domains: bool, preload: bool) -> Self {
        Self {
            max_age,
            include_sub_domains,
            preload,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.max_age <= 0
    }

    pub fn header_value(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut value = format!("max-age={}", self.max_age);
        if self.include_sub_domains {
            value.push_str("; includeSubDomains");
        }
        if self.preload {
            value.push_str("; preload");
        }
        value
    }
}

impl SecurityHeader for StrictTransportSecurity {
    const NAME: HeaderName = STRICT_TRANSPORT_SECURITY;

    fn is_empty(&self) -> bool {
        StrictTransportSecurity::is_empty(self)
    }

    fn header_value(&self) -> Cow<'_, str> {
        Cow::Owned(StrictTransportSecurity::header_value(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_age_suppresses_everything() {
        let hsts = StrictTransportSecurity::new(0, true, true);
        assert!(hsts.is_empty());
        assert_eq!(hsts.header_value(), "");

        assert!(StrictTransportSecurity::new(-1, false, false).is_empty());
    }

    #[test]
    fn all_flags() {
        let hsts = StrictTransportSecurity::new(63072000, true, true);
        assert_eq!(
            hsts.header_value(),
            "max-age=63072000; includeSubDomains; preload"
        );
    }

    #[test]
    fn field_changes_are_reflected() {
        let mut hsts = StrictTransportSecurity::new(5184000, false, false);
        assert_eq!(hsts.header_value(), "max-age=5184000");

        hsts.preload = true;
        assert_eq!(hsts.header_value(), "max-age=5184000; preload");
    }
}
