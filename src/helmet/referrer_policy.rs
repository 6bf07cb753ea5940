use super::{
    header::{REFERRER_POLICY, SecurityHeader},
    vocabulary::ReferrerPolicyDirective,
};
use hyper::header::HeaderName;
use std::{borrow::Cow, sync::OnceLock};

/// The `Referrer-Policy` header.
///
/// Browsers use the last directive they understand, so the preferred policy
/// goes last and every earlier one is a fallback.
#[derive(Debug, Clone, Default)]
pub struct ReferrerPolicy {
    directives: Vec<ReferrerPolicyDirective>,
    cache: OnceLock<String>,
}

impl ReferrerPolicy {
    pub fn new<I>(directives: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ReferrerPolicyDirective>,
    {
        let mut policy = Self::default();
        for directive in directives {
            policy.push(directive);
        }
        policy
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, directive: impl Into<ReferrerPolicyDirective>) -> &mut Self {
        let directive = directive.into();
        if directive.is_empty() {
            return self;
        }

        self.cache.take();
        self.directives.push(directive);
        self
    }

    pub fn directives(&self) -> &[ReferrerPolicyDirective] {
        &self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn header_value(&self) -> &str {
        self.cache.get_or_init(|| {
            self.directives
                .iter()
                .map(ReferrerPolicyDirective::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
    }
}

impl SecurityHeader for ReferrerPolicy {
    const NAME: HeaderName = REFERRER_POLICY;

    fn is_empty(&self) -> bool {
        ReferrerPolicy::is_empty(self)
    }

    fn header_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(ReferrerPolicy::header_value(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::HeaderMap;

    #[test]
    fn joins_with_comma_in_priority_order() {
        let rp = ReferrerPolicy::new([
            ReferrerPolicyDirective::NO_REFERRER,
            ReferrerPolicyDirective::STRICT_ORIGIN_WHEN_CROSS_ORIGIN,
        ]);
        assert_eq!(rp.header_value(), "no-referrer, strict-origin-when-cross-origin");
        assert_eq!(rp.header_value(), rp.header_value());
    }

    #[test]
    fn push_after_serialization_refreshes_value() {
        let mut rp = ReferrerPolicy::new(["no-referrer"]);
        assert_eq!(rp.header_value(), "no-referrer");

        rp.push(ReferrerPolicyDirective::SAME_ORIGIN);
        assert_eq!(rp.header_value(), "no-referrer, same-origin");
    }

    #[test]
    fn empty_policy_is_not_written() {
        let mut rp = ReferrerPolicy::empty();
        rp.push("");
        assert!(rp.is_empty());

        let mut headers = HeaderMap::new();
        rp.write(&mut headers);
        assert!(headers.is_empty());
    }
}
