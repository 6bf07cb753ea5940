use super::{
    header::{FEATURE_POLICY, SecurityHeader},
    policy::DirectiveMap,
    vocabulary::{FeaturePolicyDirective, FeaturePolicyOrigin},
};
use hyper::header::HeaderName;
use std::borrow::Cow;

/// The `Feature-Policy` header. Same grammar as CSP, with origins as sources.
#[derive(Debug, Clone, Default)]
pub struct FeaturePolicy {
    policies: DirectiveMap<FeaturePolicyDirective, FeaturePolicyOrigin>,
}

impl FeaturePolicy {
    pub fn new(
        policies: impl IntoIterator<Item = (FeaturePolicyDirective, Vec<FeaturePolicyOrigin>)>,
    ) -> Self {
        Self {
            policies: DirectiveMap::from_entries(policies),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends `origins` to `directive`. A feature needs at least one origin,
    /// so an empty `origins` leaves the policy untouched.
    pub fn add<I>(&mut self, directive: impl Into<FeaturePolicyDirective>, origins: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<FeaturePolicyOrigin>,
    {
        let origins: Vec<FeaturePolicyOrigin> = origins.into_iter().map(Into::into).collect();
        if origins.is_empty() {
            return self;
        }

        self.policies.add(directive.into(), origins);
        self
    }

    pub fn remove<'a>(
        &mut self,
        directives: impl IntoIterator<Item = &'a FeaturePolicyDirective>,
    ) -> &mut Self {
        self.policies.remove(directives);
        self
    }

    pub fn contains(&self, directive: &FeaturePolicyDirective) -> bool {
        self.policies.contains(directive)
    }

    pub fn origins(&self, directive: &FeaturePolicyDirective) -> Option<&[FeaturePolicyOrigin]> {
        self.policies.sources(directive)
    }

    pub fn directives(&self) -> impl Iterator<Item = &FeaturePolicyDirective> {
        self.policies.directives()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn header_value(&self) -> &str {
        self.policies.render()
    }
}

impl SecurityHeader for FeaturePolicy {
    const NAME: HeaderName = FEATURE_POLICY;

    fn is_empty(&self) -> bool {
        FeaturePolicy::is_empty(self)
    }

    fn header_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(FeaturePolicy::header_value(self))
    }
}
