use super::{
    header::{CONTENT_SECURITY_POLICY, SecurityHeader},
    policy::DirectiveMap,
    vocabulary::{CspDirective, CspSource},
};
use hyper::header::HeaderName;
use std::borrow::Cow;

/// The `Content-Security-Policy` header.
///
/// ```
/// use helmet_rs::helmet::{ContentSecurityPolicy, CspDirective, CspSource};
///
/// let mut csp = ContentSecurityPolicy::new([(CspDirective::DEFAULT_SRC, vec![CspSource::SELF])]);
/// csp.add(CspDirective::IMG_SRC, [CspSource::SELF, CspSource::DATA]);
/// csp.create(CspDirective::UPGRADE_INSECURE_REQUESTS);
///
/// assert_eq!(
///     csp.header_value(),
///     "default-src 'self'; img-src 'self' data:; upgrade-insecure-requests"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentSecurityPolicy {
    policies: DirectiveMap<CspDirective, CspSource>,
}

impl ContentSecurityPolicy {
    pub fn new(policies: impl IntoIterator<Item = (CspDirective, Vec<CspSource>)>) -> Self {
        Self {
            policies: DirectiveMap::from_entries(policies),
        }
    }

    /// A blank policy. It is never written to a response.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ensures `directive` exists, with no sources if it is new.
    pub fn create(&mut self, directive: impl Into<CspDirective>) -> &mut Self {
        self.policies.create(directive.into());
        self
    }

    /// Appends `sources` to `directive`, creating it if needed.
    ///
    /// Zero sources is allowed and leaves a bare directive such as
    /// `upgrade-insecure-requests`.
    pub fn add<I>(&mut self, directive: impl Into<CspDirective>, sources: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<CspSource>,
    {
        self.policies
            .add(directive.into(), sources.into_iter().map(Into::into));
        self
    }

    pub fn remove<'a>(&mut self, directives: impl IntoIterator<Item = &'a CspDirective>) -> &mut Self {
        self.policies.remove(directives);
        self
    }

    pub fn contains(&self, directive: &CspDirective) -> bool {
        self.policies.contains(directive)
    }

    pub fn sources(&self, directive: &CspDirective) -> Option<&[CspSource]> {
        self.policies.sources(directive)
    }

    pub fn directives(&self) -> impl Iterator<Item = &CspDirective> {
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

impl SecurityHeader for ContentSecurityPolicy {
    const NAME: HeaderName = CONTENT_SECURITY_POLICY;

    fn is_empty(&self) -> bool {
        ContentSecurityPolicy::is_empty(self)
    }

    fn header_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(ContentSecurityPolicy::header_value(self))
    }
}
