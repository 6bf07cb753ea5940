use crate::handler::{
    Handler, Request, Response,
    middleware::{Middleware, MiddlewareResult, next},
};
use async_trait::async_trait;
use std::sync::Arc;

pub mod config;
mod csp;
pub mod error;
mod expect_ct;
mod feature_policy;
pub mod header;
mod hsts;
mod options;
mod policy;
mod powered_by;
mod referrer_policy;
pub mod sink;
pub mod vocabulary;
mod xss_protection;

pub use config::HelmetConfig;
pub use csp::ContentSecurityPolicy;
pub use error::{HelmetError, HelmetResult};
pub use expect_ct::ExpectCt;
pub use feature_policy::FeaturePolicy;
pub use header::SecurityHeader;
pub use hsts::StrictTransportSecurity;
pub use options::{
    XContentTypeOptions, XDnsPrefetchControl, XDownloadOptions, XFrameOptions,
    XPermittedCrossDomainPolicies,
};
pub use powered_by::XPoweredBy;
pub use referrer_policy::ReferrerPolicy;
pub use sink::HeaderSink;
pub use vocabulary::{
    CspDirective, CspSource, FeaturePolicyDirective, FeaturePolicyOrigin, HashAlgorithm,
    ReferrerPolicyDirective,
};
pub use xss_protection::XXssProtection;

/// Middleware that sets HTTP security headers on every response, in the
/// spirit of [Helmet.js](https://helmetjs.github.io/).
///
/// Every field is public, so a `Helmet` can be tuned freely after it is built.
/// Empty or unset fields are left out of the response.
///
/// Headers are written in a fixed order:
/// - `Content-Security-Policy`
/// - `X-Content-Type-Options`
/// - `X-DNS-Prefetch-Control`
/// - `X-Download-Options`
/// - `Expect-CT`
/// - `Feature-Policy`
/// - `X-Frame-Options`
/// - `X-Permitted-Cross-Domain-Policies`
/// - `X-Powered-By` (removed or replaced)
/// - `Referrer-Policy`
/// - `Strict-Transport-Security`
/// - `X-XSS-Protection`
///
/// # Example
/// ```rust
/// use helmet_rs::helmet::{CspDirective, CspSource, Helmet, XFrameOptions};
///
/// let mut helmet = Helmet::default();
/// helmet
///     .content_security_policy
///     .add(CspDirective::DEFAULT_SRC, [CspSource::SELF]);
/// helmet.x_frame_options = Some(XFrameOptions::Deny);
/// ```
#[derive(Debug, Clone)]
pub struct Helmet {
    pub content_security_policy: ContentSecurityPolicy,
    pub x_content_type_options: Option<XContentTypeOptions>,
    pub x_dns_prefetch_control: Option<XDnsPrefetchControl>,
    pub x_download_options: Option<XDownloadOptions>,
    pub expect_ct: ExpectCt,
    pub feature_policy: FeaturePolicy,
    pub x_frame_options: Option<XFrameOptions>,
    pub x_permitted_cross_domain_policies: Option<XPermittedCrossDomainPolicies>,
    pub x_powered_by: XPoweredBy,
    pub referrer_policy: ReferrerPolicy,
    pub strict_transport_security: StrictTransportSecurity,
    pub x_xss_protection: Option<XXssProtection>,
}

impl Default for Helmet {
    /// Secure defaults:
    ///
    /// - `X-Content-Type-Options: nosniff`
    /// - `X-DNS-Prefetch-Control: off`
    /// - `X-Download-Options: noopen`
    /// - `X-Frame-Options: SAMEORIGIN`
    /// - `X-Powered-By` removed
    /// - `Strict-Transport-Security: max-age=5184000; includeSubDomains`
    /// - `X-XSS-Protection: 1; mode=block`
    fn default() -> Self {
        Self {
            content_security_policy: ContentSecurityPolicy::empty(),
            x_content_type_options: Some(XContentTypeOptions::NoSniff),
            x_dns_prefetch_control: Some(XDnsPrefetchControl::Off),
            x_download_options: Some(XDownloadOptions::NoOpen),
            expect_ct: ExpectCt::empty(),
            feature_policy: FeaturePolicy::empty(),
            x_frame_options: Some(XFrameOptions::SameOrigin),
            x_permitted_cross_domain_policies: None,
            x_powered_by: XPoweredBy::hidden(),
            referrer_policy: ReferrerPolicy::empty(),
            strict_transport_security: StrictTransportSecurity::new(5184000, true, false),
            x_xss_protection: Some(XXssProtection::new(true, true, "")),
        }
    }
}

impl Helmet {
    /// A blank slate: no header is written until a field is set.
    pub fn empty() -> Self {
        Self {
            content_security_policy: ContentSecurityPolicy::empty(),
            x_content_type_options: None,
            x_dns_prefetch_control: None,
            x_download_options: None,
            expect_ct: ExpectCt::empty(),
            feature_policy: FeaturePolicy::empty(),
            x_frame_options: None,
            x_permitted_cross_domain_policies: None,
            x_powered_by: XPoweredBy::empty(),
            referrer_policy: ReferrerPolicy::empty(),
            strict_transport_security: StrictTransportSecurity::empty(),
            x_xss_protection: None,
        }
    }

    pub fn from_config(config: HelmetConfig) -> Self {
        config.into()
    }

    /// Fills the memoized policy strings so that serving only ever reads them.
    pub fn prime(&self) -> &Self {
        self.content_security_policy.header_value();
        self.feature_policy.header_value();
        self.referrer_policy.header_value();
        self
    }

    /// Applies every configured header to `sink`.
    pub fn write_headers(&self, sink: &mut dyn HeaderSink) {
        self.content_security_policy.write(sink);
        self.x_content_type_options.write(sink);
        self.x_dns_prefetch_control.write(sink);
        self.x_download_options.write(sink);
        self.expect_ct.write(sink);
        self.feature_policy.write(sink);
        self.x_frame_options.write(sink);
        self.x_permitted_cross_domain_policies.write(sink);
        self.x_powered_by.write(sink);
        self.referrer_policy.write(sink);
        self.strict_transport_security.write(sink);
        self.x_xss_protection.write(sink);
    }

    /// Wraps `handler` so that the headers are set before it runs.
    pub fn secure<H: Handler>(self, handler: H) -> Secured<H> {
        self.prime();
        Secured {
            helmet: Arc::new(self),
            handler,
        }
    }
}

#[async_trait]
impl Middleware for Helmet {
    /// Sets the security headers and always continues the chain.
    async fn call(&self, _req: &mut Request, res: &mut Response) -> MiddlewareResult {
        self.write_headers(res);
        next()
    }
}

/// A handler guarded by a [`Helmet`], built with [`Helmet::secure`].
pub struct Secured<H> {
    helmet: Arc<Helmet>,
    handler: H,
}

impl<H> Secured<H> {
    pub fn helmet(&self) -> &Helmet {
        &self.helmet
    }
}

#[async_trait]
impl<H: Handler> Handler for Secured<H> {
    async fn handle(&self, req: &mut Request, res: &mut Response) {
        self.helmet.write_headers(res);
        self.handler.handle(req, res).await;
    }
}
