use super::{
    ContentSecurityPolicy, ExpectCt, FeaturePolicy, Helmet, ReferrerPolicy,
    StrictTransportSecurity, XContentTypeOptions, XDnsPrefetchControl, XDownloadOptions,
    XFrameOptions, XPermittedCrossDomainPolicies, XPoweredBy, XXssProtection,
    error::HelmetResult,
    vocabulary::{
        CspDirective, CspSource, FeaturePolicyDirective, FeaturePolicyOrigin,
        ReferrerPolicyDirective,
    },
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable description of a [`Helmet`].
///
/// Every key is optional. A missing key leaves that header absent, the same
/// as [`Helmet::empty`].
///
/// ```json
/// {
///   "content_security_policy": { "default-src": ["'self'"] },
///   "x_frame_options": "DENY",
///   "referrer_policy": ["no-referrer", "strict-origin-when-cross-origin"],
///   "strict_transport_security": { "max_age": 63072000, "include_sub_domains": true }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelmetConfig {
    pub content_security_policy: IndexMap<CspDirective, Vec<CspSource>>,
    pub x_content_type_options: Option<XContentTypeOptions>,
    pub x_dns_prefetch_control: Option<XDnsPrefetchControl>,
    pub x_download_options: Option<XDownloadOptions>,
    pub expect_ct: Option<ExpectCt>,
    pub feature_policy: IndexMap<FeaturePolicyDirective, Vec<FeaturePolicyOrigin>>,
    pub x_frame_options: Option<XFrameOptions>,
    pub x_permitted_cross_domain_policies: Option<XPermittedCrossDomainPolicies>,
    pub x_powered_by: Option<XPoweredBy>,
    pub referrer_policy: Vec<ReferrerPolicyDirective>,
    pub strict_transport_security: Option<StrictTransportSecurity>,
    pub x_xss_protection: Option<XXssProtection>,
}

impl HelmetConfig {
    pub fn from_json(raw: &str) -> HelmetResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> HelmetResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

impl From<HelmetConfig> for Helmet {
    fn from(config: HelmetConfig) -> Self {
        Helmet {
            content_security_policy: ContentSecurityPolicy::new(config.content_security_policy),
            x_content_type_options: config.x_content_type_options,
            x_dns_prefetch_control: config.x_dns_prefetch_control,
            x_download_options: config.x_download_options,
            expect_ct: config.expect_ct.unwrap_or_default(),
            feature_policy: FeaturePolicy::new(config.feature_policy),
            x_frame_options: config.x_frame_options,
            x_permitted_cross_domain_policies: config.x_permitted_cross_domain_policies,
            x_powered_by: config.x_powered_by.unwrap_or_default(),
            referrer_policy: ReferrerPolicy::new(config.referrer_policy),
            strict_transport_security: config.strict_transport_security.unwrap_or_default(),
            x_xss_protection: config.x_xss_protection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helmet::error::HelmetError;

    #[test]
    fn missing_keys_mean_absent_headers() {
        let config = HelmetConfig::from_json("{}").unwrap();
        assert_eq!(config, HelmetConfig::default());

        let helmet = Helmet::from(config);
        assert!(helmet.content_security_policy.is_empty());
        assert!(helmet.x_xss_protection.is_none());
        assert!(helmet.strict_transport_security.is_empty());
    }

    #[test]
    fn full_config() {
        let config = HelmetConfig::from_json(
            r#"{
                "content_security_policy": {
                    "default-src": ["'self'"],
                    "upgrade-insecure-requests": []
                },
                "x_content_type_options": "nosniff",
                "x_frame_options": "DENY",
                "x_permitted_cross_domain_policies": "none",
                "expect_ct": { "max_age": 30, "enforce": true, "report_uri": "/report-uri" },
                "feature_policy": { "geolocation": ["'self'", "'src'"] },
                "x_powered_by": { "replacement": "PHP 4.2.0" },
                "referrer_policy": ["no-referrer", "strict-origin-when-cross-origin"],
                "strict_transport_security": { "max_age": 63072000, "include_sub_domains": true, "preload": true },
                "x_xss_protection": { "xss_filtering": true, "mode_block": true }
            }"#,
        )
        .unwrap();

        let helmet = Helmet::from(config);
        assert_eq!(
            helmet.content_security_policy.header_value(),
            "default-src 'self'; upgrade-insecure-requests"
        );
        assert_eq!(helmet.x_frame_options, Some(XFrameOptions::Deny));
        assert_eq!(
            helmet.x_permitted_cross_domain_policies,
            Some(XPermittedCrossDomainPolicies::None)
        );
        assert_eq!(
            helmet.expect_ct.header_value(),
            "max-age=30, enforce, report-uri=\"/report-uri\""
        );
        assert_eq!(helmet.feature_policy.header_value(), "geolocation 'self' 'src'");
        assert_eq!(helmet.x_powered_by, XPoweredBy::replaced("PHP 4.2.0"));
        assert_eq!(
            helmet.referrer_policy.header_value(),
            "no-referrer, strict-origin-when-cross-origin"
        );
        assert_eq!(
            helmet.strict_transport_security.header_value(),
            "max-age=63072000; includeSubDomains; preload"
        );
        assert_eq!(
            helmet.x_xss_protection.map(|xss| xss.header_value()).as_deref(),
            Some("1; mode=block")
        );
    }

    #[test]
    fn unknown_keys_and_tokens_are_rejected() {
        assert!(matches!(
            HelmetConfig::from_json(r#"{ "x_frame_option": "DENY" }"#),
            Err(HelmetError::Config(_))
        ));
        assert!(matches!(
            HelmetConfig::from_json(r#"{ "x_frame_options": "ALLOW-FROM" }"#),
            Err(HelmetError::Config(_))
        ));
        assert!(matches!(
            HelmetConfig::from_json(
                r#"{ "strict_transport_security": { "max_age": 63072000, "includeSubDomains": true } }"#
            ),
            Err(HelmetError::Config(_))
        ));
        assert!(matches!(
            HelmetConfig::from_json(r#"{ "expect_ct": { "maxAge": 30 } }"#),
            Err(HelmetError::Config(_))
        ));
        assert!(matches!(
            HelmetConfig::from_json(r#"{ "x_xss_protection": { "mode": "block" } }"#),
            Err(HelmetError::Config(_))
        ));
        assert!(matches!(
            HelmetConfig::from_json(r#"{ "x_powered_by": { "hidden": true } }"#),
            Err(HelmetError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            HelmetConfig::from_file("does/not/exist.json"),
            Err(HelmetError::Io(_))
        ));
    }
}
