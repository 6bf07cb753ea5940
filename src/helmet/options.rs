//! Headers whose value is a single token from a small closed set.
//!
//! An unset header is `None` on the [`Helmet`](super::Helmet) field.

use super::{
    error::HelmetError,
    header::{
        SecurityHeader, X_CONTENT_TYPE_OPTIONS, X_DNS_PREFETCH_CONTROL, X_DOWNLOAD_OPTIONS,
        X_FRAME_OPTIONS, X_PERMITTED_CROSS_DOMAIN_POLICIES,
    },
};
use hyper::header::HeaderName;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{borrow::Cow, fmt, str::FromStr};

macro_rules! option_header {
    (
        $(#[$meta:meta])*
        $name:ident => $header:ident, $label:literal {
            $( $variant:ident => $value:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )*
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = HelmetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( v if v.eq_ignore_ascii_case($value) => Ok($name::$variant), )*
                    _ => Err(HelmetError::UnknownToken {
                        header: $label,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(de::Error::custom)
            }
        }

        impl SecurityHeader for $name {
            const NAME: HeaderName = $header;

            fn is_empty(&self) -> bool {
                false
            }

            fn header_value(&self) -> Cow<'_, str> {
                Cow::Borrowed(self.as_str())
            }
        }
    };
}

option_header! {
    /// `X-Frame-Options`: clickjacking protection.
    XFrameOptions => X_FRAME_OPTIONS, "X-Frame-Options" {
        Deny => "DENY",
        SameOrigin => "SAMEORIGIN",
    }
}

option_header! {
    /// `X-Content-Type-Options`: disables MIME sniffing.
    XContentTypeOptions => X_CONTENT_TYPE_OPTIONS, "X-Content-Type-Options" {
        NoSniff => "nosniff",
    }
}

option_header! {
    /// `X-DNS-Prefetch-Control`
    XDnsPrefetchControl => X_DNS_PREFETCH_CONTROL, "X-DNS-Prefetch-Control" {
        On => "on",
        Off => "off",
    }
}

option_header! {
    /// `X-Download-Options`: stops old IE from opening downloads in the site's context.
    XDownloadOptions => X_DOWNLOAD_OPTIONS, "X-Download-Options" {
        NoOpen => "noopen",
    }
}

option_header! {
    /// `X-Permitted-Cross-Domain-Policies`: Adobe cross-domain policy files.
    XPermittedCrossDomainPolicies => X_PERMITTED_CROSS_DOMAIN_POLICIES, "X-Permitted-Cross-Domain-Policies" {
        None => "none",
        MasterOnly => "master-only",
        ByContentType => "by-content-type",
        ByFtpFilename => "by-ftp-filename",
        All => "all",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::HeaderMap;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("sameorigin".parse::<XFrameOptions>().unwrap(), XFrameOptions::SameOrigin);
        assert_eq!(" OFF ".parse::<XDnsPrefetchControl>().unwrap(), XDnsPrefetchControl::Off);
        assert_eq!(
            "by-ftp-filename".parse::<XPermittedCrossDomainPolicies>().unwrap(),
            XPermittedCrossDomainPolicies::ByFtpFilename
        );
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        let err = "ALLOW-FROM".parse::<XFrameOptions>().unwrap_err();
        assert!(matches!(
            err,
            HelmetError::UnknownToken { header: "X-Frame-Options", .. }
        ));
    }

    #[test]
    fn unset_option_is_not_written() {
        let mut headers = HeaderMap::new();
        let unset: Option<XFrameOptions> = None;
        unset.write(&mut headers);
        assert!(headers.is_empty());

        Some(XFrameOptions::Deny).write(&mut headers);
        Some(XDownloadOptions::NoOpen).write(&mut headers);
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["x-download-options"], "noopen");
    }

    #[test]
    fn serde_uses_header_tokens() {
        let value: XPermittedCrossDomainPolicies = serde_json::from_str("\"master-only\"").unwrap();
        assert_eq!(value, XPermittedCrossDomainPolicies::MasterOnly);
        assert_eq!(
            serde_json::to_string(&XContentTypeOptions::NoSniff).unwrap(),
            "\"nosniff\""
        );
    }
}
