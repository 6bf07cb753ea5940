//! Directive and source tokens for each header family.
//!
//! Every token is a string newtype with a curated set of associated constants.
//! The containers accept any string, so directives newer than this list can
//! still be sent.

use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

macro_rules! token {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$cmeta:meta])*
                $const:ident => $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$cmeta])*
                pub const $const: Self = Self(Cow::Borrowed($value));
            )*

            pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
                Self(token.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&'static str> for $name {
            fn from(token: &'static str) -> Self {
                Self(Cow::Borrowed(token))
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self(Cow::Owned(token))
            }
        }
    };
}

token! {
    /// A Content-Security-Policy directive such as `default-src`.
    CspDirective {
        BASE_URI => "base-uri",
        BLOCK_ALL_MIXED_CONTENT => "block-all-mixed-content",
        CHILD_SRC => "child-src",
        CONNECT_SRC => "connect-src",
        DEFAULT_SRC => "default-src",
        FONT_SRC => "font-src",
        FORM_ACTION => "form-action",
        FRAME_ANCESTORS => "frame-ancestors",
        FRAME_SRC => "frame-src",
        IMG_SRC => "img-src",
        MANIFEST_SRC => "manifest-src",
        MEDIA_SRC => "media-src",
        NAVIGATE_TO => "navigate-to",
        OBJECT_SRC => "object-src",
        PLUGIN_TYPES => "plugin-types",
        PREFETCH_SRC => "prefetch-src",
        REPORT_TO => "report-to",
        REQUIRE_TRUSTED_TYPES_FOR => "require-trusted-types-for",
        SANDBOX => "sandbox",
        SCRIPT_SRC => "script-src",
        SCRIPT_SRC_ATTR => "script-src-attr",
        SCRIPT_SRC_ELEM => "script-src-elem",
        STYLE_SRC => "style-src",
        STYLE_SRC_ATTR => "style-src-attr",
        STYLE_SRC_ELEM => "style-src-elem",
        TRUSTED_TYPES => "trusted-types",
        UPGRADE_INSECURE_REQUESTS => "upgrade-insecure-requests",
        WORKER_SRC => "worker-src",

        /// Deprecated, use the `Referrer-Policy` header instead.
        REFERRER => "referrer",
        /// Deprecated, use `report-to` instead.
        REPORT_URI => "report-uri",
        /// Deprecated.
        REQUIRE_SRI_FOR => "require-sri-for",
    }
}

token! {
    /// A Content-Security-Policy source expression such as `'self'`.
    CspSource {
        WILDCARD => "*",
        NONE => "'none'",
        SELF => "'self'",
        HTTP => "http:",
        HTTPS => "https:",
        DATA => "data:",
        MEDIASTREAM => "mediastream:",
        BLOB => "blob:",
        FILESYSTEM => "filesystem:",
        UNSAFE_EVAL => "'unsafe-eval'",
        UNSAFE_HASHES => "'unsafe-hashes'",
        UNSAFE_INLINE => "'unsafe-inline'",
        UNSAFE_ALLOW_REDIRECTS => "'unsafe-allow-redirects'",
        STRICT_DYNAMIC => "'strict-dynamic'",
        REPORT_SAMPLE => "'report-sample'",

        // `sandbox` flags
        SANDBOX_ALLOW_DOWNLOADS => "allow-downloads",
        SANDBOX_ALLOW_DOWNLOADS_WITHOUT_USER_ACTIVATION => "allow-downloads-without-user-activation",
        SANDBOX_ALLOW_FORMS => "allow-forms",
        SANDBOX_ALLOW_MODALS => "allow-modals",
        SANDBOX_ALLOW_ORIENTATION_LOCK => "allow-orientation-lock",
        SANDBOX_ALLOW_POINTER_LOCK => "allow-pointer-lock",
        SANDBOX_ALLOW_POPUPS => "allow-popups",
        SANDBOX_ALLOW_POPUPS_TO_ESCAPE_SANDBOX => "allow-popups-to-escape-sandbox",
        SANDBOX_ALLOW_PRESENTATION => "allow-presentation",
        SANDBOX_ALLOW_SAME_ORIGIN => "allow-same-origin",
        SANDBOX_ALLOW_SCRIPTS => "allow-scripts",
        SANDBOX_ALLOW_STORAGE_ACCESS_BY_USER_ACTIVATION => "allow-storage-access-by-user-activation",
        SANDBOX_ALLOW_TOP_NAVIGATION => "allow-top-navigation",
        SANDBOX_ALLOW_TOP_NAVIGATION_BY_USER_ACTIVATION => "allow-top-navigation-by-user-activation",

        // `trusted-types` keyword
        TRUSTED_TYPES_ALLOW_DUPLICATES => "allow-duplicates",

        // values of the deprecated `referrer` directive
        REFERRER_NONE => "\"none\"",
        REFERRER_NO_REFERRER => "\"no-referrer\"",
        REFERRER_NONE_WHEN_DOWNGRADE => "\"none-when-downgrade\"",
        REFERRER_ORIGIN => "\"origin\"",
        REFERRER_ORIGIN_WHEN_CROSS_ORIGIN => "\"origin-when-cross-origin\"",
        REFERRER_UNSAFE_URL => "\"unsafe-url\"",
    }
}

/// Digest algorithms accepted in CSP hash sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

impl CspSource {
    /// `'nonce-<value>'`
    pub fn nonce(value: &str) -> Self {
        Self::from(format!("'nonce-{value}'"))
    }

    /// `'<algorithm>-<base64 digest>'`
    pub fn hash(algorithm: HashAlgorithm, digest: &str) -> Self {
        Self::from(format!("'{}-{digest}'", algorithm.as_str()))
    }
}

token! {
    /// A Feature-Policy directive such as `geolocation`.
    FeaturePolicyDirective {
        ACCELEROMETER => "accelerometer",
        AMBIENT_LIGHT_SENSOR => "ambient-light-sensor",
        AUTOPLAY => "autoplay",
        BATTERY => "battery",
        CAMERA => "camera",
        DISPLAY_CAPTURE => "display-capture",
        DOCUMENT_DOMAIN => "document-domain",
        ENCRYPTED_MEDIA => "encrypted-media",
        EXECUTION_WHILE_NOT_RENDERED => "execution-while-not-rendered",
        EXECUTION_WHILE_OUT_OF_VIEWPORT => "execution-while-out-of-viewport",
        FULLSCREEN => "fullscreen",
        GEOLOCATION => "geolocation",
        GYROSCOPE => "gyroscope",
        LAYOUT_ANIMATIONS => "layout-animations",
        LEGACY_IMAGE_FORMATS => "legacy-image-formats",
        MAGNETOMETER => "magnetometer",
        MICROPHONE => "microphone",
        MIDI => "midi",
        NAVIGATION_OVERRIDE => "navigation-override",
        OVERSIZED_IMAGES => "oversized-images",
        PAYMENT => "payment",
        PICTURE_IN_PICTURE => "picture-in-picture",
        PUBLICKEY_CREDENTIALS => "publickey-credentials",
        SYNC_XHR => "sync-xhr",
        USB => "usb",
        WAKE_LOCK => "wake-lock",
        XR_SPATIAL_TRACKING => "xr-spatial-tracking",

        /// Deprecated.
        VIBRATE => "vibrate",
        /// Deprecated.
        VR => "vr",
    }
}

token! {
    /// A Feature-Policy allowlist entry such as `'self'` or an origin URL.
    FeaturePolicyOrigin {
        WILDCARD => "*",
        SELF => "'self'",
        SRC => "'src'",
        NONE => "'none'",
    }
}

token! {
    /// A Referrer-Policy directive such as `no-referrer`.
    ReferrerPolicyDirective {
        NO_REFERRER => "no-referrer",
        NO_REFERRER_WHEN_DOWNGRADE => "no-referrer-when-downgrade",
        ORIGIN => "origin",
        ORIGIN_WHEN_CROSS_ORIGIN => "origin-when-cross-origin",
        SAME_ORIGIN => "same-origin",
        STRICT_ORIGIN => "strict-origin",
        STRICT_ORIGIN_WHEN_CROSS_ORIGIN => "strict-origin-when-cross-origin",
        UNSAFE_URL => "unsafe-url",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_and_owned_tokens_compare_equal() {
        let owned = CspDirective::from(String::from("default-src"));
        assert_eq!(owned, CspDirective::DEFAULT_SRC);
        assert_eq!(CspDirective::DEFAULT_SRC.to_string(), "default-src");
    }

    #[test]
    fn nonce_and_hash_sources() {
        assert_eq!(CspSource::nonce("abc123").as_str(), "'nonce-abc123'");
        assert_eq!(
            CspSource::hash(HashAlgorithm::Sha384, "Zm9v").as_str(),
            "'sha384-Zm9v'"
        );
    }

    #[test]
    fn trusted_types_and_sandbox_tokens() {
        let mut csp = crate::helmet::ContentSecurityPolicy::empty();
        csp.add(CspDirective::REQUIRE_TRUSTED_TYPES_FOR, ["'script'"])
            .add(CspDirective::SANDBOX, [CspSource::SANDBOX_ALLOW_DOWNLOADS])
            .add(CspDirective::NAVIGATE_TO, [CspSource::UNSAFE_ALLOW_REDIRECTS]);
        assert_eq!(
            csp.header_value(),
            "require-trusted-types-for 'script'; sandbox allow-downloads; navigate-to 'unsafe-allow-redirects'"
        );
    }

    #[test]
    fn tokens_deserialize_from_plain_strings() {
        let origin: FeaturePolicyOrigin = serde_json::from_str("\"'self'\"").unwrap();
        assert_eq!(origin, FeaturePolicyOrigin::SELF);
    }
}
