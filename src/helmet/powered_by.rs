use super::{
    header::{SecurityHeader, X_POWERED_BY},
    sink::{HeaderSink, emit},
};
use hyper::header::HeaderName;
use log::debug;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Masks the `X-Powered-By` header.
///
/// `hide` removes the header from the response. Otherwise a non-empty
/// `replacement` overrides it. With neither set the header is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct XPoweredBy {
    pub hide: bool,
    pub replacement: Option<String>,
}

impl XPoweredBy {
    pub fn new(hide: bool, replacement: impl Into<String>) -> Self {
        let replacement = replacement.into();
        Self {
            hide,
            replacement: (!replacement.is_empty()).then_some(replacement),
        }
    }

    pub fn hidden() -> Self {
        Self::new(true, "")
    }

    pub fn replaced(replacement: impl Into<String>) -> Self {
        Self::new(false, replacement)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref().filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !self.hide && self.replacement().is_none()
    }
}

impl SecurityHeader for XPoweredBy {
    const NAME: HeaderName = X_POWERED_BY;

    fn is_empty(&self) -> bool {
        XPoweredBy::is_empty(self)
    }

    fn header_value(&self) -> Cow<'_, str> {
        match self.replacement() {
            Some(value) if !self.hide => Cow::Borrowed(value),
            _ => Cow::Borrowed(""),
        }
    }

    fn write(&self, sink: &mut dyn HeaderSink) {
        if self.is_empty() {
            return;
        }

        if self.hide {
            debug!("Removing {} header", Self::NAME);
            sink.remove_header(&Self::NAME);
            return;
        }

        if let Some(value) = self.replacement() {
            emit(sink, Self::NAME, value);
        }
    }
}
