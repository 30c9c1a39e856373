use core::convert::Infallible;
use core::ops::Deref;
use core::str::FromStr;

use derive_more::Display;
use serde::Serialize;

/// Text that is safe to put into a latex document.
#[derive(Debug, Clone, Display, PartialEq, Eq, Serialize)]
#[display("{}", _0)]
pub struct LatexString(String);

impl LatexString {
    /// Escapes all characters that have a special meaning in latex.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(v_latexescape::escape(value).to_string())
    }
}

impl FromStr for LatexString {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(value))
    }
}

impl Deref for LatexString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
