//! Five-digit postal code validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Exactly five ASCII digits. `\d` would also admit non-ASCII digits.
pub const ZIP_CODE_PATTERN: &str = r"^[0-9]{5}$";

pub static ZIP_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ZIP_CODE_PATTERN).expect("valid regex"));

/// A postal code that has passed [`ZipCode::parse`].
///
/// The event store partitions events by this value, so every lookup goes
/// through this type rather than a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Validate `raw` against [`ZIP_CODE_PATTERN`].
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if ZIP_CODE_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(CoreError::Validation(format!(
                "zip must be exactly five digits, got '{raw}'"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
