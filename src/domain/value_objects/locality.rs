//! # Locality Codes
//!
//! Carrier locality codes (DANE municipality codes) identifying the origin
//! and destination cities of a shipment.
//!
//! The carrier expects every code suffixed with a fixed padding, so the
//! municipality `05001` travels on the wire as `05001000`.
//!
//! # Examples
//!
//! ```
//! use shipping_quote::domain::value_objects::locality::LocalityCode;
//!
//! let medellin = LocalityCode::new("05001").unwrap();
//! assert_eq!(medellin.as_str(), "05001");
//! assert_eq!(medellin.carrier_code(), "05001000");
//! assert!(LocalityCode::new("   ").is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix appended to a locality code in carrier requests.
pub const CARRIER_CODE_PADDING: &str = "000";

/// Locality used as shipment origin when nothing better is known (Bogotá).
pub const DEFAULT_ORIGIN_CODE: &str = "11001";

/// A non-empty carrier locality code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocalityCode(String);

impl LocalityCode {
    /// Creates a locality code. The code is kept exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLocalityCode`] if the code is blank.
    pub fn new(code: impl AsRef<str>) -> DomainResult<Self> {
        let code = code.as_ref();
        if code.trim().is_empty() {
            return Err(DomainError::InvalidLocalityCode(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    /// Returns the code as given.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the padded form the carrier API expects.
    #[must_use]
    pub fn carrier_code(&self) -> String {
        format!("{}{}", self.0, CARRIER_CODE_PADDING)
    }
}

impl Default for LocalityCode {
    fn default() -> Self {
        Self(DEFAULT_ORIGIN_CODE.to_string())
    }
}

impl TryFrom<String> for LocalityCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocalityCode> for String {
    fn from(code: LocalityCode) -> Self {
        code.0
    }
}

impl fmt::Display for LocalityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
