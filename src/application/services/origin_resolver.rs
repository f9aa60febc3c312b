//! # Origin Resolver
//!
//! Decides which locality a shop's parcels ship from.
//!
//! Two strategies:
//! - [`FixedOriginResolver`]: one configured code for every shop
//! - [`MunicipalityOriginResolver`]: lookup by the shop's
//!   `(department, municipality)` with a fixed fallback

use crate::domain::entities::CartLine;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::LocalityCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Port for resolving the origin locality of a cart line.
pub trait OriginResolver: Send + Sync + fmt::Debug {
    /// Returns the locality the line's shop ships from.
    fn resolve(&self, line: &CartLine) -> LocalityCode;

    /// Returns the resolver name used in logs.
    fn name(&self) -> &'static str;
}

/// Resolves every line to the same locality.
#[derive(Debug, Clone, Default)]
pub struct FixedOriginResolver {
    code: LocalityCode,
}

impl FixedOriginResolver {
    /// Creates a resolver that always answers `code`.
    #[must_use]
    pub fn new(code: LocalityCode) -> Self {
        Self { code }
    }

    /// Returns the fixed code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &LocalityCode {
        &self.code
    }
}

impl OriginResolver for FixedOriginResolver {
    fn resolve(&self, _line: &CartLine) -> LocalityCode {
        self.code.clone()
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// One row of the municipality table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalityCode {
    /// Department name, e.g. "Antioquia".
    pub department: String,
    /// Municipality name, e.g. "Medellín".
    pub municipality: String,
    /// Carrier locality code, e.g. "05001".
    pub code: String,
}

/// Resolves lines by their shop's department and municipality.
#[derive(Debug, Clone)]
pub struct MunicipalityOriginResolver {
    codes: HashMap<(String, String), LocalityCode>,
    fallback: LocalityCode,
}

impl MunicipalityOriginResolver {
    /// Builds the lookup table.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocalityCode` if any entry carries a
    /// malformed code.
    pub fn new(
        entries: impl IntoIterator<Item = MunicipalityCode>,
        fallback: LocalityCode,
    ) -> DomainResult<Self> {
        let codes = entries
            .into_iter()
            .map(|entry| {
                let code = LocalityCode::new(&entry.code)?;
                Ok((key(&entry.department, &entry.municipality), code))
            })
            .collect::<DomainResult<HashMap<_, _>>>()?;
        Ok(Self { codes, fallback })
    }
}

impl OriginResolver for MunicipalityOriginResolver {
    fn resolve(&self, line: &CartLine) -> LocalityCode {
        match (line.department.as_deref(), line.municipality.as_deref()) {
            (Some(department), Some(municipality)) => self
                .codes
                .get(&key(department, municipality))
                .cloned()
                .unwrap_or_else(|| self.fallback.clone()),
            _ => self.fallback.clone(),
        }
    }

    fn name(&self) -> &'static str {
        "municipality"
    }
}

fn key(department: &str, municipality: &str) -> (String, String) {
    (
        department.trim().to_lowercase(),
        municipality.trim().to_lowercase(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ProductId, ShopId};

    fn line_in(department: &str, municipality: &str) -> CartLine {
        CartLine::new(ProductId::new("p"), ShopId::new("s"), 1)
            .with_location(department, municipality)
    }

    fn medellin() -> MunicipalityCode {
        MunicipalityCode {
            department: "Antioquia".to_string(),
            municipality: "Medellín".to_string(),
            code: "05001".to_string(),
        }
    }

    #[test]
    fn fixed_resolver_ignores_line() {
        let resolver = FixedOriginResolver::default();
        assert_eq!(resolver.resolve(&line_in("Antioquia", "Medellín")).as_str(), "11001");
        assert_eq!(resolver.name(), "fixed");
    }

    #[test]
    fn municipality_lookup_is_case_insensitive() {
        let resolver =
            MunicipalityOriginResolver::new([medellin()], LocalityCode::default()).unwrap();
        assert_eq!(
            resolver.resolve(&line_in("  ANTIOQUIA ", "medellín")).as_str(),
            "05001"
        );
    }

    #[test]
    fn unknown_municipality_falls_back() {
        let resolver =
            MunicipalityOriginResolver::new([medellin()], LocalityCode::default()).unwrap();
        assert_eq!(resolver.resolve(&line_in("Boyacá", "Ráquira")).as_str(), "11001");
        let no_location = CartLine::new(ProductId::new("p"), ShopId::new("s"), 1);
        assert_eq!(resolver.resolve(&no_location).as_str(), "11001");
    }

    #[test]
    fn malformed_code_is_rejected() {
        let mut entry = medellin();
        entry.code = "  ".to_string();
        assert!(MunicipalityOriginResolver::new([entry], LocalityCode::default()).is_err());
    }
}
