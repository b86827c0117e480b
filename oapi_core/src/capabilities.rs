//! # Capability Table
//!
//! Not every host product or release offers every operation or enum member.
//! Availability is described as data: a table of rules keyed either by an
//! operation prefix (`Func.FuncSS`) or by an enum member
//! (`MaterialType.Masonry`), each naming the products and version range that
//! offer it. A key with no matching rule is available everywhere.
//!
//! ## Example
//!
//! ```rust
//! use oapi_core::capabilities::{CapabilityTable, HostProduct, HostTarget};
//!
//! let etabs = HostTarget::new(HostProduct::Etabs, semver::Version::new(18, 0, 0));
//! let table = CapabilityTable::builtin();
//! assert!(table.check("Func.FuncSS.SetUser", &etabs).is_err());
//! assert!(table.check("Func.FuncRS.SetUser", &etabs).is_ok());
//! ```

use once_cell::sync::Lazy;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::errors::{ApiError, ApiResult};

/// Host application family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostProduct {
    Sap2000,
    #[serde(rename = "csibridge")]
    CsiBridge,
    Etabs,
}

impl HostProduct {
    /// All products
    pub const ALL: [HostProduct; 3] = [HostProduct::Sap2000, HostProduct::CsiBridge, HostProduct::Etabs];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HostProduct::Sap2000 => "SAP2000",
            HostProduct::CsiBridge => "CSiBridge",
            HostProduct::Etabs => "ETABS",
        }
    }
}

impl std::fmt::Display for HostProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The host product and release the bindings talk to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostTarget {
    pub product: HostProduct,
    pub version: Version,
}

impl HostTarget {
    pub fn new(product: HostProduct, version: Version) -> Self {
        HostTarget { product, version }
    }
}

impl Default for HostTarget {
    fn default() -> Self {
        HostTarget::new(HostProduct::Sap2000, Version::new(20, 0, 0))
    }
}

impl std::fmt::Display for HostTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.product, self.version)
    }
}

/// Availability of one operation prefix or enum member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilityRule {
    /// Operation prefix (`Func.FuncRS.SetASCE716`) or enum member key (`MaterialType.Masonry`)
    pub key: String,
    /// Products offering it; empty means every product
    #[serde(default)]
    pub products: Vec<HostProduct>,
    /// First release offering it
    #[serde(default)]
    pub since: Option<Version>,
    /// First release no longer offering it
    #[serde(default)]
    pub until: Option<Version>,
}

impl CapabilityRule {
    pub fn new(key: impl Into<String>) -> Self {
        CapabilityRule {
            key: key.into(),
            products: Vec::new(),
            since: None,
            until: None,
        }
    }

    /// Restrict to the given products
    pub fn products(mut self, products: &[HostProduct]) -> Self {
        self.products = products.to_vec();
        self
    }

    /// Available from this release on
    pub fn since(mut self, version: Version) -> Self {
        self.since = Some(version);
        self
    }

    /// Available up to (excluding) this release
    pub fn until(mut self, version: Version) -> Self {
        self.until = Some(version);
        self
    }

    /// Whether the rule's key covers `key` (exact match or dotted prefix)
    pub fn matches(&self, key: &str) -> bool {
        key == self.key
            || (key.starts_with(&self.key) && key[self.key.len()..].starts_with('.'))
    }

    /// Whether the target satisfies the rule
    pub fn allows(&self, target: &HostTarget) -> bool {
        if !self.products.is_empty() && !self.products.contains(&target.product) {
            return false;
        }
        if let Some(since) = &self.since {
            if target.version < *since {
                return false;
            }
        }
        if let Some(until) = &self.until {
            if target.version >= *until {
                return false;
            }
        }
        true
    }
}

static BUILTIN: Lazy<CapabilityTable> = Lazy::new(|| {
    use HostProduct::*;
    CapabilityTable {
        rules: vec![
            CapabilityRule::new("Func.FuncSS").products(&[Sap2000, CsiBridge]),
            CapabilityRule::new("Func.FuncPSD").products(&[Sap2000, CsiBridge]),
            CapabilityRule::new("Func.FuncRS.SetASCE716")
                .products(&[Sap2000, CsiBridge])
                .since(Version::new(20, 0, 0)),
            CapabilityRule::new("Func.FuncRS.GetASCE716")
                .products(&[Sap2000, CsiBridge])
                .since(Version::new(20, 0, 0)),
            CapabilityRule::new("PropSolid").products(&[Sap2000, CsiBridge]),
            CapabilityRule::new("PropArea.SetASolid").products(&[Sap2000, CsiBridge]),
            CapabilityRule::new("PropArea.GetASolid").products(&[Sap2000, CsiBridge]),
            CapabilityRule::new("MaterialType.Masonry").since(Version::new(17, 0, 0)),
            CapabilityRule::new("FramePropType.Bridge").products(&[CsiBridge]),
            CapabilityRule::new("ShellType.ShellLayered").since(Version::new(15, 0, 0)),
        ],
    }
});

/// Ordered set of availability rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilityTable {
    rules: Vec<CapabilityRule>,
}

impl CapabilityTable {
    /// Table with no rules; everything is available
    pub fn permissive() -> Self {
        CapabilityTable::default()
    }

    /// Rules shipped with the bindings
    pub fn builtin() -> &'static CapabilityTable {
        &BUILTIN
    }

    /// Builtin rules followed by `extra` rules; on equal key length later rules win
    pub fn with_rules(extra: impl IntoIterator<Item = CapabilityRule>) -> Self {
        let mut table = BUILTIN.clone();
        table.rules.extend(extra);
        table
    }

    pub fn rules(&self) -> &[CapabilityRule] {
        &self.rules
    }

    /// Most specific rule covering `key`
    pub fn rule_for(&self, key: &str) -> Option<&CapabilityRule> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(key))
            .fold(None, |best: Option<&CapabilityRule>, rule| match best {
                Some(b) if b.key.len() > rule.key.len() => Some(b),
                _ => Some(rule),
            })
    }

    /// Whether `key` is available on `target`
    pub fn is_available(&self, key: &str, target: &HostTarget) -> bool {
        self.rule_for(key).map_or(true, |rule| rule.allows(target))
    }

    /// Fail with [`ApiError::Unsupported`] when `key` is not available on `target`
    pub fn check(&self, key: &str, target: &HostTarget) -> ApiResult<()> {
        if self.is_available(key, target) {
            Ok(())
        } else {
            Err(ApiError::unsupported(key, target))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(product: HostProduct, major: u64) -> HostTarget {
        HostTarget::new(product, Version::new(major, 0, 0))
    }

    #[test]
    fn test_prefix_matching() {
        let rule = CapabilityRule::new("Func.FuncSS");
        assert!(rule.matches("Func.FuncSS"));
        assert!(rule.matches("Func.FuncSS.SetUser"));
        assert!(!rule.matches("Func.FuncSSX.SetUser"));
        assert!(!rule.matches("Func.FuncRS.SetUser"));
    }

    #[test]
    fn test_product_restriction() {
        let table = CapabilityTable::builtin();
        assert!(table.check("PropSolid.SetProp", &target(HostProduct::Sap2000, 20)).is_ok());
        let err = table.check("PropSolid.SetProp", &target(HostProduct::Etabs, 18)).unwrap_err();
        assert_eq!(err, ApiError::unsupported("PropSolid.SetProp", "ETABS v18.0.0"));
    }

    #[test]
    fn test_version_range() {
        let table = CapabilityTable::builtin();
        assert!(!table.is_available("Func.FuncRS.SetASCE716", &target(HostProduct::Sap2000, 19)));
        assert!(table.is_available("Func.FuncRS.SetASCE716", &target(HostProduct::Sap2000, 20)));
        assert!(table.is_available("MaterialType.Masonry", &target(HostProduct::Etabs, 17)));
        assert!(!table.is_available("MaterialType.Masonry", &target(HostProduct::Etabs, 16)));

        let retired = CapabilityRule::new("PropArea.SetShell")
            .until(Version::new(17, 0, 0));
        assert!(retired.allows(&target(HostProduct::Sap2000, 16)));
        assert!(!retired.allows(&target(HostProduct::Sap2000, 17)));
    }

    #[test]
    fn test_unmatched_keys_are_available() {
        let etabs = target(HostProduct::Etabs, 18);
        assert!(CapabilityTable::builtin().is_available("LoadPatterns.Add", &etabs));
        assert!(CapabilityTable::permissive().is_available("PropSolid.SetProp", &etabs));
    }

    #[test]
    fn test_most_specific_rule_wins() {
        let table = CapabilityTable::with_rules([
            CapabilityRule::new("Func.FuncSS.SetConstant").products(&[HostProduct::Etabs]),
        ]);
        let etabs = target(HostProduct::Etabs, 18);
        assert!(table.is_available("Func.FuncSS.SetConstant", &etabs));
        assert!(!table.is_available("Func.FuncSS.SetUser", &etabs));
    }

    #[test]
    fn test_target_serialization() {
        let t = target(HostProduct::CsiBridge, 21);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"product":"csibridge","version":"21.0.0"}"#);
        let parsed: HostTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t);
        assert_eq!(t.to_string(), "CSiBridge v21.0.0");
    }
}
