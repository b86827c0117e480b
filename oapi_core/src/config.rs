//! # Client Configuration
//!
//! Which host product/version the bindings target, the unit set to apply
//! when a model is opened, and extra capability rules. Configuration is read
//! from TOML or JSON.
//!
//! ```toml
//! present_units = "KipFtF"
//!
//! [target]
//! product = "sap2000"
//! version = "20.2.0"
//!
//! [[capabilities]]
//! key = "Func.FuncRS.SetChinese2010"
//! products = ["sap2000", "csibridge"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capabilities::{CapabilityRule, CapabilityTable, HostTarget};
use crate::codes::Units;
use crate::errors::{ApiError, ApiResult};
use crate::host::{Host, Seed};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Host product and release
    #[serde(default)]
    pub target: HostTarget,

    /// Units set on the model by `Model::from_config`
    #[serde(default)]
    pub present_units: Option<Units>,

    /// Rules appended to the builtin capability table
    #[serde(default)]
    pub capabilities: Vec<CapabilityRule>,
}

impl ClientConfig {
    pub fn from_toml_str(text: &str) -> ApiResult<Self> {
        toml::from_str(text).map_err(|e| ApiError::config("TOML", e.to_string()))
    }

    pub fn from_json_str(text: &str) -> ApiResult<Self> {
        serde_json::from_str(text).map_err(|e| ApiError::config("JSON", e.to_string()))
    }

    /// Read a `.toml` or `.json` file
    pub fn load(path: &Path) -> ApiResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ApiError::config(path.display().to_string(), e.to_string()))?;

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let parsed: Result<ClientConfig, String> = match extension.as_str() {
            "toml" => toml::from_str(&text).map_err(|e| e.to_string()),
            "json" => serde_json::from_str(&text).map_err(|e| e.to_string()),
            other => Err(format!("unsupported configuration format '{}'", other)),
        };

        let config = parsed.map_err(|reason| ApiError::config(path.display().to_string(), reason))?;
        debug!(path = %path.display(), host = %config.target, "loaded client configuration");
        Ok(config)
    }

    /// Builtin capability rules plus the configured ones
    pub fn capability_table(&self) -> CapabilityTable {
        CapabilityTable::with_rules(self.capabilities.iter().cloned())
    }

    /// Wrap `host` in a seed for the configured target
    pub fn seed<H: Host + 'static>(&self, host: H) -> Seed {
        Seed::new(host, self.target.clone()).with_capabilities(self.capability_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::HostProduct;
    use crate::host::RecordingHost;
    use semver::Version;
    use std::io::Write;

    const SAMPLE: &str = r#"
present_units = "KnMC"

[target]
product = "etabs"
version = "18.1.0"

[[capabilities]]
key = "Func.FuncSS"
products = ["sap2000", "csibridge", "etabs"]
"#;

    #[test]
    fn test_from_toml() {
        let config = ClientConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.target.product, HostProduct::Etabs);
        assert_eq!(config.target.version, Version::new(18, 1, 0));
        assert_eq!(config.present_units, Some(Units::KnMC));
        assert_eq!(config.capabilities.len(), 1);
    }

    #[test]
    fn test_configured_rules_override_builtin() {
        let config = ClientConfig::from_toml_str(SAMPLE).unwrap();
        let table = config.capability_table();
        assert!(table.is_available("Func.FuncSS.SetUser", &config.target));
        assert!(!CapabilityTable::builtin().is_available("Func.FuncSS.SetUser", &config.target));

        let seed = config.seed(RecordingHost::new());
        assert!(seed.call("Func.FuncSS.SetConstant").arg("S").arg(1.0).invoke().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_json_str("{}").unwrap();
        assert_eq!(config.target, HostTarget::default());
        assert_eq!(config.present_units, None);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = ClientConfig::from_toml_str("colour = 3").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG");
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"target":{"product":"csibridge","version":"21.0.0"}}"#)
            .unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.target.product, HostProduct::CsiBridge);

        let yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert_eq!(ClientConfig::load(yaml.path()).unwrap_err().error_code(), "CONFIG");

        let missing = ClientConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert_eq!(missing.error_code(), "CONFIG");
    }
}
