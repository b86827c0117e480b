//! # Model
//!
//! Root facade over one host session. A [`Model`] owns the [`Seed`] and
//! hands out the feature-group wrappers, all sharing that seed.
//!
//! ## Example
//!
//! ```rust
//! use oapi_core::codes::Units;
//! use oapi_core::config::ClientConfig;
//! use oapi_core::host::RecordingHost;
//! use oapi_core::model::Model;
//!
//! let config = ClientConfig::from_toml_str(r#"present_units = "KnMC""#).unwrap();
//! let model = Model::from_config(RecordingHost::new(), &config).unwrap();
//! assert_eq!(model.present_units().unwrap(), Units::KnMC);
//!
//! model.load_patterns().add("DEAD", oapi_core::codes::LoadPatternType::Dead, 1.0, true).unwrap();
//! ```

use tracing::info;

use crate::codes::Units;
use crate::config::ClientConfig;
use crate::errors::ApiResult;
use crate::functions::{Functions, PowerSpectralDensity, ResponseSpectrum, SteadyState, TimeHistory};
use crate::host::{Host, Seed};
use crate::load_patterns::LoadPatterns;
use crate::materials::MaterialProperties;
use crate::sections::{AreaSection, FrameSection, SolidSection};

#[derive(Debug, Clone)]
pub struct Model {
    seed: Seed,
}

impl Model {
    pub fn new(seed: Seed) -> Self {
        Model { seed }
    }

    /// Wrap `host` for the configured target and apply the configured units
    pub fn from_config<H: Host + 'static>(host: H, config: &ClientConfig) -> ApiResult<Self> {
        let model = Model::new(config.seed(host));
        if let Some(units) = config.present_units {
            model.set_present_units(units)?;
        }
        info!(host = %config.target, units = ?config.present_units, "model session ready");
        Ok(model)
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Host version text and numeric version
    pub fn version(&self) -> ApiResult<(String, f64)> {
        let reply = self
            .seed
            .call("SapModel.GetVersion")
            .out_text()
            .out_double()
            .invoke()?;
        Ok((reply.text(0)?, reply.double(1)?))
    }

    /// Units used for input and output
    pub fn present_units(&self) -> ApiResult<Units> {
        self.seed
            .call("SapModel.GetPresentUnits")
            .out_int()
            .invoke()?
            .code(0)
    }

    pub fn set_present_units(&self, units: Units) -> ApiResult<()> {
        self.seed.call("SapModel.SetPresentUnits").code(units).invoke()?;
        Ok(())
    }

    /// Units the model is stored in
    pub fn database_units(&self) -> ApiResult<Units> {
        self.seed
            .call("SapModel.GetDatabaseUnits")
            .out_int()
            .invoke()?
            .code(0)
    }

    /// Whether the model is locked against edits (it is after an analysis run)
    pub fn is_locked(&self) -> ApiResult<bool> {
        self.seed
            .call("SapModel.GetModelIsLocked")
            .out_bool()
            .invoke()?
            .boolean(0)
    }

    pub fn set_locked(&self, locked: bool) -> ApiResult<()> {
        self.seed.call("SapModel.SetModelIsLocked").arg(locked).invoke()?;
        Ok(())
    }

    pub fn functions(&self) -> Functions {
        Functions::new(self.seed.clone())
    }

    pub fn response_spectrum(&self) -> ResponseSpectrum {
        ResponseSpectrum::new(self.seed.clone())
    }

    pub fn time_history(&self) -> TimeHistory {
        TimeHistory::new(self.seed.clone())
    }

    pub fn steady_state(&self) -> SteadyState {
        SteadyState::new(self.seed.clone())
    }

    pub fn power_spectral_density(&self) -> PowerSpectralDensity {
        PowerSpectralDensity::new(self.seed.clone())
    }

    pub fn area_sections(&self) -> AreaSection {
        AreaSection::new(self.seed.clone())
    }

    pub fn frame_sections(&self) -> FrameSection {
        FrameSection::new(self.seed.clone())
    }

    pub fn solid_sections(&self) -> SolidSection {
        SolidSection::new(self.seed.clone())
    }

    pub fn materials(&self) -> MaterialProperties {
        MaterialProperties::new(self.seed.clone())
    }

    pub fn load_patterns(&self) -> LoadPatterns {
        LoadPatterns::new(self.seed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::HostTarget;
    use crate::collection::NamedCollection;
    use crate::host::{RecordingHost, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn model() -> (Rc<RefCell<RecordingHost>>, Model) {
        let shared = Rc::new(RefCell::new(RecordingHost::new()));
        let seed = Seed::from_shared(shared.clone(), HostTarget::default());
        (shared, Model::new(seed))
    }

    #[test]
    fn test_version() {
        let host = RecordingHost::new().on("SapModel.GetVersion", |args| {
            args[0] = Value::from("20.2.0");
            args[1] = Value::Double(20.2);
            0
        });
        let model = Model::new(Seed::new(host, HostTarget::default()));
        assert_eq!(model.version().unwrap(), ("20.2.0".to_string(), 20.2));
    }

    #[test]
    fn test_present_units_round_trip() {
        let (host, model) = model();
        model.set_present_units(Units::KipFtF).unwrap();
        assert_eq!(model.present_units().unwrap(), Units::KipFtF);
        let call = host.borrow().last_call("SapModel.SetPresentUnits").unwrap();
        assert_eq!(call.args, vec![Value::Int(4)]);
    }

    #[test]
    fn test_database_units_unknown_code() {
        let host = RecordingHost::new().on("SapModel.GetDatabaseUnits", |args| {
            args[0] = Value::Int(17);
            0
        });
        let model = Model::new(Seed::new(host, HostTarget::default()));
        assert_eq!(model.database_units().unwrap_err().error_code(), "UNKNOWN_CODE");
    }

    #[test]
    fn test_lock_round_trip() {
        let (_, model) = model();
        model.set_locked(true).unwrap();
        assert!(model.is_locked().unwrap());
        model.set_locked(false).unwrap();
        assert!(!model.is_locked().unwrap());
    }

    #[test]
    fn test_from_config_applies_units() {
        let config = ClientConfig::from_toml_str("present_units = \"NMmC\"").unwrap();
        let model = Model::from_config(RecordingHost::new(), &config).unwrap();
        assert_eq!(model.present_units().unwrap(), Units::NMmC);

        let plain = Model::from_config(RecordingHost::new(), &ClientConfig::default()).unwrap();
        assert!(plain.present_units().is_err());
    }

    #[test]
    fn test_wrappers_share_one_session() {
        let (host, model) = model();
        model.load_patterns().add("DEAD", crate::codes::LoadPatternType::Dead, 1.0, true).unwrap();
        model.response_spectrum().set_user("RS", &[0.0, 1.0], &[0.5, 0.2], 0.05).unwrap();

        assert_eq!(model.load_patterns().count().unwrap(), 1);
        assert_eq!(model.functions().name_list(None).unwrap(), vec!["RS"]);
        assert_eq!(host.borrow().calls().len(), 4);
    }
}
