//! # Functions
//!
//! Wrappers for the host's `Func` group: response-spectrum, time-history,
//! steady-state and power-spectral-density functions.
//!
//! [`Functions`] covers the calls common to every function type. The
//! per-type wrappers define functions of one kind.
//!
//! ## Example
//!
//! ```rust
//! use oapi_core::capabilities::HostTarget;
//! use oapi_core::functions::Functions;
//! use oapi_core::host::{RecordingHost, Seed};
//!
//! let functions = Functions::new(Seed::new(RecordingHost::new(), HostTarget::default()));
//! let rs = functions.response_spectrum();
//! rs.set_user("RS-1", &[0.0, 0.5, 1.0], &[0.2, 0.5, 0.3], 0.05).unwrap();
//!
//! let err = rs.set_user("RS-2", &[0.0, 0.5], &[0.2], 0.05).unwrap_err();
//! assert_eq!(err.error_code(), "LENGTH_MISMATCH");
//! ```

pub mod psd;
pub mod response_spectrum;
pub mod steady_state;
pub mod time_history;

pub use psd::PowerSpectralDensity;
pub use response_spectrum::{
    Aashto2007Spectrum, Asce7Spectrum, Chinese2010Spectrum, Eurocode8Spectrum, Nzs1170Spectrum,
    ResponseSpectrum, SpectrumFile, EUROCODE8_MIN_DAMPING_CORRECTION,
};
pub use steady_state::{FrequencyFile, SteadyState};
pub use time_history::{PeriodicWave, TimeHistory, TimeHistoryFile, MIN_STEPS_PER_CYCLE};

use serde::{Deserialize, Serialize};

use crate::codes::FunctionType;
use crate::errors::{ApiError, ApiResult};
use crate::host::{Reply, Seed};
use crate::values::ensure_same_length;

/// Abscissa/ordinate pairs of a user-defined function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionPoints {
    /// Periods, times or frequencies
    pub abscissae: Vec<f64>,
    pub ordinates: Vec<f64>,
}

impl FunctionPoints {
    pub fn new(abscissae: Vec<f64>, ordinates: Vec<f64>) -> ApiResult<Self> {
        ensure_same_length("abscissae", &abscissae, "ordinates", &ordinates)?;
        Ok(FunctionPoints { abscissae, ordinates })
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        FunctionPoints {
            abscissae: pairs.iter().map(|p| p.0).collect(),
            ordinates: pairs.iter().map(|p| p.1).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.abscissae.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abscissae.is_empty()
    }

    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.abscissae
            .iter()
            .copied()
            .zip(self.ordinates.iter().copied())
            .collect()
    }
}

/// Read a count slot followed by two parallel double arrays
pub(crate) fn points_from_reply(reply: &Reply, count_index: usize) -> ApiResult<FunctionPoints> {
    let abscissae = reply.counted_doubles(count_index, count_index + 1)?;
    let ordinates = reply.counted_doubles(count_index, count_index + 2)?;
    Ok(FunctionPoints { abscissae, ordinates })
}

/// Damping ratios are fractions of critical in `[0, 1)`
pub(crate) fn check_damping_ratio(ratio: f64) -> ApiResult<()> {
    if !(0.0..1.0).contains(&ratio) {
        return Err(ApiError::invalid_input(
            "damping_ratio",
            ratio.to_string(),
            "must be a fraction of critical damping in [0, 1)",
        ));
    }
    Ok(())
}

/// Calls shared by every function type (`Func.*`)
#[derive(Debug, Clone)]
pub struct Functions {
    seed: Seed,
}

impl Functions {
    pub fn new(seed: Seed) -> Self {
        Functions { seed }
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

    /// Number of functions, optionally of one type only
    pub fn count(&self, function_type: Option<FunctionType>) -> ApiResult<usize> {
        self.seed
            .call("Func.Count")
            .out_int()
            .code_or_all(function_type)
            .invoke()?
            .count(0)
    }

    /// Function names, optionally of one type only
    pub fn name_list(&self, function_type: Option<FunctionType>) -> ApiResult<Vec<String>> {
        self.seed
            .call("Func.GetNameList")
            .out_int()
            .out_texts()
            .code_or_all(function_type)
            .invoke()?
            .counted_texts(0, 1)
    }

    /// Function type and the host's subtype code for that type
    pub fn function_type(&self, name: &str) -> ApiResult<(FunctionType, i32)> {
        let reply = self
            .seed
            .call("Func.GetTypeOAPI")
            .arg(name)
            .out_int()
            .out_int()
            .invoke()?;
        Ok((reply.code(1)?, reply.int(2)?))
    }

    /// Tabulated values of any function, as the host evaluates it
    pub fn values(&self, name: &str) -> ApiResult<FunctionPoints> {
        let reply = self
            .seed
            .call("Func.GetValues")
            .arg(name)
            .out_int()
            .out_doubles()
            .out_doubles()
            .invoke()?;
        points_from_reply(&reply, 1)
    }

    pub fn change_name(&self, name: &str, new_name: &str) -> ApiResult<()> {
        self.seed.call("Func.ChangeName").arg(name).arg(new_name).invoke()?;
        Ok(())
    }

    pub fn delete(&self, name: &str) -> ApiResult<()> {
        self.seed.call("Func.Delete").arg(name).invoke()?;
        Ok(())
    }

    /// Replace a code-defined function by its tabulated user equivalent
    pub fn convert_to_user(&self, name: &str) -> ApiResult<()> {
        self.seed.call("Func.ConvertToUser").arg(name).invoke()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::HostTarget;
    use crate::host::{RecordingHost, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn functions(host: RecordingHost) -> (Rc<RefCell<RecordingHost>>, Functions) {
        let shared = Rc::new(RefCell::new(host));
        let seed = Seed::from_shared(shared.clone(), HostTarget::default());
        (shared, Functions::new(seed))
    }

    #[test]
    fn test_function_points() {
        let points = FunctionPoints::from_pairs(&[(0.0, 1.0), (1.0, 0.5)]);
        assert_eq!(points.len(), 2);
        assert_eq!(points.pairs(), vec![(0.0, 1.0), (1.0, 0.5)]);
        assert!(FunctionPoints::new(vec![0.0], vec![]).is_err());
        assert!(FunctionPoints::default().is_empty());
    }

    #[test]
    fn test_damping_ratio_range() {
        assert!(check_damping_ratio(0.0).is_ok());
        assert!(check_damping_ratio(0.05).is_ok());
        assert!(check_damping_ratio(1.0).is_err());
        assert!(check_damping_ratio(-0.01).is_err());
        assert!(check_damping_ratio(f64::NAN).is_err());
    }

    #[test]
    fn test_count_forwards_type_filter() {
        let (host, functions) = functions(RecordingHost::new());
        functions.count(None).unwrap();
        functions.count(Some(FunctionType::SteadyState)).unwrap();

        let calls = host.borrow();
        let calls = calls.calls_to("Func.Count");
        assert_eq!(calls[0].args[1], Value::Int(0));
        assert_eq!(calls[1].args[1], Value::Int(4));
    }

    #[test]
    fn test_name_list_spans_function_kinds() {
        let (_, functions) = functions(RecordingHost::new());
        functions.response_spectrum().set_user("RS", &[0.0, 1.0], &[0.1, 0.2], 0.05).unwrap();
        functions.time_history().set_ramp("TH", 1.0, 1.0, 4.0).unwrap();

        assert_eq!(functions.count(None).unwrap(), 2);
        assert_eq!(functions.name_list(None).unwrap(), vec!["RS", "TH"]);

        functions.change_name("RS", "RS-1").unwrap();
        functions.delete("TH").unwrap();
        assert_eq!(functions.name_list(None).unwrap(), vec!["RS-1"]);
    }

    #[test]
    fn test_function_type_and_values() {
        let mut host = RecordingHost::new();
        host.store("Func.GetTypeOAPI", "TH", vec![Value::Int(2), Value::Int(3)]);
        host.store(
            "Func.GetValues",
            "TH",
            vec![Value::Int(2), Value::DoubleArray(vec![0.0, 0.1]), Value::DoubleArray(vec![0.0, 1.0])],
        );
        let (_, functions) = functions(host);

        assert_eq!(functions.function_type("TH").unwrap(), (FunctionType::TimeHistory, 3));
        assert_eq!(functions.values("TH").unwrap().pairs(), vec![(0.0, 0.0), (0.1, 1.0)]);
        assert_eq!(functions.function_type("nope").unwrap_err().status(), Some(1));
    }

    #[test]
    fn test_convert_to_user_failure_carries_status() {
        let (_, functions) = functions(RecordingHost::new().fail("Func.ConvertToUser", 2));
        let err = functions.convert_to_user("RS").unwrap_err();
        assert_eq!(err, ApiError::host_call_failed("Func.ConvertToUser", 2, None));
    }
}
