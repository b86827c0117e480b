//! Power-spectral-density functions (`Func.FuncPSD`). Not offered by ETABS.

use super::{points_from_reply, FunctionPoints};
use crate::codes::FrequencyUnits;
use crate::errors::ApiResult;
use crate::host::Seed;
use crate::values::{ensure_same_length, wire_count};

#[derive(Debug, Clone)]
pub struct PowerSpectralDensity {
    seed: Seed,
}

impl PowerSpectralDensity {
    pub fn new(seed: Seed) -> Self {
        PowerSpectralDensity { seed }
    }

    pub fn set_user(&self, name: &str, frequencies: &[f64], values: &[f64], units: FrequencyUnits) -> ApiResult<()> {
        let count = ensure_same_length("frequencies", frequencies, "values", values)?;
        self.seed
            .call("Func.FuncPSD.SetUser")
            .arg(name)
            .arg(wire_count(count)?)
            .arg(frequencies)
            .arg(values)
            .code(units)
            .invoke()?;
        Ok(())
    }

    pub fn get_user(&self, name: &str) -> ApiResult<(FunctionPoints, FrequencyUnits)> {
        let reply = self
            .seed
            .call("Func.FuncPSD.GetUser")
            .arg(name)
            .out_int()
            .out_doubles()
            .out_doubles()
            .out_int()
            .invoke()?;
        Ok((points_from_reply(&reply, 1)?, reply.code(4)?))
    }

    pub fn set_constant(&self, name: &str, value: f64, units: FrequencyUnits) -> ApiResult<()> {
        self.seed
            .call("Func.FuncPSD.SetConstant")
            .arg(name)
            .arg(value)
            .code(units)
            .invoke()?;
        Ok(())
    }

    pub fn get_constant(&self, name: &str) -> ApiResult<(f64, FrequencyUnits)> {
        let reply = self
            .seed
            .call("Func.FuncPSD.GetConstant")
            .arg(name)
            .out_double()
            .out_int()
            .invoke()?;
        Ok((reply.double(1)?, reply.code(2)?))
    }
}
