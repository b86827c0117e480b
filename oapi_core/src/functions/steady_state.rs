//! Steady-state functions (`Func.FuncSS`). Not offered by ETABS.

use serde::{Deserialize, Serialize};

use super::{points_from_reply, FunctionPoints};
use crate::codes::FrequencyUnits;
use crate::errors::{ApiError, ApiResult};
use crate::host::Seed;
use crate::values::{ensure_same_length, wire_count};

/// Steady-state function read from a text file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyFile {
    pub file_name: String,
    pub header_lines: i32,
    pub units: FrequencyUnits,
}

#[derive(Debug, Clone)]
pub struct SteadyState {
    seed: Seed,
}

impl SteadyState {
    pub fn new(seed: Seed) -> Self {
        SteadyState { seed }
    }

    pub fn set_user(&self, name: &str, frequencies: &[f64], values: &[f64], units: FrequencyUnits) -> ApiResult<()> {
        let count = ensure_same_length("frequencies", frequencies, "values", values)?;
        self.seed
            .call("Func.FuncSS.SetUser")
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
            .call("Func.FuncSS.GetUser")
            .arg(name)
            .out_int()
            .out_doubles()
            .out_doubles()
            .out_int()
            .invoke()?;
        Ok((points_from_reply(&reply, 1)?, reply.code(4)?))
    }

    /// Same value at every frequency
    pub fn set_constant(&self, name: &str, value: f64, units: FrequencyUnits) -> ApiResult<()> {
        self.seed
            .call("Func.FuncSS.SetConstant")
            .arg(name)
            .arg(value)
            .code(units)
            .invoke()?;
        Ok(())
    }

    pub fn get_constant(&self, name: &str) -> ApiResult<(f64, FrequencyUnits)> {
        let reply = self
            .seed
            .call("Func.FuncSS.GetConstant")
            .arg(name)
            .out_double()
            .out_int()
            .invoke()?;
        Ok((reply.double(1)?, reply.code(2)?))
    }

    pub fn set_from_file(&self, name: &str, file: &FrequencyFile) -> ApiResult<()> {
        if file.header_lines < 0 {
            return Err(ApiError::invalid_input(
                "header_lines",
                file.header_lines.to_string(),
                "must not be negative",
            ));
        }
        self.seed
            .call("Func.FuncSS.SetFromFile")
            .arg(name)
            .arg(file.file_name.as_str())
            .arg(file.header_lines)
            .code(file.units)
            .invoke()?;
        Ok(())
    }

    pub fn get_from_file(&self, name: &str) -> ApiResult<FrequencyFile> {
        let reply = self
            .seed
            .call("Func.FuncSS.GetFromFile")
            .arg(name)
            .out_text()
            .out_int()
            .out_int()
            .invoke()?;
        Ok(FrequencyFile {
            file_name: reply.text(1)?,
            header_lines: reply.int(2)?,
            units: reply.code(3)?,
        })
    }
}
