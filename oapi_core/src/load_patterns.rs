//! Load patterns (`LoadPatterns`).

use crate::codes::LoadPatternType;
use crate::collection::NamedCollection;
use crate::errors::{ApiError, ApiResult};
use crate::host::Seed;

#[derive(Debug, Clone)]
pub struct LoadPatterns {
    seed: Seed,
}

impl NamedCollection for LoadPatterns {
    const GROUP: &'static str = "LoadPatterns";

    fn seed(&self) -> &Seed {
        &self.seed
    }
}

fn finite_multiplier(value: f64) -> ApiResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ApiError::invalid_input("self_weight_multiplier", value.to_string(), "must be a finite number"))
    }
}

impl LoadPatterns {
    pub fn new(seed: Seed) -> Self {
        LoadPatterns { seed }
    }

    /// Add a pattern, optionally with a linear static load case of the same name
    pub fn add(
        &self,
        name: &str,
        load_type: LoadPatternType,
        self_weight_multiplier: f64,
        add_analysis_case: bool,
    ) -> ApiResult<()> {
        if name.trim().is_empty() {
            return Err(ApiError::invalid_input("name", name, "must not be empty"));
        }
        finite_multiplier(self_weight_multiplier)?;
        self.seed
            .call("LoadPatterns.Add")
            .arg(name)
            .code(load_type)
            .arg(self_weight_multiplier)
            .arg(add_analysis_case)
            .invoke()?;
        Ok(())
    }

    pub fn load_type(&self, name: &str) -> ApiResult<LoadPatternType> {
        self.seed
            .call("LoadPatterns.GetLoadType")
            .arg(name)
            .out_int()
            .invoke()?
            .code(1)
    }

    pub fn set_load_type(&self, name: &str, load_type: LoadPatternType) -> ApiResult<()> {
        self.seed
            .call("LoadPatterns.SetLoadType")
            .arg(name)
            .code(load_type)
            .invoke()?;
        Ok(())
    }

    pub fn self_weight_multiplier(&self, name: &str) -> ApiResult<f64> {
        self.seed
            .call("LoadPatterns.GetSelfWTMultiplier")
            .arg(name)
            .out_double()
            .invoke()?
            .double(1)
    }

    pub fn set_self_weight_multiplier(&self, name: &str, multiplier: f64) -> ApiResult<()> {
        finite_multiplier(multiplier)?;
        self.seed
            .call("LoadPatterns.SetSelfWTMultiplier")
            .arg(name)
            .arg(multiplier)
            .invoke()?;
        Ok(())
    }
}
