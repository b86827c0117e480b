//! # Time-History Functions
//!
//! Tabulated, periodic, file-based and analytic load histories
//! (`Func.FuncTH`). Sine and cosine histories are sampled with at least
//! [`MIN_STEPS_PER_CYCLE`] steps per cycle; a smaller request is raised to
//! that minimum before it is forwarded.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{points_from_reply, FunctionPoints};
use crate::codes::TimeHistoryFileFormat;
use crate::errors::{ApiError, ApiResult};
use crate::host::Seed;
use crate::values::{ensure_same_length, wire_count};

/// Fewest steps per cycle a sine or cosine history is sampled with
pub const MIN_STEPS_PER_CYCLE: i32 = 8;

/// History read from a text file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeHistoryFile {
    pub file_name: String,
    /// Lines skipped at the top of the file
    pub header_lines: i32,
    /// Characters skipped at the start of every line
    pub prefix_characters: i32,
    pub points_per_line: i32,
    pub format: TimeHistoryFileFormat,
    /// Whether values are whitespace separated rather than fixed width
    pub free_format: bool,
}

/// Sine or cosine history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodicWave {
    pub period: f64,
    pub steps_per_cycle: i32,
    pub cycles: i32,
    pub amplitude: f64,
}

/// Time-history functions (`Func.FuncTH`)
#[derive(Debug, Clone)]
pub struct TimeHistory {
    seed: Seed,
}

fn positive(field: &str, value: f64) -> ApiResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ApiError::invalid_input(field, value.to_string(), "must be a positive number"))
    }
}

fn at_least_one(field: &str, value: i32) -> ApiResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ApiError::invalid_input(field, value.to_string(), "must be at least 1"))
    }
}

impl TimeHistory {
    pub fn new(seed: Seed) -> Self {
        TimeHistory { seed }
    }

    pub fn set_user(&self, name: &str, times: &[f64], values: &[f64]) -> ApiResult<()> {
        let count = ensure_same_length("times", times, "values", values)?;
        self.seed
            .call("Func.FuncTH.SetUser")
            .arg(name)
            .arg(wire_count(count)?)
            .arg(times)
            .arg(values)
            .invoke()?;
        Ok(())
    }

    pub fn get_user(&self, name: &str) -> ApiResult<FunctionPoints> {
        let reply = self
            .seed
            .call("Func.FuncTH.GetUser")
            .arg(name)
            .out_int()
            .out_doubles()
            .out_doubles()
            .invoke()?;
        points_from_reply(&reply, 1)
    }

    /// One cycle of time/value pairs repeated `cycles` times
    pub fn set_user_periodic(&self, name: &str, cycles: i32, times: &[f64], values: &[f64]) -> ApiResult<()> {
        let count = ensure_same_length("times", times, "values", values)?;
        at_least_one("cycles", cycles)?;
        self.seed
            .call("Func.FuncTH.SetUserPeriodic")
            .arg(name)
            .arg(cycles)
            .arg(wire_count(count)?)
            .arg(times)
            .arg(values)
            .invoke()?;
        Ok(())
    }

    pub fn get_user_periodic(&self, name: &str) -> ApiResult<(i32, FunctionPoints)> {
        let reply = self
            .seed
            .call("Func.FuncTH.GetUserPeriodic")
            .arg(name)
            .out_int()
            .out_int()
            .out_doubles()
            .out_doubles()
            .invoke()?;
        Ok((reply.int(1)?, points_from_reply(&reply, 2)?))
    }

    pub fn set_from_file(&self, name: &str, file: &TimeHistoryFile) -> ApiResult<()> {
        if file.header_lines < 0 || file.prefix_characters < 0 {
            return Err(ApiError::invalid_input(
                "header_lines/prefix_characters",
                format!("{}/{}", file.header_lines, file.prefix_characters),
                "must not be negative",
            ));
        }
        at_least_one("points_per_line", file.points_per_line)?;
        self.seed
            .call("Func.FuncTH.SetFromFile")
            .arg(name)
            .arg(file.file_name.as_str())
            .arg(file.header_lines)
            .arg(file.prefix_characters)
            .arg(file.points_per_line)
            .code(file.format)
            .arg(file.free_format)
            .invoke()?;
        Ok(())
    }

    pub fn get_from_file(&self, name: &str) -> ApiResult<TimeHistoryFile> {
        let reply = self
            .seed
            .call("Func.FuncTH.GetFromFile")
            .arg(name)
            .out_text()
            .out_int()
            .out_int()
            .out_int()
            .out_int()
            .out_bool()
            .invoke()?;
        Ok(TimeHistoryFile {
            file_name: reply.text(1)?,
            header_lines: reply.int(2)?,
            prefix_characters: reply.int(3)?,
            points_per_line: reply.int(4)?,
            format: reply.code(5)?,
            free_format: reply.boolean(6)?,
        })
    }

    pub fn set_sine(&self, name: &str, wave: &PeriodicWave) -> ApiResult<()> {
        self.set_wave("Func.FuncTH.SetSine", name, wave)
    }

    pub fn get_sine(&self, name: &str) -> ApiResult<PeriodicWave> {
        self.get_wave("Func.FuncTH.GetSine", name)
    }

    pub fn set_cosine(&self, name: &str, wave: &PeriodicWave) -> ApiResult<()> {
        self.set_wave("Func.FuncTH.SetCosine", name, wave)
    }

    pub fn get_cosine(&self, name: &str) -> ApiResult<PeriodicWave> {
        self.get_wave("Func.FuncTH.GetCosine", name)
    }

    fn set_wave(&self, operation: &str, name: &str, wave: &PeriodicWave) -> ApiResult<()> {
        positive("period", wave.period)?;
        at_least_one("cycles", wave.cycles)?;
        let steps = if wave.steps_per_cycle < MIN_STEPS_PER_CYCLE {
            debug!(name, requested = wave.steps_per_cycle, "steps per cycle raised to {}", MIN_STEPS_PER_CYCLE);
            MIN_STEPS_PER_CYCLE
        } else {
            wave.steps_per_cycle
        };

        self.seed
            .call(operation)
            .arg(name)
            .arg(wave.period)
            .arg(steps)
            .arg(wave.cycles)
            .arg(wave.amplitude)
            .invoke()?;
        Ok(())
    }

    fn get_wave(&self, operation: &str, name: &str) -> ApiResult<PeriodicWave> {
        let reply = self
            .seed
            .call(operation)
            .arg(name)
            .out_double()
            .out_int()
            .out_int()
            .out_double()
            .invoke()?;
        Ok(PeriodicWave {
            period: reply.double(1)?,
            steps_per_cycle: reply.int(2)?,
            cycles: reply.int(3)?,
            amplitude: reply.double(4)?,
        })
    }

    /// Linear rise to `amplitude` over `time`, then constant until `max_time`
    pub fn set_ramp(&self, name: &str, time: f64, amplitude: f64, max_time: f64) -> ApiResult<()> {
        positive("time", time)?;
        if max_time < time {
            return Err(ApiError::invalid_input(
                "max_time",
                max_time.to_string(),
                format!("must not be shorter than the ramp time {}", time),
            ));
        }
        self.seed
            .call("Func.FuncTH.SetRamp")
            .arg(name)
            .arg(time)
            .arg(amplitude)
            .arg(max_time)
            .invoke()?;
        Ok(())
    }

    /// Ramp time, amplitude and end time
    pub fn get_ramp(&self, name: &str) -> ApiResult<(f64, f64, f64)> {
        let reply = self
            .seed
            .call("Func.FuncTH.GetRamp")
            .arg(name)
            .out_double_n(3)
            .invoke()?;
        Ok((reply.double(1)?, reply.double(2)?, reply.double(3)?))
    }

    pub fn set_sawtooth(&self, name: &str, period: f64, ramp_time: f64, cycles: i32, amplitude: f64) -> ApiResult<()> {
        positive("period", period)?;
        at_least_one("cycles", cycles)?;
        if ramp_time < 0.0 || ramp_time > period / 4.0 {
            return Err(ApiError::invalid_input(
                "ramp_time",
                ramp_time.to_string(),
                format!("must lie between 0 and a quarter of the period {}", period),
            ));
        }
        self.seed
            .call("Func.FuncTH.SetSawtooth")
            .arg(name)
            .arg(period)
            .arg(ramp_time)
            .arg(cycles)
            .arg(amplitude)
            .invoke()?;
        Ok(())
    }

    /// Period, ramp time, cycles and amplitude
    pub fn get_sawtooth(&self, name: &str) -> ApiResult<(f64, f64, i32, f64)> {
        let reply = self
            .seed
            .call("Func.FuncTH.GetSawtooth")
            .arg(name)
            .out_double()
            .out_double()
            .out_int()
            .out_double()
            .invoke()?;
        Ok((reply.double(1)?, reply.double(2)?, reply.int(3)?, reply.double(4)?))
    }

    pub fn set_triangular(&self, name: &str, period: f64, cycles: i32, amplitude: f64) -> ApiResult<()> {
        positive("period", period)?;
        at_least_one("cycles", cycles)?;
        self.seed
            .call("Func.FuncTH.SetTriangular")
            .arg(name)
            .arg(period)
            .arg(cycles)
            .arg(amplitude)
            .invoke()?;
        Ok(())
    }

    /// Period, cycles and amplitude
    pub fn get_triangular(&self, name: &str) -> ApiResult<(f64, i32, f64)> {
        let reply = self
            .seed
            .call("Func.FuncTH.GetTriangular")
            .arg(name)
            .out_double()
            .out_int()
            .out_double()
            .invoke()?;
        Ok((reply.double(1)?, reply.int(2)?, reply.double(3)?))
    }
}
