//! Code tables for the function groups (spectra, time histories, steady state, PSD).

use super::host_codes;

host_codes! {
    /// Function family as reported by the host.
    ///
    /// Calls that accept an optional family forward `0` for "all families".
    pub enum FunctionType {
        ResponseSpectrum = 1,
        TimeHistory = 2,
        PowerSpectralDensity = 3,
        SteadyState = 4,
    }
}

host_codes! {
    /// Abscissa of a response-spectrum text file
    pub enum SpectrumFileValueType {
        FrequencyVsValue = 1,
        PeriodVsValue = 2,
    }
}

host_codes! {
    /// Layout of a time-history text file
    pub enum TimeHistoryFileFormat {
        /// Values at equal time steps
        EqualSteps = 1,
        /// Time and value pairs
        TimeAndValue = 2,
    }
}

host_codes! {
    /// Frequency units used by steady-state and PSD functions
    pub enum FrequencyUnits {
        Hertz = 1,
        Rpm = 2,
    }
}
