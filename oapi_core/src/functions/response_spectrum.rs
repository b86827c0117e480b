//! # Response-Spectrum Functions
//!
//! User-defined, file-based and code-defined spectra (`Func.FuncRS`).
//! Every code-defined spectrum is described by one record type that is
//! forwarded by its `set_*` method and read back by the paired `get_*`.
//!
//! ## Damping correction
//!
//! Eurocode 8 scales the 5 % spectrum by η = √(10 / (5 + ξ)), with ξ in
//! percent, and never lets η fall below 0.55 (EN 1998-1:2004, 3.2.2.2(3),
//! expression (3.6)). A smaller η is raised to 0.55 before it is forwarded.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{check_damping_ratio, points_from_reply, FunctionPoints};
use crate::codes::{
    DesignGroupChinese2010, Eurocode8Country, Eurocode8GroundType, Eurocode8SpectrumType,
    SeismicCoefficientOption, SeismicIntensityChinese2010, SiteClassAashto2007, SiteClassAsce7,
    SiteClassChinese2010, SiteClassNzs1170, SpectrumDirection, SpectrumFileValueType,
};
use crate::errors::{ApiError, ApiResult};
use crate::host::Seed;
use crate::values::{ensure_same_length, wire_count};

/// Lower bound of the Eurocode 8 damping correction factor η, EN 1998-1:2004 expression (3.6)
pub const EUROCODE8_MIN_DAMPING_CORRECTION: f64 = 0.55;

/// Spectrum read from a text file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumFile {
    pub file_name: String,
    /// Lines skipped at the top of the file
    pub header_lines: i32,
    pub value_type: SpectrumFileValueType,
    pub damping_ratio: f64,
}

/// AASHTO 2007 design spectrum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aashto2007Spectrum {
    pub coefficient_option: SeismicCoefficientOption,
    pub latitude: f64,
    pub longitude: f64,
    pub zip_code: String,
    /// Short-period spectral acceleration
    pub ss: f64,
    /// One-second spectral acceleration
    pub s1: f64,
    /// Peak ground acceleration
    pub pga: f64,
    pub site_class: SiteClassAashto2007,
    pub fpga: f64,
    pub fa: f64,
    pub fv: f64,
    pub damping_ratio: f64,
}

/// ASCE 7-10 or ASCE 7-16 design spectrum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asce7Spectrum {
    pub coefficient_option: SeismicCoefficientOption,
    pub latitude: f64,
    pub longitude: f64,
    pub zip_code: String,
    pub ss: f64,
    pub s1: f64,
    /// Long-period transition period (s)
    pub tl: f64,
    pub site_class: SiteClassAsce7,
    pub fa: f64,
    pub fv: f64,
    pub damping_ratio: f64,
}

/// Eurocode 8 (EN 1998-1:2004) design spectrum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eurocode8Spectrum {
    pub country: Eurocode8Country,
    pub direction: SpectrumDirection,
    pub spectrum_type: Eurocode8SpectrumType,
    pub ground_type: Eurocode8GroundType,
    /// Design ground acceleration on type A ground, in g
    pub ag: f64,
    /// Soil factor
    pub s: f64,
    /// Ratio of vertical to horizontal design ground acceleration
    pub avg_over_ag: f64,
    pub tb: f64,
    pub tc: f64,
    pub td: f64,
    /// Lower bound factor for the horizontal design spectrum
    pub beta: f64,
    /// Behaviour factor
    pub q: f64,
    /// Damping correction factor η
    pub damping_correction: f64,
    pub damping_ratio: f64,
}

impl Eurocode8Spectrum {
    /// η for a damping ratio given as a fraction of critical, bounded below by 0.55
    pub fn damping_correction_for(damping_ratio: f64) -> f64 {
        let percent = damping_ratio * 100.0;
        (10.0 / (5.0 + percent)).sqrt().max(EUROCODE8_MIN_DAMPING_CORRECTION)
    }
}

/// NZS 1170.5:2004 design spectrum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nzs1170Spectrum {
    pub site_class: SiteClassNzs1170,
    /// Hazard factor Z
    pub hazard_factor: f64,
    /// Return period factor R
    pub return_period_factor: f64,
    /// Near-fault factor N(T, D)
    pub near_fault_factor: f64,
    /// Structural performance factor Sp
    pub structural_performance_factor: f64,
    /// Structural ductility factor μ
    pub ductility: f64,
    pub damping_ratio: f64,
}

/// GB 50011-2010 design spectrum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chinese2010Spectrum {
    /// Maximum seismic influence coefficient
    pub alpha_max: f64,
    pub intensity: SeismicIntensityChinese2010,
    pub site_class: SiteClassChinese2010,
    pub design_group: DesignGroupChinese2010,
    /// Characteristic ground period Tg (s)
    pub characteristic_period: f64,
    /// Period time discount factor
    pub period_discount: f64,
    pub damping_ratio: f64,
}

/// Response-spectrum functions (`Func.FuncRS`)
#[derive(Debug, Clone)]
pub struct ResponseSpectrum {
    seed: Seed,
}

impl ResponseSpectrum {
    pub fn new(seed: Seed) -> Self {
        ResponseSpectrum { seed }
    }

    /// Define a spectrum from period/value pairs
    pub fn set_user(&self, name: &str, periods: &[f64], values: &[f64], damping_ratio: f64) -> ApiResult<()> {
        let count = ensure_same_length("periods", periods, "values", values)?;
        check_damping_ratio(damping_ratio)?;
        self.seed
            .call("Func.FuncRS.SetUser")
            .arg(name)
            .arg(wire_count(count)?)
            .arg(periods)
            .arg(values)
            .arg(damping_ratio)
            .invoke()?;
        Ok(())
    }

    /// Period/value pairs and damping ratio of a user spectrum
    pub fn get_user(&self, name: &str) -> ApiResult<(FunctionPoints, f64)> {
        let reply = self
            .seed
            .call("Func.FuncRS.GetUser")
            .arg(name)
            .out_int()
            .out_doubles()
            .out_doubles()
            .out_double()
            .invoke()?;
        Ok((points_from_reply(&reply, 1)?, reply.double(4)?))
    }

    pub fn set_from_file(&self, name: &str, file: &SpectrumFile) -> ApiResult<()> {
        if file.header_lines < 0 {
            return Err(ApiError::invalid_input(
                "header_lines",
                file.header_lines.to_string(),
                "must not be negative",
            ));
        }
        check_damping_ratio(file.damping_ratio)?;
        self.seed
            .call("Func.FuncRS.SetFromFile")
            .arg(name)
            .arg(file.file_name.as_str())
            .arg(file.header_lines)
            .code(file.value_type)
            .arg(file.damping_ratio)
            .invoke()?;
        Ok(())
    }

    pub fn get_from_file(&self, name: &str) -> ApiResult<SpectrumFile> {
        let reply = self
            .seed
            .call("Func.FuncRS.GetFromFile")
            .arg(name)
            .out_text()
            .out_int()
            .out_int()
            .out_double()
            .invoke()?;
        Ok(SpectrumFile {
            file_name: reply.text(1)?,
            header_lines: reply.int(2)?,
            value_type: reply.code(3)?,
            damping_ratio: reply.double(4)?,
        })
    }

    pub fn set_aashto2007(&self, name: &str, spectrum: &Aashto2007Spectrum) -> ApiResult<()> {
        check_damping_ratio(spectrum.damping_ratio)?;
        self.seed
            .call("Func.FuncRS.SetAASHTO2007")
            .arg(name)
            .code(spectrum.coefficient_option)
            .arg(spectrum.latitude)
            .arg(spectrum.longitude)
            .arg(spectrum.zip_code.as_str())
            .arg(spectrum.ss)
            .arg(spectrum.s1)
            .arg(spectrum.pga)
            .code(spectrum.site_class)
            .arg(spectrum.fpga)
            .arg(spectrum.fa)
            .arg(spectrum.fv)
            .arg(spectrum.damping_ratio)
            .invoke()?;
        Ok(())
    }

    pub fn get_aashto2007(&self, name: &str) -> ApiResult<Aashto2007Spectrum> {
        let reply = self
            .seed
            .call("Func.FuncRS.GetAASHTO2007")
            .arg(name)
            .out_int()
            .out_double_n(2)
            .out_text()
            .out_double_n(3)
            .out_int()
            .out_double_n(4)
            .invoke()?;
        Ok(Aashto2007Spectrum {
            coefficient_option: reply.code(1)?,
            latitude: reply.double(2)?,
            longitude: reply.double(3)?,
            zip_code: reply.text(4)?,
            ss: reply.double(5)?,
            s1: reply.double(6)?,
            pga: reply.double(7)?,
            site_class: reply.code(8)?,
            fpga: reply.double(9)?,
            fa: reply.double(10)?,
            fv: reply.double(11)?,
            damping_ratio: reply.double(12)?,
        })
    }

    pub fn set_asce7_10(&self, name: &str, spectrum: &Asce7Spectrum) -> ApiResult<()> {
        self.set_asce7("Func.FuncRS.SetASCE710", name, spectrum)
    }

    pub fn get_asce7_10(&self, name: &str) -> ApiResult<Asce7Spectrum> {
        self.get_asce7("Func.FuncRS.GetASCE710", name)
    }

    /// Only offered by SAP2000 and CSiBridge from release 20
    pub fn set_asce7_16(&self, name: &str, spectrum: &Asce7Spectrum) -> ApiResult<()> {
        self.set_asce7("Func.FuncRS.SetASCE716", name, spectrum)
    }

    pub fn get_asce7_16(&self, name: &str) -> ApiResult<Asce7Spectrum> {
        self.get_asce7("Func.FuncRS.GetASCE716", name)
    }

    fn set_asce7(&self, operation: &str, name: &str, spectrum: &Asce7Spectrum) -> ApiResult<()> {
        check_damping_ratio(spectrum.damping_ratio)?;
        self.seed
            .call(operation)
            .arg(name)
            .code(spectrum.coefficient_option)
            .arg(spectrum.latitude)
            .arg(spectrum.longitude)
            .arg(spectrum.zip_code.as_str())
            .arg(spectrum.ss)
            .arg(spectrum.s1)
            .arg(spectrum.tl)
            .code(spectrum.site_class)
            .arg(spectrum.fa)
            .arg(spectrum.fv)
            .arg(spectrum.damping_ratio)
            .invoke()?;
        Ok(())
    }

    fn get_asce7(&self, operation: &str, name: &str) -> ApiResult<Asce7Spectrum> {
        let reply = self
            .seed
            .call(operation)
            .arg(name)
            .out_int()
            .out_double_n(2)
            .out_text()
            .out_double_n(3)
            .out_int()
            .out_double_n(3)
            .invoke()?;
        Ok(Asce7Spectrum {
            coefficient_option: reply.code(1)?,
            latitude: reply.double(2)?,
            longitude: reply.double(3)?,
            zip_code: reply.text(4)?,
            ss: reply.double(5)?,
            s1: reply.double(6)?,
            tl: reply.double(7)?,
            site_class: reply.code(8)?,
            fa: reply.double(9)?,
            fv: reply.double(10)?,
            damping_ratio: reply.double(11)?,
        })
    }

    /// Define a Eurocode 8 spectrum; η below 0.55 is raised to 0.55
    pub fn set_eurocode8_2004(&self, name: &str, spectrum: &Eurocode8Spectrum) -> ApiResult<()> {
        check_damping_ratio(spectrum.damping_ratio)?;
        if !spectrum.damping_correction.is_finite() {
            return Err(ApiError::invalid_input(
                "damping_correction",
                spectrum.damping_correction.to_string(),
                "must be a finite number",
            ));
        }
        let eta = if spectrum.damping_correction < EUROCODE8_MIN_DAMPING_CORRECTION {
            debug!(
                name,
                requested = spectrum.damping_correction,
                "damping correction raised to {}",
                EUROCODE8_MIN_DAMPING_CORRECTION
            );
            EUROCODE8_MIN_DAMPING_CORRECTION
        } else {
            spectrum.damping_correction
        };

        self.seed
            .call("Func.FuncRS.SetEuroCode82004_1")
            .arg(name)
            .code(spectrum.country)
            .code(spectrum.direction)
            .code(spectrum.spectrum_type)
            .code(spectrum.ground_type)
            .arg(spectrum.ag)
            .arg(spectrum.s)
            .arg(spectrum.avg_over_ag)
            .arg(spectrum.tb)
            .arg(spectrum.tc)
            .arg(spectrum.td)
            .arg(spectrum.beta)
            .arg(spectrum.q)
            .arg(eta)
            .arg(spectrum.damping_ratio)
            .invoke()?;
        Ok(())
    }

    pub fn get_eurocode8_2004(&self, name: &str) -> ApiResult<Eurocode8Spectrum> {
        let reply = self
            .seed
            .call("Func.FuncRS.GetEuroCode82004_1")
            .arg(name)
            .out_int()
            .out_int()
            .out_int()
            .out_int()
            .out_double_n(10)
            .invoke()?;
        Ok(Eurocode8Spectrum {
            country: reply.code(1)?,
            direction: reply.code(2)?,
            spectrum_type: reply.code(3)?,
            ground_type: reply.code(4)?,
            ag: reply.double(5)?,
            s: reply.double(6)?,
            avg_over_ag: reply.double(7)?,
            tb: reply.double(8)?,
            tc: reply.double(9)?,
            td: reply.double(10)?,
            beta: reply.double(11)?,
            q: reply.double(12)?,
            damping_correction: reply.double(13)?,
            damping_ratio: reply.double(14)?,
        })
    }

    pub fn set_nzs1170_2004(&self, name: &str, spectrum: &Nzs1170Spectrum) -> ApiResult<()> {
        check_damping_ratio(spectrum.damping_ratio)?;
        if spectrum.ductility < 1.0 {
            return Err(ApiError::invalid_input(
                "ductility",
                spectrum.ductility.to_string(),
                "structural ductility factor must be at least 1.0",
            ));
        }
        self.seed
            .call("Func.FuncRS.SetNZS11702004")
            .arg(name)
            .code(spectrum.site_class)
            .arg(spectrum.hazard_factor)
            .arg(spectrum.return_period_factor)
            .arg(spectrum.near_fault_factor)
            .arg(spectrum.structural_performance_factor)
            .arg(spectrum.ductility)
            .arg(spectrum.damping_ratio)
            .invoke()?;
        Ok(())
    }

    pub fn get_nzs1170_2004(&self, name: &str) -> ApiResult<Nzs1170Spectrum> {
        let reply = self
            .seed
            .call("Func.FuncRS.GetNZS11702004")
            .arg(name)
            .out_int()
            .out_double_n(6)
            .invoke()?;
        Ok(Nzs1170Spectrum {
            site_class: reply.code(1)?,
            hazard_factor: reply.double(2)?,
            return_period_factor: reply.double(3)?,
            near_fault_factor: reply.double(4)?,
            structural_performance_factor: reply.double(5)?,
            ductility: reply.double(6)?,
            damping_ratio: reply.double(7)?,
        })
    }

    pub fn set_chinese2010(&self, name: &str, spectrum: &Chinese2010Spectrum) -> ApiResult<()> {
        check_damping_ratio(spectrum.damping_ratio)?;
        self.seed
            .call("Func.FuncRS.SetChinese2010")
            .arg(name)
            .arg(spectrum.alpha_max)
            .code(spectrum.intensity)
            .code(spectrum.site_class)
            .code(spectrum.design_group)
            .arg(spectrum.characteristic_period)
            .arg(spectrum.period_discount)
            .arg(spectrum.damping_ratio)
            .invoke()?;
        Ok(())
    }

    pub fn get_chinese2010(&self, name: &str) -> ApiResult<Chinese2010Spectrum> {
        let reply = self
            .seed
            .call("Func.FuncRS.GetChinese2010")
            .arg(name)
            .out_double()
            .out_int()
            .out_int()
            .out_int()
            .out_double_n(3)
            .invoke()?;
        Ok(Chinese2010Spectrum {
            alpha_max: reply.double(1)?,
            intensity: reply.code(2)?,
            site_class: reply.code(3)?,
            design_group: reply.code(4)?,
            characteristic_period: reply.double(5)?,
            period_discount: reply.double(6)?,
            damping_ratio: reply.double(7)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{HostProduct, HostTarget};
    use crate::host::{RecordingHost, Value};
    use semver::Version;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn spectra_on(target: HostTarget) -> (Rc<RefCell<RecordingHost>>, ResponseSpectrum) {
        let shared = Rc::new(RefCell::new(RecordingHost::new()));
        let seed = Seed::from_shared(shared.clone(), target);
        (shared, ResponseSpectrum::new(seed))
    }

    fn spectra() -> (Rc<RefCell<RecordingHost>>, ResponseSpectrum) {
        spectra_on(HostTarget::default())
    }

    fn aashto() -> Aashto2007Spectrum {
        Aashto2007Spectrum {
            coefficient_option: SeismicCoefficientOption::UserCoefficients,
            latitude: 0.0,
            longitude: 0.0,
            zip_code: String::new(),
            ss: 1.0,
            s1: 0.4,
            pga: 0.4,
            site_class: SiteClassAashto2007::F,
            fpga: 1.0,
            fa: 1.1,
            fv: 1.6,
            damping_ratio: 0.05,
        }
    }

    fn asce7() -> Asce7Spectrum {
        Asce7Spectrum {
            coefficient_option: SeismicCoefficientOption::ZipCode,
            latitude: 0.0,
            longitude: 0.0,
            zip_code: "94704".into(),
            ss: 1.5,
            s1: 0.6,
            tl: 8.0,
            site_class: SiteClassAsce7::D,
            fa: 1.0,
            fv: 1.5,
            damping_ratio: 0.05,
        }
    }

    fn eurocode8(eta: f64) -> Eurocode8Spectrum {
        Eurocode8Spectrum {
            country: Eurocode8Country::Slovenia,
            direction: SpectrumDirection::Horizontal,
            spectrum_type: Eurocode8SpectrumType::Type1,
            ground_type: Eurocode8GroundType::C,
            ag: 0.25,
            s: 1.15,
            avg_over_ag: 0.9,
            tb: 0.2,
            tc: 0.6,
            td: 2.0,
            beta: 0.2,
            q: 3.9,
            damping_correction: eta,
            damping_ratio: 0.05,
        }
    }

    #[test]
    fn test_user_spectrum_round_trip() {
        let (host, rs) = spectra();
        rs.set_user("RS", &[0.0, 0.5, 2.0], &[0.3, 0.75, 0.2], 0.05).unwrap();

        let call = host.borrow().last_call("Func.FuncRS.SetUser").unwrap();
        assert_eq!(call.args[1], Value::Int(3));

        let (points, damping) = rs.get_user("RS").unwrap();
        assert_eq!(points.abscissae, vec![0.0, 0.5, 2.0]);
        assert_eq!(points.ordinates, vec![0.3, 0.75, 0.2]);
        assert_eq!(damping, 0.05);
    }

    #[test]
    fn test_user_spectrum_length_mismatch_never_reaches_host() {
        let (host, rs) = spectra();
        let err = rs.set_user("RS", &[0.0, 0.5, 2.0], &[0.3, 0.75], 0.05).unwrap_err();
        assert_eq!(err, ApiError::length_mismatch("periods", 3, "values", 2));
        assert!(err.to_string().contains('3') && err.to_string().contains('2'));
        assert!(host.borrow().calls().is_empty());
    }

    #[test]
    fn test_invalid_damping_ratio_rejected() {
        let (host, rs) = spectra();
        let err = rs.set_user("RS", &[0.0], &[1.0], 1.5).unwrap_err();
        assert!(err.is_precondition());
        assert!(host.borrow().calls().is_empty());
    }

    #[test]
    fn test_from_file_round_trip() {
        let (_, rs) = spectra();
        let file = SpectrumFile {
            file_name: r"C:\spectra\site.txt".into(),
            header_lines: 2,
            value_type: SpectrumFileValueType::FrequencyVsValue,
            damping_ratio: 0.02,
        };
        rs.set_from_file("RS-F", &file).unwrap();
        assert_eq!(rs.get_from_file("RS-F").unwrap(), file);

        let bad = SpectrumFile { header_lines: -1, ..file };
        assert_eq!(rs.set_from_file("RS-F", &bad).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_aashto_site_class_f_round_trip() {
        let (host, rs) = spectra();
        rs.set_aashto2007("AASHTO", &aashto()).unwrap();

        let call = host.borrow().last_call("Func.FuncRS.SetAASHTO2007").unwrap();
        assert_eq!(call.args[8], Value::Int(6));

        let back = rs.get_aashto2007("AASHTO").unwrap();
        assert_eq!(back.site_class, SiteClassAashto2007::F);
        assert_eq!(back, aashto());
    }

    #[test]
    fn test_unknown_site_class_code_from_host() {
        let mut host = RecordingHost::new();
        let mut values: Vec<Value> = vec![
            Value::Int(0),
            Value::Double(0.0),
            Value::Double(0.0),
            Value::from(""),
        ];
        values.extend([1.0, 0.4, 0.4].map(Value::Double));
        values.push(Value::Int(9));
        values.extend([1.0, 1.0, 1.0, 0.05].map(Value::Double));
        host.store("Func.FuncRS.GetAASHTO2007", "X", values);

        let rs = ResponseSpectrum::new(Seed::new(host, HostTarget::default()));
        let err = rs.get_aashto2007("X").unwrap_err();
        assert_eq!(err, ApiError::unknown_code("SiteClassAashto2007", 9));
    }

    #[test]
    fn test_asce7_10_round_trip() {
        let (_, rs) = spectra();
        rs.set_asce7_10("ASCE", &asce7()).unwrap();
        assert_eq!(rs.get_asce7_10("ASCE").unwrap(), asce7());
    }

    #[test]
    fn test_asce7_16_is_capability_gated() {
        let etabs = HostTarget::new(HostProduct::Etabs, Version::new(19, 0, 0));
        let (host, rs) = spectra_on(etabs);
        let err = rs.set_asce7_16("ASCE16", &asce7()).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED");
        assert!(host.borrow().calls().is_empty());

        let old_sap = HostTarget::new(HostProduct::Sap2000, Version::new(19, 1, 0));
        let (_, rs) = spectra_on(old_sap);
        assert!(rs.set_asce7_16("ASCE16", &asce7()).is_err());

        let (_, rs) = spectra();
        rs.set_asce7_16("ASCE16", &asce7()).unwrap();
        assert_eq!(rs.get_asce7_16("ASCE16").unwrap().site_class, SiteClassAsce7::D);
    }

    #[test]
    fn test_eurocode8_damping_correction_clamped() {
        let (host, rs) = spectra();
        rs.set_eurocode8_2004("EC8", &eurocode8(0.4)).unwrap();
        let call = host.borrow().last_call("Func.FuncRS.SetEuroCode82004_1").unwrap();
        assert_eq!(call.args[13], Value::Double(EUROCODE8_MIN_DAMPING_CORRECTION));

        let back = rs.get_eurocode8_2004("EC8").unwrap();
        assert_eq!(back.damping_correction, 0.55);
        assert_eq!(back.country, Eurocode8Country::Slovenia);
    }

    #[test]
    fn test_eurocode8_damping_correction_forwarded_unchanged() {
        let (host, rs) = spectra();
        for eta in [0.55, 0.7, 1.0, 1.2] {
            rs.set_eurocode8_2004("EC8", &eurocode8(eta)).unwrap();
            let call = host.borrow().last_call("Func.FuncRS.SetEuroCode82004_1").unwrap();
            assert_eq!(call.args[13], Value::Double(eta));
        }
        assert!(rs.set_eurocode8_2004("EC8", &eurocode8(f64::NAN)).is_err());
    }

    #[test]
    fn test_damping_correction_for_ratio() {
        assert!((Eurocode8Spectrum::damping_correction_for(0.05) - 1.0).abs() < 1e-12);
        assert!(Eurocode8Spectrum::damping_correction_for(0.02) > 1.0);
        assert_eq!(Eurocode8Spectrum::damping_correction_for(0.5), EUROCODE8_MIN_DAMPING_CORRECTION);

        // η reaches 0.55 at ξ = 28.06 %
        assert_eq!(EUROCODE8_MIN_DAMPING_CORRECTION, 0.55);
        assert!(Eurocode8Spectrum::damping_correction_for(0.28) > 0.55);
        assert_eq!(Eurocode8Spectrum::damping_correction_for(0.29), 0.55);
    }

    #[test]
    fn test_nzs1170_round_trip_and_ductility() {
        let (_, rs) = spectra();
        let spectrum = Nzs1170Spectrum {
            site_class: SiteClassNzs1170::C,
            hazard_factor: 0.4,
            return_period_factor: 1.0,
            near_fault_factor: 1.0,
            structural_performance_factor: 0.7,
            ductility: 3.0,
            damping_ratio: 0.05,
        };
        rs.set_nzs1170_2004("NZ", &spectrum).unwrap();
        assert_eq!(rs.get_nzs1170_2004("NZ").unwrap(), spectrum);

        let brittle = Nzs1170Spectrum { ductility: 0.5, ..spectrum };
        assert!(rs.set_nzs1170_2004("NZ", &brittle).is_err());
    }

    #[test]
    fn test_chinese2010_round_trip() {
        let (_, rs) = spectra();
        let spectrum = Chinese2010Spectrum {
            alpha_max: 0.16,
            intensity: SeismicIntensityChinese2010::Intensity7High,
            site_class: SiteClassChinese2010::II,
            design_group: DesignGroupChinese2010::Group2,
            characteristic_period: 0.4,
            period_discount: 1.0,
            damping_ratio: 0.05,
        };
        rs.set_chinese2010("GB", &spectrum).unwrap();
        assert_eq!(rs.get_chinese2010("GB").unwrap(), spectrum);
    }

    #[test]
    fn test_spectrum_serialization() {
        let json = serde_json::to_string(&aashto()).unwrap();
        let parsed: Aashto2007Spectrum = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, aashto());
    }
}
