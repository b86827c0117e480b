//! # Material Properties
//!
//! Material definitions held by the host (`PropMaterial`): creation from the
//! host's regional libraries, isotropic mechanical properties, unit
//! weight/mass, damping, and the nonlinear concrete and steel parameters.
//!
//! ## Example
//!
//! ```rust
//! use oapi_core::capabilities::HostTarget;
//! use oapi_core::host::{RecordingHost, Seed};
//! use oapi_core::materials::{IsotropicProperties, MaterialProperties};
//!
//! let materials = MaterialProperties::new(Seed::new(RecordingHost::new(), HostTarget::default()));
//! let steel = IsotropicProperties { e: 29000.0, u: 0.3, a: 6.5e-6, temperature: 0.0 };
//! materials.set_isotropic("A992Fy50", &steel).unwrap();
//!
//! let back = materials.get_isotropic("A992Fy50").unwrap();
//! assert!((back.shear_modulus() - 11153.85).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codes::{
    ConcreteStressStrainType, HysteresisType, MaterialType, SteelStressStrainType, WeightOrMass,
};
use crate::errors::{ApiError, ApiResult};
use crate::host::Seed;
use crate::sections::{annotate, out_annotation, read_annotation, Annotation};

/// Isotropic elastic and thermal properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsotropicProperties {
    /// Modulus of elasticity
    pub e: f64,
    /// Poisson's ratio
    pub u: f64,
    /// Coefficient of thermal expansion
    pub a: f64,
    /// Temperature the properties apply at
    pub temperature: f64,
}

impl IsotropicProperties {
    /// G = E / (2 (1 + ν))
    pub fn shear_modulus(&self) -> f64 {
        self.e / (2.0 * (1.0 + self.u))
    }

    fn validate(&self) -> ApiResult<()> {
        if !(self.e > 0.0) {
            return Err(ApiError::invalid_input("e", self.e.to_string(), "modulus of elasticity must be positive"));
        }
        if !(self.u > -1.0 && self.u < 0.5) {
            return Err(ApiError::invalid_input("u", self.u.to_string(), "Poisson's ratio must lie in (-1, 0.5)"));
        }
        Ok(())
    }
}

/// Unit weight and unit mass; the host derives one from the other
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightAndMass {
    pub weight_per_volume: f64,
    pub mass_per_volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialDamping {
    /// Modal damping ratio
    pub modal_ratio: f64,
    /// Mass-proportional viscous coefficient
    pub viscous_mass: f64,
    /// Stiffness-proportional viscous coefficient
    pub viscous_stiffness: f64,
    pub hysteretic_mass: f64,
    pub hysteretic_stiffness: f64,
}

/// Nonlinear concrete parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Specified compressive strength f'c
    pub fc: f64,
    pub is_lightweight: bool,
    /// Shear strength reduction factor for lightweight concrete
    pub fcs_factor: f64,
    pub stress_strain: ConcreteStressStrainType,
    pub hysteresis: HysteresisType,
    pub strain_at_fc: f64,
    pub ultimate_strain: f64,
    /// Final compression slope as a fraction of E
    pub final_slope: f64,
    /// Drucker-Prager friction angle (degrees)
    pub friction_angle: f64,
    pub dilatational_angle: f64,
}

/// Nonlinear steel parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelProperties {
    pub fy: f64,
    pub fu: f64,
    pub expected_fy: f64,
    pub expected_fu: f64,
    pub stress_strain: SteelStressStrainType,
    pub hysteresis: HysteresisType,
    pub strain_at_hardening: f64,
    pub strain_at_max_stress: f64,
    pub strain_at_rupture: f64,
    /// Final slope as a fraction of E
    pub final_slope: f64,
}

/// Material definitions (`PropMaterial`)
#[derive(Debug, Clone)]
pub struct MaterialProperties {
    seed: Seed,
}

impl MaterialProperties {
    pub fn new(seed: Seed) -> Self {
        MaterialProperties { seed }
    }

    /// Add a material from the host's library and return the name it was given.
    ///
    /// With no `user_name` the host picks the name from the grade.
    pub fn add_material(
        &self,
        material_type: MaterialType,
        region: &str,
        standard: &str,
        grade: &str,
        user_name: Option<&str>,
    ) -> ApiResult<String> {
        let user_name = user_name.unwrap_or_default();
        let reply = self
            .seed
            .call("PropMaterial.AddMaterial")
            .arg(user_name)
            .code(material_type)
            .arg(region)
            .arg(standard)
            .arg(grade)
            .arg(user_name)
            .invoke()?;

        let name = reply.text(0)?;
        if name.is_empty() {
            return Err(ApiError::marshalling(reply.operation(), "host did not report the material name"));
        }
        debug!(name = %name, region, standard, grade, "material added");
        Ok(name)
    }

    pub fn set_material(&self, name: &str, material_type: MaterialType, annotation: &Annotation) -> ApiResult<()> {
        let call = self
            .seed
            .call("PropMaterial.SetMaterial")
            .arg(name)
            .code(material_type);
        annotate(call, annotation).invoke()?;
        Ok(())
    }

    pub fn get_material(&self, name: &str) -> ApiResult<(MaterialType, Annotation)> {
        let call = self.seed.call("PropMaterial.GetMaterial").arg(name).out_int();
        let reply = out_annotation(call).invoke()?;
        Ok((reply.code(1)?, read_annotation(&reply, 2)?))
    }

    pub fn set_isotropic(&self, name: &str, properties: &IsotropicProperties) -> ApiResult<()> {
        properties.validate()?;
        self.seed
            .call("PropMaterial.SetMPIsotropic")
            .arg(name)
            .arg(properties.e)
            .arg(properties.u)
            .arg(properties.a)
            .arg(properties.temperature)
            .invoke()?;
        Ok(())
    }

    pub fn get_isotropic(&self, name: &str) -> ApiResult<IsotropicProperties> {
        let reply = self
            .seed
            .call("PropMaterial.GetMPIsotropic")
            .arg(name)
            .out_double_n(4)
            .invoke()?;
        Ok(IsotropicProperties {
            e: reply.double(1)?,
            u: reply.double(2)?,
            a: reply.double(3)?,
            temperature: reply.double(4)?,
        })
    }

    /// Set either the unit weight or the unit mass
    pub fn set_weight_and_mass(&self, name: &str, option: WeightOrMass, value: f64) -> ApiResult<()> {
        if value < 0.0 || !value.is_finite() {
            return Err(ApiError::invalid_input("value", value.to_string(), "must not be negative"));
        }
        self.seed
            .call("PropMaterial.SetWeightAndMass")
            .arg(name)
            .code(option)
            .arg(value)
            .invoke()?;
        Ok(())
    }

    pub fn get_weight_and_mass(&self, name: &str) -> ApiResult<WeightAndMass> {
        let reply = self
            .seed
            .call("PropMaterial.GetWeightAndMass")
            .arg(name)
            .out_double()
            .out_double()
            .invoke()?;
        Ok(WeightAndMass {
            weight_per_volume: reply.double(1)?,
            mass_per_volume: reply.double(2)?,
        })
    }

    pub fn set_damping(&self, name: &str, damping: &MaterialDamping) -> ApiResult<()> {
        if !(0.0..1.0).contains(&damping.modal_ratio) {
            return Err(ApiError::invalid_input(
                "modal_ratio",
                damping.modal_ratio.to_string(),
                "must be a fraction of critical damping in [0, 1)",
            ));
        }
        self.seed
            .call("PropMaterial.SetDamping")
            .arg(name)
            .arg(damping.modal_ratio)
            .arg(damping.viscous_mass)
            .arg(damping.viscous_stiffness)
            .arg(damping.hysteretic_mass)
            .arg(damping.hysteretic_stiffness)
            .invoke()?;
        Ok(())
    }

    pub fn get_damping(&self, name: &str) -> ApiResult<MaterialDamping> {
        let reply = self
            .seed
            .call("PropMaterial.GetDamping")
            .arg(name)
            .out_double_n(5)
            .invoke()?;
        Ok(MaterialDamping {
            modal_ratio: reply.double(1)?,
            viscous_mass: reply.double(2)?,
            viscous_stiffness: reply.double(3)?,
            hysteretic_mass: reply.double(4)?,
            hysteretic_stiffness: reply.double(5)?,
        })
    }

    pub fn set_concrete(&self, name: &str, concrete: &ConcreteProperties) -> ApiResult<()> {
        if !(concrete.fc > 0.0) {
            return Err(ApiError::invalid_input("fc", concrete.fc.to_string(), "must be positive"));
        }
        if concrete.ultimate_strain < concrete.strain_at_fc {
            return Err(ApiError::invalid_input(
                "ultimate_strain",
                concrete.ultimate_strain.to_string(),
                format!("must not be less than the strain at f'c {}", concrete.strain_at_fc),
            ));
        }
        self.seed
            .call("PropMaterial.SetOConcrete_1")
            .arg(name)
            .arg(concrete.fc)
            .arg(concrete.is_lightweight)
            .arg(concrete.fcs_factor)
            .code(concrete.stress_strain)
            .code(concrete.hysteresis)
            .arg(concrete.strain_at_fc)
            .arg(concrete.ultimate_strain)
            .arg(concrete.final_slope)
            .arg(concrete.friction_angle)
            .arg(concrete.dilatational_angle)
            .invoke()?;
        Ok(())
    }

    pub fn get_concrete(&self, name: &str) -> ApiResult<ConcreteProperties> {
        let reply = self
            .seed
            .call("PropMaterial.GetOConcrete_1")
            .arg(name)
            .out_double()
            .out_bool()
            .out_double()
            .out_int()
            .out_int()
            .out_double_n(5)
            .invoke()?;
        Ok(ConcreteProperties {
            fc: reply.double(1)?,
            is_lightweight: reply.boolean(2)?,
            fcs_factor: reply.double(3)?,
            stress_strain: reply.code(4)?,
            hysteresis: reply.code(5)?,
            strain_at_fc: reply.double(6)?,
            ultimate_strain: reply.double(7)?,
            final_slope: reply.double(8)?,
            friction_angle: reply.double(9)?,
            dilatational_angle: reply.double(10)?,
        })
    }

    pub fn set_steel(&self, name: &str, steel: &SteelProperties) -> ApiResult<()> {
        if !(steel.fy > 0.0) || steel.fu < steel.fy {
            return Err(ApiError::invalid_input(
                "fy/fu",
                format!("{}/{}", steel.fy, steel.fu),
                "yield stress must be positive and not exceed the tensile strength",
            ));
        }
        let strains = [steel.strain_at_hardening, steel.strain_at_max_stress, steel.strain_at_rupture];
        if strains.windows(2).any(|w| w[1] < w[0]) {
            return Err(ApiError::invalid_input(
                "strains",
                format!("{:?}", strains),
                "hardening, maximum-stress and rupture strains must not decrease",
            ));
        }
        self.seed
            .call("PropMaterial.SetOSteel_1")
            .arg(name)
            .arg(steel.fy)
            .arg(steel.fu)
            .arg(steel.expected_fy)
            .arg(steel.expected_fu)
            .code(steel.stress_strain)
            .code(steel.hysteresis)
            .arg(steel.strain_at_hardening)
            .arg(steel.strain_at_max_stress)
            .arg(steel.strain_at_rupture)
            .arg(steel.final_slope)
            .invoke()?;
        Ok(())
    }

    pub fn get_steel(&self, name: &str) -> ApiResult<SteelProperties> {
        let reply = self
            .seed
            .call("PropMaterial.GetOSteel_1")
            .arg(name)
            .out_double_n(4)
            .out_int()
            .out_int()
            .out_double_n(4)
            .invoke()?;
        Ok(SteelProperties {
            fy: reply.double(1)?,
            fu: reply.double(2)?,
            expected_fy: reply.double(3)?,
            expected_fu: reply.double(4)?,
            stress_strain: reply.code(5)?,
            hysteresis: reply.code(6)?,
            strain_at_hardening: reply.double(7)?,
            strain_at_max_stress: reply.double(8)?,
            strain_at_rupture: reply.double(9)?,
            final_slope: reply.double(10)?,
        })
    }

    /// Number of materials, optionally of one type only
    pub fn count(&self, material_type: Option<MaterialType>) -> ApiResult<usize> {
        self.seed
            .call("PropMaterial.Count")
            .out_int()
            .code_or_all(material_type)
            .invoke()?
            .count(0)
    }

    pub fn name_list(&self, material_type: Option<MaterialType>) -> ApiResult<Vec<String>> {
        self.seed
            .call("PropMaterial.GetNameList")
            .out_int()
            .out_texts()
            .code_or_all(material_type)
            .invoke()?
            .counted_texts(0, 1)
    }

    pub fn change_name(&self, name: &str, new_name: &str) -> ApiResult<()> {
        self.seed
            .call("PropMaterial.ChangeName")
            .arg(name)
            .arg(new_name)
            .invoke()?;
        Ok(())
    }

    pub fn delete(&self, name: &str) -> ApiResult<()> {
        self.seed.call("PropMaterial.Delete").arg(name).invoke()?;
        Ok(())
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

    fn materials_with(host: RecordingHost) -> (Rc<RefCell<RecordingHost>>, MaterialProperties) {
        let shared = Rc::new(RefCell::new(host));
        let seed = Seed::from_shared(shared.clone(), HostTarget::default());
        (shared, MaterialProperties::new(seed))
    }

    fn materials() -> MaterialProperties {
        materials_with(RecordingHost::new()).1
    }

    fn concrete() -> ConcreteProperties {
        ConcreteProperties {
            fc: 4.0,
            is_lightweight: false,
            fcs_factor: 1.0,
            stress_strain: ConcreteStressStrainType::ParametricMander,
            hysteresis: HysteresisType::Takeda,
            strain_at_fc: 0.002,
            ultimate_strain: 0.005,
            final_slope: -0.1,
            friction_angle: 0.0,
            dilatational_angle: 0.0,
        }
    }

    fn steel() -> SteelProperties {
        SteelProperties {
            fy: 50.0,
            fu: 65.0,
            expected_fy: 55.0,
            expected_fu: 71.5,
            stress_strain: SteelStressStrainType::ParametricSimple,
            hysteresis: HysteresisType::Kinematic,
            strain_at_hardening: 0.02,
            strain_at_max_stress: 0.1,
            strain_at_rupture: 0.2,
            final_slope: -0.1,
        }
    }

    #[test]
    fn test_add_material_returns_host_name() {
        let host = RecordingHost::new().on("PropMaterial.AddMaterial", |args| {
            if args[0] == Value::from("") {
                args[0] = Value::from("4000Psi");
            }
            0
        });
        let (recorded, materials) = materials_with(host);

        let name = materials
            .add_material(MaterialType::Concrete, "United States", "Customary", "f'c 4000 psi", None)
            .unwrap();
        assert_eq!(name, "4000Psi");

        let named = materials
            .add_material(MaterialType::Rebar, "United States", "ASTM A615", "Grade 60", Some("REBAR60"))
            .unwrap();
        assert_eq!(named, "REBAR60");

        let call = recorded.borrow().last_call("PropMaterial.AddMaterial").unwrap();
        assert_eq!(call.args[1], Value::Int(6));
    }

    #[test]
    fn test_add_material_without_reported_name_fails() {
        let err = materials()
            .add_material(MaterialType::Steel, "Europe", "EN 1993", "S355", None)
            .unwrap_err();
        assert_eq!(err.error_code(), "MARSHALLING");
    }

    #[test]
    fn test_masonry_needs_release_17() {
        let old = HostTarget::new(HostProduct::Sap2000, Version::new(16, 0, 0));
        let materials = MaterialProperties::new(Seed::new(RecordingHost::new(), old));
        let err = materials.set_material("CMU", MaterialType::Masonry, &Annotation::default()).unwrap_err();
        assert_eq!(err, ApiError::unsupported("MaterialType.Masonry", "SAP2000 v16.0.0"));
        assert_eq!(materials.count(Some(MaterialType::Masonry)).unwrap_err().error_code(), "UNSUPPORTED");
    }

    #[test]
    fn test_material_round_trip() {
        let materials = materials();
        let annotation = Annotation::with_notes("per S-001");
        materials.set_material("A992Fy50", MaterialType::Steel, &annotation).unwrap();
        assert_eq!(
            materials.get_material("A992Fy50").unwrap(),
            (MaterialType::Steel, annotation)
        );
    }

    #[test]
    fn test_isotropic_round_trip_and_shear_modulus() {
        let materials = materials();
        let concrete = IsotropicProperties {
            e: 3605.0,
            u: 0.2,
            a: 5.5e-6,
            temperature: 0.0,
        };
        materials.set_isotropic("4000Psi", &concrete).unwrap();
        let back = materials.get_isotropic("4000Psi").unwrap();
        assert_eq!(back, concrete);
        assert!((back.shear_modulus() - 3605.0 / 2.4).abs() < 1e-9);

        let rubber = IsotropicProperties { u: 0.5, ..concrete };
        assert!(materials.set_isotropic("X", &rubber).is_err());
        let void = IsotropicProperties { e: 0.0, ..concrete };
        assert!(materials.set_isotropic("X", &void).is_err());
    }

    #[test]
    fn test_weight_and_mass() {
        let (recorded, materials) = materials_with(RecordingHost::new());

        materials.set_weight_and_mass("4000Psi", WeightOrMass::Weight, 150.0).unwrap();
        let call = recorded.borrow().last_call("PropMaterial.SetWeightAndMass").unwrap();
        assert_eq!(call.args[1], Value::Int(1));
        assert!(materials.set_weight_and_mass("4000Psi", WeightOrMass::Mass, -1.0).is_err());

        recorded.borrow_mut().store(
            "PropMaterial.GetWeightAndMass",
            "4000Psi",
            vec![Value::Double(150.0), Value::Double(4.66)],
        );
        let wm = materials.get_weight_and_mass("4000Psi").unwrap();
        assert_eq!(wm.weight_per_volume, 150.0);
        assert_eq!(wm.mass_per_volume, 4.66);
    }

    #[test]
    fn test_damping_round_trip() {
        let materials = materials();
        let damping = MaterialDamping {
            modal_ratio: 0.02,
            viscous_stiffness: 0.001,
            ..MaterialDamping::default()
        };
        materials.set_damping("A992Fy50", &damping).unwrap();
        assert_eq!(materials.get_damping("A992Fy50").unwrap(), damping);
        let over = MaterialDamping { modal_ratio: 1.2, ..damping };
        assert!(materials.set_damping("A992Fy50", &over).is_err());
    }

    #[test]
    fn test_concrete_and_steel_round_trip() {
        let materials = materials();
        materials.set_concrete("4000Psi", &concrete()).unwrap();
        assert_eq!(materials.get_concrete("4000Psi").unwrap(), concrete());

        materials.set_steel("A992Fy50", &steel()).unwrap();
        assert_eq!(materials.get_steel("A992Fy50").unwrap(), steel());
    }

    #[test]
    fn test_concrete_and_steel_validation() {
        let materials = materials();
        let brittle = ConcreteProperties { ultimate_strain: 0.001, ..concrete() };
        assert!(materials.set_concrete("C", &brittle).is_err());

        let weak = SteelProperties { fu: 40.0, ..steel() };
        assert!(materials.set_steel("S", &weak).is_err());
        let shuffled = SteelProperties { strain_at_rupture: 0.05, ..steel() };
        assert!(materials.set_steel("S", &shuffled).is_err());
    }

    #[test]
    fn test_collection_with_type_filter() {
        let (recorded, materials) = materials_with(RecordingHost::new());
        materials.set_material("A992Fy50", MaterialType::Steel, &Annotation::default()).unwrap();
        materials.set_material("4000Psi", MaterialType::Concrete, &Annotation::default()).unwrap();

        assert_eq!(materials.count(None).unwrap(), 2);
        materials.name_list(Some(MaterialType::Steel)).unwrap();
        let call = recorded.borrow().last_call("PropMaterial.GetNameList").unwrap();
        assert_eq!(call.args[2], Value::Int(1));

        materials.change_name("4000Psi", "C28").unwrap();
        materials.delete("A992Fy50").unwrap();
        assert_eq!(materials.name_list(None).unwrap(), vec!["C28"]);
    }
}
