//! Area properties (`PropArea`): shells, plane elements and axisymmetric solids.

use serde::{Deserialize, Serialize};

use super::{annotate, out_annotation, positive_dimension, read_annotation, require_name, Annotation};
use crate::codes::{AreaPropertyType, PlaneType, ShellType};
use crate::collection::NamedCollection;
use crate::errors::{ApiError, ApiResult};
use crate::host::Seed;
use crate::values::{AreaModifiers, ValueVector};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellProperty {
    pub shell_type: ShellType,
    pub include_drilling_dof: bool,
    pub material: String,
    /// Material angle (degrees)
    pub material_angle: f64,
    /// Membrane thickness
    pub thickness: f64,
    pub bending_thickness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneProperty {
    pub plane_type: PlaneType,
    pub material: String,
    pub material_angle: f64,
    pub thickness: f64,
    pub incompatible_modes: bool,
}

/// Axisymmetric solid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsolidProperty {
    pub material: String,
    pub material_angle: f64,
    /// Arc angle (degrees); 0 means one radian
    pub arc_angle: f64,
    pub incompatible_modes: bool,
    /// Coordinate system whose Z axis is the axis of symmetry
    pub coordinate_system: String,
}

#[derive(Debug, Clone)]
pub struct AreaSection {
    seed: Seed,
}

impl NamedCollection for AreaSection {
    const GROUP: &'static str = "PropArea";

    fn seed(&self) -> &Seed {
        &self.seed
    }
}

impl AreaSection {
    pub fn new(seed: Seed) -> Self {
        AreaSection { seed }
    }

    pub fn set_shell(&self, name: &str, shell: &ShellProperty, annotation: &Annotation) -> ApiResult<()> {
        require_name("material", &shell.material)?;
        if shell.shell_type != ShellType::ShellLayered {
            positive_dimension("thickness", shell.thickness)?;
            positive_dimension("bending_thickness", shell.bending_thickness)?;
        }
        if shell.include_drilling_dof && !shell.shell_type.supports_drilling_dof() {
            return Err(ApiError::invalid_input(
                "include_drilling_dof",
                "true",
                format!("{} elements have no drilling degree of freedom", shell.shell_type),
            ));
        }

        let call = self
            .seed
            .call("PropArea.SetShell_1")
            .arg(name)
            .code(shell.shell_type)
            .arg(shell.include_drilling_dof)
            .arg(shell.material.as_str())
            .arg(shell.material_angle)
            .arg(shell.thickness)
            .arg(shell.bending_thickness);
        annotate(call, annotation).invoke()?;
        Ok(())
    }

    pub fn get_shell(&self, name: &str) -> ApiResult<(ShellProperty, Annotation)> {
        let call = self
            .seed
            .call("PropArea.GetShell_1")
            .arg(name)
            .out_int()
            .out_bool()
            .out_text()
            .out_double_n(3);
        let reply = out_annotation(call).invoke()?;
        let shell = ShellProperty {
            shell_type: reply.code(1)?,
            include_drilling_dof: reply.boolean(2)?,
            material: reply.text(3)?,
            material_angle: reply.double(4)?,
            thickness: reply.double(5)?,
            bending_thickness: reply.double(6)?,
        };
        Ok((shell, read_annotation(&reply, 7)?))
    }

    pub fn set_plane(&self, name: &str, plane: &PlaneProperty, annotation: &Annotation) -> ApiResult<()> {
        require_name("material", &plane.material)?;
        positive_dimension("thickness", plane.thickness)?;
        let call = self
            .seed
            .call("PropArea.SetPlane")
            .arg(name)
            .code(plane.plane_type)
            .arg(plane.material.as_str())
            .arg(plane.material_angle)
            .arg(plane.thickness)
            .arg(plane.incompatible_modes);
        annotate(call, annotation).invoke()?;
        Ok(())
    }

    pub fn get_plane(&self, name: &str) -> ApiResult<(PlaneProperty, Annotation)> {
        let call = self
            .seed
            .call("PropArea.GetPlane")
            .arg(name)
            .out_int()
            .out_text()
            .out_double_n(2)
            .out_bool();
        let reply = out_annotation(call).invoke()?;
        let plane = PlaneProperty {
            plane_type: reply.code(1)?,
            material: reply.text(2)?,
            material_angle: reply.double(3)?,
            thickness: reply.double(4)?,
            incompatible_modes: reply.boolean(5)?,
        };
        Ok((plane, read_annotation(&reply, 6)?))
    }

    /// Only offered by SAP2000 and CSiBridge
    pub fn set_asolid(&self, name: &str, asolid: &AsolidProperty, annotation: &Annotation) -> ApiResult<()> {
        require_name("material", &asolid.material)?;
        if !(0.0..=360.0).contains(&asolid.arc_angle) {
            return Err(ApiError::invalid_input(
                "arc_angle",
                asolid.arc_angle.to_string(),
                "must lie between 0 and 360 degrees",
            ));
        }
        let call = self
            .seed
            .call("PropArea.SetASolid")
            .arg(name)
            .arg(asolid.material.as_str())
            .arg(asolid.material_angle)
            .arg(asolid.arc_angle)
            .arg(asolid.incompatible_modes)
            .arg(asolid.coordinate_system.as_str());
        annotate(call, annotation).invoke()?;
        Ok(())
    }

    pub fn get_asolid(&self, name: &str) -> ApiResult<(AsolidProperty, Annotation)> {
        let call = self
            .seed
            .call("PropArea.GetASolid")
            .arg(name)
            .out_text()
            .out_double_n(2)
            .out_bool()
            .out_text();
        let reply = out_annotation(call).invoke()?;
        let asolid = AsolidProperty {
            material: reply.text(1)?,
            material_angle: reply.double(2)?,
            arc_angle: reply.double(3)?,
            incompatible_modes: reply.boolean(4)?,
            coordinate_system: reply.text(5)?,
        };
        Ok((asolid, read_annotation(&reply, 6)?))
    }

    pub fn set_modifiers(&self, name: &str, modifiers: &AreaModifiers) -> ApiResult<()> {
        self.seed
            .call("PropArea.SetModifiers")
            .arg(name)
            .arg(modifiers.to_vec())
            .invoke()?;
        Ok(())
    }

    pub fn get_modifiers(&self, name: &str) -> ApiResult<AreaModifiers> {
        self.seed
            .call("PropArea.GetModifiers")
            .arg(name)
            .out_doubles()
            .invoke()?
            .vector(1)
    }

    pub fn property_type(&self, name: &str) -> ApiResult<AreaPropertyType> {
        self.seed
            .call("PropArea.GetTypeOAPI")
            .arg(name)
            .out_int()
            .invoke()?
            .code(1)
    }
}
