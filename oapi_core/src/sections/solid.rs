//! Solid properties (`PropSolid`). Only SAP2000 and CSiBridge offer them.

use serde::{Deserialize, Serialize};

use super::{annotate, out_annotation, read_annotation, require_name, Annotation};
use crate::collection::NamedCollection;
use crate::errors::ApiResult;
use crate::host::Seed;
use crate::values::MaterialAngles;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidProperty {
    pub material: String,
    pub angles: MaterialAngles,
    pub incompatible_modes: bool,
}

#[derive(Debug, Clone)]
pub struct SolidSection {
    seed: Seed,
}

impl NamedCollection for SolidSection {
    const GROUP: &'static str = "PropSolid";

    fn seed(&self) -> &Seed {
        &self.seed
    }
}

impl SolidSection {
    pub fn new(seed: Seed) -> Self {
        SolidSection { seed }
    }

    pub fn set_properties(&self, name: &str, solid: &SolidProperty, annotation: &Annotation) -> ApiResult<()> {
        require_name("material", &solid.material)?;
        let call = self
            .seed
            .call("PropSolid.SetProp")
            .arg(name)
            .arg(solid.material.as_str())
            .arg(solid.angles.a)
            .arg(solid.angles.b)
            .arg(solid.angles.c)
            .arg(solid.incompatible_modes);
        annotate(call, annotation).invoke()?;
        Ok(())
    }

    pub fn get_properties(&self, name: &str) -> ApiResult<(SolidProperty, Annotation)> {
        let call = self
            .seed
            .call("PropSolid.GetProp")
            .arg(name)
            .out_text()
            .out_double_n(3)
            .out_bool();
        let reply = out_annotation(call).invoke()?;
        let solid = SolidProperty {
            material: reply.text(1)?,
            angles: MaterialAngles::new(reply.double(2)?, reply.double(3)?, reply.double(4)?),
            incompatible_modes: reply.boolean(5)?,
        };
        Ok((solid, read_annotation(&reply, 6)?))
    }
}
