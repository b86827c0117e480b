//! Frame section properties (`PropFrame`).

use serde::{Deserialize, Serialize};

use super::{annotate, out_annotation, positive_dimension, read_annotation, require_name, Annotation};
use crate::codes::FramePropType;
use crate::collection::NamedCollection;
use crate::errors::{ApiError, ApiResult};
use crate::host::Seed;
use crate::values::{FrameModifiers, ValueVector};

/// Solid rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleSection {
    pub material: String,
    /// Depth t3
    pub depth: f64,
    /// Width t2
    pub width: f64,
}

/// Solid circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleSection {
    pub material: String,
    pub diameter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSection {
    pub material: String,
    pub outside_diameter: f64,
    pub wall_thickness: f64,
}

/// Welded or rolled I shape with possibly unequal flanges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ISection {
    pub material: String,
    pub depth: f64,
    pub top_flange_width: f64,
    pub top_flange_thickness: f64,
    pub web_thickness: f64,
    pub bottom_flange_width: f64,
    pub bottom_flange_thickness: f64,
}

impl ISection {
    /// Equal top and bottom flanges
    pub fn symmetric(material: impl Into<String>, depth: f64, flange_width: f64, flange_thickness: f64, web_thickness: f64) -> Self {
        ISection {
            material: material.into(),
            depth,
            top_flange_width: flange_width,
            top_flange_thickness: flange_thickness,
            web_thickness,
            bottom_flange_width: flange_width,
            bottom_flange_thickness: flange_thickness,
        }
    }

    fn validate(&self) -> ApiResult<()> {
        require_name("material", &self.material)?;
        positive_dimension("depth", self.depth)?;
        positive_dimension("top_flange_width", self.top_flange_width)?;
        positive_dimension("top_flange_thickness", self.top_flange_thickness)?;
        positive_dimension("web_thickness", self.web_thickness)?;
        positive_dimension("bottom_flange_width", self.bottom_flange_width)?;
        positive_dimension("bottom_flange_thickness", self.bottom_flange_thickness)?;
        if self.top_flange_thickness + self.bottom_flange_thickness >= self.depth {
            return Err(ApiError::invalid_input(
                "depth",
                self.depth.to_string(),
                "flanges leave no room for the web",
            ));
        }
        let narrowest = self.top_flange_width.min(self.bottom_flange_width);
        if self.web_thickness > narrowest {
            return Err(ApiError::invalid_input(
                "web_thickness",
                self.web_thickness.to_string(),
                "web is wider than a flange",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FrameSection {
    seed: Seed,
}

impl NamedCollection for FrameSection {
    const GROUP: &'static str = "PropFrame";

    fn seed(&self) -> &Seed {
        &self.seed
    }
}

impl FrameSection {
    pub fn new(seed: Seed) -> Self {
        FrameSection { seed }
    }

    pub fn set_rectangle(&self, name: &str, section: &RectangleSection, annotation: &Annotation) -> ApiResult<()> {
        require_name("material", &section.material)?;
        positive_dimension("depth", section.depth)?;
        positive_dimension("width", section.width)?;
        let call = self
            .seed
            .call("PropFrame.SetRectangle")
            .arg(name)
            .arg(section.material.as_str())
            .arg(section.depth)
            .arg(section.width);
        annotate(call, annotation).invoke()?;
        Ok(())
    }

    pub fn get_rectangle(&self, name: &str) -> ApiResult<(RectangleSection, Annotation)> {
        let call = self
            .seed
            .call("PropFrame.GetRectangle")
            .arg(name)
            .out_text()
            .out_double_n(2);
        let reply = out_annotation(call).invoke()?;
        let section = RectangleSection {
            material: reply.text(1)?,
            depth: reply.double(2)?,
            width: reply.double(3)?,
        };
        Ok((section, read_annotation(&reply, 4)?))
    }

    pub fn set_circle(&self, name: &str, section: &CircleSection, annotation: &Annotation) -> ApiResult<()> {
        require_name("material", &section.material)?;
        positive_dimension("diameter", section.diameter)?;
        let call = self
            .seed
            .call("PropFrame.SetCircle")
            .arg(name)
            .arg(section.material.as_str())
            .arg(section.diameter);
        annotate(call, annotation).invoke()?;
        Ok(())
    }

    pub fn get_circle(&self, name: &str) -> ApiResult<(CircleSection, Annotation)> {
        let call = self
            .seed
            .call("PropFrame.GetCircle")
            .arg(name)
            .out_text()
            .out_double();
        let reply = out_annotation(call).invoke()?;
        let section = CircleSection {
            material: reply.text(1)?,
            diameter: reply.double(2)?,
        };
        Ok((section, read_annotation(&reply, 3)?))
    }

    pub fn set_pipe(&self, name: &str, section: &PipeSection, annotation: &Annotation) -> ApiResult<()> {
        require_name("material", &section.material)?;
        positive_dimension("outside_diameter", section.outside_diameter)?;
        positive_dimension("wall_thickness", section.wall_thickness)?;
        if 2.0 * section.wall_thickness >= section.outside_diameter {
            return Err(ApiError::invalid_input(
                "wall_thickness",
                section.wall_thickness.to_string(),
                format!("must be less than half the outside diameter {}", section.outside_diameter),
            ));
        }
        let call = self
            .seed
            .call("PropFrame.SetPipe")
            .arg(name)
            .arg(section.material.as_str())
            .arg(section.outside_diameter)
            .arg(section.wall_thickness);
        annotate(call, annotation).invoke()?;
        Ok(())
    }

    pub fn get_pipe(&self, name: &str) -> ApiResult<(PipeSection, Annotation)> {
        let call = self
            .seed
            .call("PropFrame.GetPipe")
            .arg(name)
            .out_text()
            .out_double_n(2);
        let reply = out_annotation(call).invoke()?;
        let section = PipeSection {
            material: reply.text(1)?,
            outside_diameter: reply.double(2)?,
            wall_thickness: reply.double(3)?,
        };
        Ok((section, read_annotation(&reply, 4)?))
    }

    pub fn set_i_section(&self, name: &str, section: &ISection, annotation: &Annotation) -> ApiResult<()> {
        section.validate()?;
        let call = self
            .seed
            .call("PropFrame.SetISection")
            .arg(name)
            .arg(section.material.as_str())
            .arg(section.depth)
            .arg(section.top_flange_width)
            .arg(section.top_flange_thickness)
            .arg(section.web_thickness)
            .arg(section.bottom_flange_width)
            .arg(section.bottom_flange_thickness);
        annotate(call, annotation).invoke()?;
        Ok(())
    }

    pub fn get_i_section(&self, name: &str) -> ApiResult<(ISection, Annotation)> {
        let call = self
            .seed
            .call("PropFrame.GetISection")
            .arg(name)
            .out_text()
            .out_double_n(6);
        let reply = out_annotation(call).invoke()?;
        let section = ISection {
            material: reply.text(1)?,
            depth: reply.double(2)?,
            top_flange_width: reply.double(3)?,
            top_flange_thickness: reply.double(4)?,
            web_thickness: reply.double(5)?,
            bottom_flange_width: reply.double(6)?,
            bottom_flange_thickness: reply.double(7)?,
        };
        Ok((section, read_annotation(&reply, 8)?))
    }

    pub fn set_modifiers(&self, name: &str, modifiers: &FrameModifiers) -> ApiResult<()> {
        self.seed
            .call("PropFrame.SetModifiers")
            .arg(name)
            .arg(modifiers.to_vec())
            .invoke()?;
        Ok(())
    }

    pub fn get_modifiers(&self, name: &str) -> ApiResult<FrameModifiers> {
        self.seed
            .call("PropFrame.GetModifiers")
            .arg(name)
            .out_doubles()
            .invoke()?
            .vector(1)
    }

    pub fn property_type(&self, name: &str) -> ApiResult<FramePropType> {
        self.seed
            .call("PropFrame.GetTypeOAPI")
            .arg(name)
            .out_int()
            .invoke()?
            .code(1)
    }
}
