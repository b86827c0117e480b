//! # Section Properties
//!
//! Area (`PropArea`), frame (`PropFrame`) and solid (`PropSolid`) property
//! definitions. Every property carries the same display colour, notes and
//! GUID trailer, modelled here as [`Annotation`].
//!
//! ## Example
//!
//! ```rust
//! use oapi_core::capabilities::HostTarget;
//! use oapi_core::host::{RecordingHost, Seed};
//! use oapi_core::sections::{Annotation, FrameSection, RectangleSection};
//! use oapi_core::values::FrameModifiers;
//!
//! let frames = FrameSection::new(Seed::new(RecordingHost::new(), HostTarget::default()));
//! let beam = RectangleSection { material: "4000Psi".into(), depth: 24.0, width: 12.0 };
//! frames.set_rectangle("B24x12", &beam, &Annotation::default()).unwrap();
//!
//! let cracked = FrameModifiers { i33: 0.35, i22: 0.35, ..FrameModifiers::default() };
//! frames.set_modifiers("B24x12", &cracked).unwrap();
//! assert_eq!(frames.get_modifiers("B24x12").unwrap(), cracked);
//! ```

pub mod area;
pub mod frame;
pub mod solid;

pub use area::{AreaSection, AsolidProperty, PlaneProperty, ShellProperty};
pub use frame::{CircleSection, FrameSection, ISection, PipeSection, RectangleSection};
pub use solid::{SolidProperty, SolidSection};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};
use crate::host::{HostCall, Reply};
use crate::values::{guid_to_text, Color};

/// Display colour, notes and GUID of a property definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub color: Color,
    pub notes: String,
    /// `None` lets the host assign one
    pub guid: Option<Uuid>,
}

impl Annotation {
    pub fn with_notes(notes: impl Into<String>) -> Self {
        Annotation {
            notes: notes.into(),
            ..Annotation::default()
        }
    }
}

/// Append the colour/notes/GUID trailer
pub(crate) fn annotate<'s>(call: HostCall<'s>, annotation: &Annotation) -> HostCall<'s> {
    call.arg(annotation.color.0)
        .arg(annotation.notes.as_str())
        .arg(guid_to_text(annotation.guid))
}

/// Append output slots for the colour/notes/GUID trailer
pub(crate) fn out_annotation(call: HostCall<'_>) -> HostCall<'_> {
    call.out_int().out_text().out_text()
}

/// Read the trailer starting at `index`
pub(crate) fn read_annotation(reply: &Reply, index: usize) -> ApiResult<Annotation> {
    Ok(Annotation {
        color: Color(reply.int(index)?),
        notes: reply.text(index + 1)?,
        guid: reply.guid(index + 2)?,
    })
}

pub(crate) fn positive_dimension(field: &str, value: f64) -> ApiResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ApiError::invalid_input(field, value.to_string(), "dimension must be positive"))
    }
}

pub(crate) fn require_name(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::invalid_input(field, value, "must not be empty"));
    }
    Ok(())
}
