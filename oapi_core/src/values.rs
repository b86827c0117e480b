//! # Value Objects
//!
//! Small fixed-size records that the host exchanges as flat `double` arrays,
//! plus the colour and GUID encodings used by property definitions.
//!
//! ## Example
//!
//! ```rust
//! use oapi_core::values::{AreaModifiers, ValueVector};
//!
//! let modifiers = AreaModifiers { m11: 0.25, m22: 0.25, ..AreaModifiers::default() };
//! let wire = modifiers.to_vec();
//! assert_eq!(wire.len(), AreaModifiers::LEN);
//! assert_eq!(AreaModifiers::from_slice(&wire).unwrap(), modifiers);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};

/// A record marshalled as a fixed-length array of doubles.
pub trait ValueVector: Sized {
    /// Number of doubles on the wire
    const LEN: usize;

    /// Pack into wire order
    fn to_vec(&self) -> Vec<f64>;

    /// Unpack from wire order without checking the length
    fn from_exact(values: &[f64]) -> Self;

    /// Unpack from wire order, failing if the length is wrong
    fn from_slice(values: &[f64]) -> ApiResult<Self> {
        if values.len() != Self::LEN {
            return Err(ApiError::invalid_input(
                std::any::type_name::<Self>().rsplit("::").next().unwrap_or("values"),
                format!("{} values", values.len()),
                format!("expected exactly {} values", Self::LEN),
            ));
        }
        Ok(Self::from_exact(values))
    }
}

/// Stiffness, mass and weight modifiers of an area property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaModifiers {
    /// Membrane f11
    pub f11: f64,
    /// Membrane f22
    pub f22: f64,
    /// Membrane f12
    pub f12: f64,
    /// Bending m11
    pub m11: f64,
    /// Bending m22
    pub m22: f64,
    /// Bending m12
    pub m12: f64,
    /// Shear v13
    pub v13: f64,
    /// Shear v23
    pub v23: f64,
    pub mass: f64,
    pub weight: f64,
}

impl Default for AreaModifiers {
    fn default() -> Self {
        AreaModifiers {
            f11: 1.0,
            f22: 1.0,
            f12: 1.0,
            m11: 1.0,
            m22: 1.0,
            m12: 1.0,
            v13: 1.0,
            v23: 1.0,
            mass: 1.0,
            weight: 1.0,
        }
    }
}

impl ValueVector for AreaModifiers {
    const LEN: usize = 10;

    fn to_vec(&self) -> Vec<f64> {
        vec![
            self.f11, self.f22, self.f12, self.m11, self.m22, self.m12, self.v13, self.v23, self.mass,
            self.weight,
        ]
    }

    fn from_exact(v: &[f64]) -> Self {
        AreaModifiers {
            f11: v[0],
            f22: v[1],
            f12: v[2],
            m11: v[3],
            m22: v[4],
            m12: v[5],
            v13: v[6],
            v23: v[7],
            mass: v[8],
            weight: v[9],
        }
    }
}

/// Section property modifiers of a frame property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameModifiers {
    /// Cross-sectional area
    pub area: f64,
    /// Shear area in the local 2 direction
    pub shear_2: f64,
    /// Shear area in the local 3 direction
    pub shear_3: f64,
    /// Torsional constant
    pub torsion: f64,
    /// Moment of inertia about the local 2 axis
    pub i22: f64,
    /// Moment of inertia about the local 3 axis
    pub i33: f64,
    pub mass: f64,
    pub weight: f64,
}

impl Default for FrameModifiers {
    fn default() -> Self {
        FrameModifiers {
            area: 1.0,
            shear_2: 1.0,
            shear_3: 1.0,
            torsion: 1.0,
            i22: 1.0,
            i33: 1.0,
            mass: 1.0,
            weight: 1.0,
        }
    }
}

impl ValueVector for FrameModifiers {
    const LEN: usize = 8;

    fn to_vec(&self) -> Vec<f64> {
        vec![
            self.area, self.shear_2, self.shear_3, self.torsion, self.i22, self.i33, self.mass,
            self.weight,
        ]
    }

    fn from_exact(v: &[f64]) -> Self {
        FrameModifiers {
            area: v[0],
            shear_2: v[1],
            shear_3: v[2],
            torsion: v[3],
            i22: v[4],
            i33: v[5],
            mass: v[6],
            weight: v[7],
        }
    }
}

/// Material axis angles (degrees) relative to the element local axes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialAngles {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl MaterialAngles {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        MaterialAngles { a, b, c }
    }

    /// Whether the material axes coincide with the local axes
    pub fn is_aligned(&self) -> bool {
        self.a == 0.0 && self.b == 0.0 && self.c == 0.0
    }
}

impl ValueVector for MaterialAngles {
    const LEN: usize = 3;

    fn to_vec(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c]
    }

    fn from_exact(v: &[f64]) -> Self {
        MaterialAngles::new(v[0], v[1], v[2])
    }
}

/// Display colour in the host's integer encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub i32);

impl Color {
    /// Lets the host pick a colour
    pub const AUTO: Color = Color(-1);

    /// Build from red/green/blue components (host stores them as 0x00BBGGRR)
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(i32::from(red) | (i32::from(green) << 8) | (i32::from(blue) << 16))
    }

    /// Red/green/blue components, or `None` for [`Color::AUTO`]
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        if self.0 < 0 {
            return None;
        }
        let value = self.0;
        Some(((value & 0xFF) as u8, ((value >> 8) & 0xFF) as u8, ((value >> 16) & 0xFF) as u8))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::AUTO
    }
}

/// GUID text forwarded to the host; an empty string asks the host to assign one.
pub fn guid_to_text(guid: Option<Uuid>) -> String {
    guid.map(|g| g.to_string()).unwrap_or_default()
}

/// Parse GUID text returned by the host
pub fn guid_from_text(text: &str) -> ApiResult<Option<Uuid>> {
    let trimmed = text.trim().trim_start_matches('{').trim_end_matches('}');
    if trimmed.is_empty() {
        return Ok(None);
    }
    Uuid::parse_str(trimmed)
        .map(Some)
        .map_err(|e| ApiError::invalid_input("guid", text, e.to_string()))
}

/// Check that two parallel arrays have the same length before they are forwarded.
pub fn ensure_same_length<A, B>(first_name: &str, first: &[A], second_name: &str, second: &[B]) -> ApiResult<usize> {
    if first.len() != second.len() {
        return Err(ApiError::length_mismatch(first_name, first.len(), second_name, second.len()));
    }
    Ok(first.len())
}

/// Point count as the host's 32-bit integer
pub fn wire_count(count: usize) -> ApiResult<i32> {
    i32::try_from(count).map_err(|_| ApiError::invalid_input("count", count.to_string(), "exceeds the host's 32-bit limit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_count_range() {
        assert_eq!(wire_count(0).unwrap(), 0);
        assert_eq!(wire_count(i32::MAX as usize).unwrap(), i32::MAX);

        let err = wire_count(i32::MAX as usize + 1).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_area_modifiers_wire_order() {
        let modifiers = AreaModifiers {
            f11: 0.1,
            m22: 0.5,
            weight: 0.9,
            ..AreaModifiers::default()
        };
        let wire = modifiers.to_vec();
        assert_eq!(wire.len(), 10);
        assert_eq!(wire[0], 0.1);
        assert_eq!(wire[4], 0.5);
        assert_eq!(wire[9], 0.9);
        assert_eq!(AreaModifiers::from_slice(&wire).unwrap(), modifiers);
    }

    #[test]
    fn test_frame_modifiers_reject_wrong_length() {
        let err = FrameModifiers::from_slice(&[1.0; 6]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("FrameModifiers"));
    }

    #[test]
    fn test_material_angles() {
        let angles = MaterialAngles::from_slice(&[30.0, 0.0, 15.0]).unwrap();
        assert_eq!(angles, MaterialAngles::new(30.0, 0.0, 15.0));
        assert!(!angles.is_aligned());
        assert!(MaterialAngles::default().is_aligned());
        assert!(MaterialAngles::from_slice(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_color_components() {
        let color = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(color.0, 0x563412);
        assert_eq!(color.rgb(), Some((0x12, 0x34, 0x56)));
        assert_eq!(Color::AUTO.rgb(), None);
    }

    #[test]
    fn test_guid_text() {
        assert_eq!(guid_from_text("").unwrap(), None);
        let guid = Uuid::new_v4();
        assert_eq!(guid_from_text(&guid_to_text(Some(guid))).unwrap(), Some(guid));
        let braced = format!("{{{}}}", guid);
        assert_eq!(guid_from_text(&braced).unwrap(), Some(guid));
        assert!(guid_from_text("not-a-guid").is_err());
    }

    #[test]
    fn test_ensure_same_length() {
        assert_eq!(ensure_same_length("periods", &[1.0, 2.0], "values", &[3.0, 4.0]).unwrap(), 2);
        let err = ensure_same_length("periods", &[1.0], "values", &[3.0, 4.0]).unwrap_err();
        assert_eq!(err, ApiError::length_mismatch("periods", 1, "values", 2));
    }
}
