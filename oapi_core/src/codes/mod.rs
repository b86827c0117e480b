//! # Host Code Tables
//!
//! The host exchanges enumerations as raw integers. Each enum here carries
//! an explicit table of the exact wire values the host expects. Some tables
//! are 0-based, most are 1-based, and a few skip values, so nothing is ever
//! derived from a variant's position.
//!
//! ## Example
//!
//! ```rust
//! use oapi_core::codes::{HostCode, SiteClassAashto2007};
//!
//! assert_eq!(SiteClassAashto2007::F.to_code(), 6);
//! assert_eq!(SiteClassAashto2007::from_code(6).unwrap(), SiteClassAashto2007::F);
//! assert!(SiteClassAashto2007::from_code(0).is_err());
//! ```

pub mod functions;
pub mod model;
pub mod seismic;

pub use functions::{FrequencyUnits, FunctionType, SpectrumFileValueType, TimeHistoryFileFormat};
pub use model::{
    AreaPropertyType, ConcreteStressStrainType, FramePropType, HysteresisType, LoadPatternType,
    MaterialType, PlaneType, ShellType, SteelStressStrainType, Units, WeightOrMass,
};
pub use seismic::{
    DesignGroupChinese2010, Eurocode8Country, Eurocode8GroundType, Eurocode8SpectrumType,
    SeismicCoefficientOption, SeismicIntensityChinese2010, SiteClassAashto2007, SiteClassAsce7,
    SiteClassChinese2010, SiteClassNzs1170, SpectrumDirection,
};

use crate::errors::{ApiError, ApiResult};

/// A closed enumeration with a fixed integer encoding on the host side.
pub trait HostCode: Sized + Copy + PartialEq + 'static {
    /// Enum name used in error messages and capability keys
    const NAME: &'static str;

    /// Every member paired with its wire value
    const TABLE: &'static [(Self, i32)];

    /// Wire value forwarded to the host
    fn to_code(self) -> i32;

    /// Member name as written in the table
    fn name(self) -> &'static str;

    /// Translate a wire value received from the host
    fn from_code(code: i32) -> ApiResult<Self> {
        Self::TABLE
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(member, _)| *member)
            .ok_or_else(|| ApiError::unknown_code(Self::NAME, code))
    }

    /// Translate a wire value the host reports as a double.
    ///
    /// Only integral values inside the `i32` range are accepted.
    fn from_code_f64(code: f64) -> ApiResult<Self> {
        if !code.is_finite() || code.fract() != 0.0 || code < i32::MIN as f64 || code > i32::MAX as f64 {
            return Err(ApiError::unknown_code(Self::NAME, code));
        }
        Self::from_code(code as i32)
    }

    /// Key used by the capability table for this member, e.g. `MaterialType.Masonry`
    fn capability_key(self) -> String {
        format!("{}.{}", Self::NAME, self.name())
    }

    /// All members in table order
    fn all() -> Vec<Self> {
        Self::TABLE.iter().map(|(member, _)| *member).collect()
    }
}

/// Wire value for an optional filter where the host reads `0` as "all".
pub fn code_or_all<C: HostCode>(filter: Option<C>) -> i32 {
    filter.map_or(0, HostCode::to_code)
}

/// Declares an enum together with its explicit host code table.
macro_rules! host_codes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::codes::HostCode for $name {
            const NAME: &'static str = stringify!($name);
            const TABLE: &'static [(Self, i32)] = &[$(($name::$variant, $code)),+];

            fn to_code(self) -> i32 {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", $crate::codes::HostCode::name(*self))
            }
        }
    };
}

pub(crate) use host_codes;

/// Summary of one code table, used for dumps and documentation
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CodeTable {
    pub name: &'static str,
    pub entries: Vec<(&'static str, i32)>,
}

impl CodeTable {
    /// Build the summary for one enum
    pub fn of<C: HostCode>() -> Self {
        CodeTable {
            name: C::NAME,
            entries: C::TABLE.iter().map(|(member, code)| (member.name(), *code)).collect(),
        }
    }
}

/// Every code table the bindings know about
pub fn all_tables() -> Vec<CodeTable> {
    vec![
        CodeTable::of::<SeismicCoefficientOption>(),
        CodeTable::of::<SiteClassAashto2007>(),
        CodeTable::of::<SiteClassAsce7>(),
        CodeTable::of::<SiteClassNzs1170>(),
        CodeTable::of::<Eurocode8Country>(),
        CodeTable::of::<Eurocode8GroundType>(),
        CodeTable::of::<Eurocode8SpectrumType>(),
        CodeTable::of::<SpectrumDirection>(),
        CodeTable::of::<SeismicIntensityChinese2010>(),
        CodeTable::of::<SiteClassChinese2010>(),
        CodeTable::of::<DesignGroupChinese2010>(),
        CodeTable::of::<FunctionType>(),
        CodeTable::of::<SpectrumFileValueType>(),
        CodeTable::of::<TimeHistoryFileFormat>(),
        CodeTable::of::<FrequencyUnits>(),
        CodeTable::of::<Units>(),
        CodeTable::of::<MaterialType>(),
        CodeTable::of::<ShellType>(),
        CodeTable::of::<PlaneType>(),
        CodeTable::of::<AreaPropertyType>(),
        CodeTable::of::<FramePropType>(),
        CodeTable::of::<LoadPatternType>(),
        CodeTable::of::<ConcreteStressStrainType>(),
        CodeTable::of::<SteelStressStrainType>(),
        CodeTable::of::<HysteresisType>(),
        CodeTable::of::<WeightOrMass>(),
    ]
}
