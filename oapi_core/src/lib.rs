//! # oapi_core - Typed Bindings for a Structural-Analysis Automation Host
//!
//! `oapi_core` wraps the late-bound automation model of a structural-analysis
//! application (SAP2000, CSiBridge, ETABS) in a typed Rust surface. Each
//! wrapper covers one group of host calls and follows the same
//! call-and-check convention: typed arguments in, enum codes translated at
//! the boundary, one host call, nonzero status turned into an [`ApiError`].
//!
//! ## Design Philosophy
//!
//! - **Explicit handle**: every wrapper is built from a [`Seed`]; there is no global session
//! - **Codes in tables**: every enum keeps the host's exact integer encoding
//! - **Capabilities as data**: product/version availability lives in a [`CapabilityTable`]
//! - **Rich Errors**: the host status code travels inside the error
//!
//! ## Quick Start
//!
//! ```rust
//! use oapi_core::capabilities::HostTarget;
//! use oapi_core::host::{RecordingHost, Seed};
//! use oapi_core::model::Model;
//!
//! let model = Model::new(Seed::new(RecordingHost::new(), HostTarget::default()));
//! let spectra = model.response_spectrum();
//! spectra.set_user("RS-1", &[0.0, 1.0, 2.0], &[0.4, 0.3, 0.1], 0.05).unwrap();
//!
//! let (points, _) = spectra.get_user("RS-1").unwrap();
//! assert_eq!(points.len(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`host`] - Host seam, session handle and the call-and-check convention
//! - [`codes`] - Enum/code translation tables
//! - [`values`] - Modifier vectors, material angles, colours and GUIDs
//! - [`capabilities`] - Product/version availability of operations and enum members
//! - [`config`] - Client configuration (TOML or JSON)
//! - [`functions`] - Response-spectrum, time-history, steady-state and PSD functions
//! - [`sections`] - Area, frame and solid properties
//! - [`materials`] - Material properties
//! - [`load_patterns`] - Load patterns
//! - [`model`] - Root facade over one session
//! - [`errors`] - Structured error types

pub mod capabilities;
pub mod codes;
pub mod collection;
pub mod config;
pub mod errors;
pub mod functions;
pub mod host;
pub mod load_patterns;
pub mod materials;
pub mod model;
pub mod sections;
pub mod values;

// Re-export commonly used types at crate root for convenience
pub use capabilities::{CapabilityTable, HostProduct, HostTarget};
pub use codes::HostCode;
pub use collection::NamedCollection;
pub use config::ClientConfig;
pub use errors::{ApiError, ApiResult};
pub use host::{Host, RecordingHost, Seed, Value};
pub use model::Model;
pub use values::{AreaModifiers, FrameModifiers, MaterialAngles, ValueVector};
