//! # Host Seam
//!
//! The analysis application is opaque. Everything the bindings need from it
//! is one late-bound entry point: invoke a named operation with a list of
//! argument slots, get back a status code, and read by-reference outputs
//! from the same slots.
//!
//! ```text
//! wrapper method ──► HostCall (typed args, enum → code)
//!                       │ capability check
//!                       ▼
//!                 Host::invoke(operation, &mut [Value]) -> status
//!                       │ status != 0 → ApiError::HostCallFailed
//!                       ▼
//!                 Reply (outputs, code → enum)
//! ```
//!
//! A [`Seed`] is the one shared handle every wrapper is constructed with.
//! It is deliberately `!Send`: automation hosts are bound to the thread
//! that created them.

pub mod call;
pub mod recording;

pub use call::{is_success, HostCall, Reply};
pub use recording::{CallRecord, RecordingHost};

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::capabilities::{CapabilityTable, HostTarget};

/// One marshalled argument slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Bool(bool),
    Int(i32),
    Double(f64),
    Text(String),
    BoolArray(Vec<bool>),
    IntArray(Vec<i32>),
    DoubleArray(Vec<f64>),
    TextArray(Vec<String>),
}

impl Value {
    /// Kind name used in marshalling errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Text(_) => "text",
            Value::BoolArray(_) => "bool[]",
            Value::IntArray(_) => "int[]",
            Value::DoubleArray(_) => "double[]",
            Value::TextArray(_) => "text[]",
        }
    }

    /// Whether `other` can be written into this slot
    pub fn same_kind(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<bool>> for Value {
    fn from(v: Vec<bool>) -> Self {
        Value::BoolArray(v)
    }
}

impl From<Vec<i32>> for Value {
    fn from(v: Vec<i32>) -> Self {
        Value::IntArray(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::DoubleArray(v)
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Value::DoubleArray(v.to_vec())
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::TextArray(v)
    }
}

/// The host automation entry point.
pub trait Host {
    /// Invoke `operation`, writing by-reference outputs back into `args`.
    ///
    /// Returns the host status code; `0` is success.
    fn invoke(&mut self, operation: &str, args: &mut [Value]) -> i32;

    /// Text describing the most recent failure, if the host keeps one
    fn last_error(&self) -> Option<String> {
        None
    }
}

/// Shared handle to a live host session.
///
/// Cloning is cheap and every clone talks to the same host.
#[derive(Clone)]
pub struct Seed {
    host: Rc<RefCell<dyn Host>>,
    target: HostTarget,
    capabilities: Rc<CapabilityTable>,
}

impl Seed {
    /// Wrap a host using the builtin capability table
    pub fn new<H: Host + 'static>(host: H, target: HostTarget) -> Self {
        Seed::from_shared(Rc::new(RefCell::new(host)), target)
    }

    /// Wrap a host the caller keeps its own reference to
    pub fn from_shared(host: Rc<RefCell<dyn Host>>, target: HostTarget) -> Self {
        Seed {
            host,
            target,
            capabilities: Rc::new(CapabilityTable::builtin().clone()),
        }
    }

    /// Replace the capability table
    pub fn with_capabilities(mut self, capabilities: CapabilityTable) -> Self {
        self.capabilities = Rc::new(capabilities);
        self
    }

    pub fn target(&self) -> &HostTarget {
        &self.target
    }

    pub fn capabilities(&self) -> &CapabilityTable {
        &self.capabilities
    }

    /// Start building a call to `operation`
    pub fn call(&self, operation: impl Into<String>) -> HostCall<'_> {
        HostCall::new(self, operation.into())
    }

    pub(crate) fn host(&self) -> &RefCell<dyn Host> {
        &self.host
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed")
            .field("target", &self.target)
            .field("capability_rules", &self.capabilities.rules().len())
            .finish()
    }
}
