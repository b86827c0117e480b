//! The call-and-check convention shared by every wrapper method.
//!
//! ```rust
//! use oapi_core::capabilities::HostTarget;
//! use oapi_core::host::{RecordingHost, Seed};
//!
//! let seed = Seed::new(RecordingHost::new().fail("Func.Delete", 3), HostTarget::default());
//! let err = seed.call("Func.Delete").arg("RS-1").invoke().unwrap_err();
//! assert_eq!(err.status(), Some(3));
//! ```

use tracing::{debug, trace};
use uuid::Uuid;

use super::{Seed, Value};
use crate::codes::HostCode;
use crate::errors::{ApiError, ApiResult};
use crate::values::{guid_from_text, ValueVector};

/// Whether a host status code means success. Only `0` does.
pub fn is_success(status: i32) -> bool {
    status == 0
}

/// Builder for a single host operation
#[must_use = "a HostCall does nothing until invoked"]
pub struct HostCall<'s> {
    seed: &'s Seed,
    operation: String,
    args: Vec<Value>,
    members: Vec<String>,
}

impl<'s> HostCall<'s> {
    pub(crate) fn new(seed: &'s Seed, operation: String) -> Self {
        HostCall {
            seed,
            operation,
            args: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Append an input argument
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append an enum argument in its host encoding
    pub fn code<C: HostCode>(mut self, code: C) -> Self {
        self.members.push(code.capability_key());
        self.arg(code.to_code())
    }

    /// Append an optional enum filter, forwarding `0` for "all"
    pub fn code_or_all<C: HostCode>(self, code: Option<C>) -> Self {
        match code {
            Some(code) => self.code(code),
            None => self.arg(0),
        }
    }

    pub fn out_bool(self) -> Self {
        self.arg(Value::Bool(false))
    }

    pub fn out_int(self) -> Self {
        self.arg(Value::Int(0))
    }

    pub fn out_double(self) -> Self {
        self.arg(Value::Double(0.0))
    }

    pub fn out_text(self) -> Self {
        self.arg(Value::Text(String::new()))
    }

    pub fn out_ints(self) -> Self {
        self.arg(Value::IntArray(Vec::new()))
    }

    pub fn out_doubles(self) -> Self {
        self.arg(Value::DoubleArray(Vec::new()))
    }

    pub fn out_texts(self) -> Self {
        self.arg(Value::TextArray(Vec::new()))
    }

    /// Append `n` double output slots
    pub fn out_double_n(mut self, n: usize) -> Self {
        for _ in 0..n {
            self = self.out_double();
        }
        self
    }

    /// Check availability, invoke the host and turn a nonzero status into an error
    pub fn invoke(mut self) -> ApiResult<Reply> {
        let target = self.seed.target();
        let capabilities = self.seed.capabilities();
        for key in std::iter::once(&self.operation).chain(self.members.iter()) {
            if let Err(err) = capabilities.check(key, target) {
                debug!(operation = %self.operation, key = %key, host = %target, "rejected by capability table");
                return Err(err);
            }
        }

        let mut host = self
            .seed
            .host()
            .try_borrow_mut()
            .map_err(|_| ApiError::HostBusy {
                operation: self.operation.clone(),
            })?;

        trace!(operation = %self.operation, args = self.args.len(), "invoking host operation");
        let status = host.invoke(&self.operation, &mut self.args);
        if !is_success(status) {
            let message = host.last_error();
            debug!(operation = %self.operation, status, "host operation failed");
            return Err(ApiError::host_call_failed(self.operation, status, message));
        }

        Ok(Reply {
            operation: self.operation,
            args: self.args,
        })
    }
}

/// Argument slots after a successful call, read back by position
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    operation: String,
    args: Vec<Value>,
}

impl Reply {
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn values(&self) -> &[Value] {
        &self.args
    }

    fn slot(&self, index: usize) -> ApiResult<&Value> {
        self.args.get(index).ok_or_else(|| {
            ApiError::marshalling(&self.operation, format!("no argument slot {}", index))
        })
    }

    fn wrong_kind(&self, index: usize, expected: &str, found: &Value) -> ApiError {
        ApiError::marshalling(
            &self.operation,
            format!("slot {} holds {} but {} was expected", index, found.kind(), expected),
        )
    }

    pub fn boolean(&self, index: usize) -> ApiResult<bool> {
        match self.slot(index)? {
            Value::Bool(v) => Ok(*v),
            other => Err(self.wrong_kind(index, "bool", other)),
        }
    }

    pub fn int(&self, index: usize) -> ApiResult<i32> {
        match self.slot(index)? {
            Value::Int(v) => Ok(*v),
            other => Err(self.wrong_kind(index, "int", other)),
        }
    }

    pub fn double(&self, index: usize) -> ApiResult<f64> {
        match self.slot(index)? {
            Value::Double(v) => Ok(*v),
            other => Err(self.wrong_kind(index, "double", other)),
        }
    }

    pub fn text(&self, index: usize) -> ApiResult<String> {
        match self.slot(index)? {
            Value::Text(v) => Ok(v.clone()),
            other => Err(self.wrong_kind(index, "text", other)),
        }
    }

    pub fn bools(&self, index: usize) -> ApiResult<Vec<bool>> {
        match self.slot(index)? {
            Value::BoolArray(v) => Ok(v.clone()),
            other => Err(self.wrong_kind(index, "bool[]", other)),
        }
    }

    pub fn ints(&self, index: usize) -> ApiResult<Vec<i32>> {
        match self.slot(index)? {
            Value::IntArray(v) => Ok(v.clone()),
            other => Err(self.wrong_kind(index, "int[]", other)),
        }
    }

    pub fn doubles(&self, index: usize) -> ApiResult<Vec<f64>> {
        match self.slot(index)? {
            Value::DoubleArray(v) => Ok(v.clone()),
            other => Err(self.wrong_kind(index, "double[]", other)),
        }
    }

    pub fn texts(&self, index: usize) -> ApiResult<Vec<String>> {
        match self.slot(index)? {
            Value::TextArray(v) => Ok(v.clone()),
            other => Err(self.wrong_kind(index, "text[]", other)),
        }
    }

    /// Non-negative item count
    pub fn count(&self, index: usize) -> ApiResult<usize> {
        let value = self.int(index)?;
        usize::try_from(value).map_err(|_| {
            ApiError::marshalling(&self.operation, format!("negative count {} in slot {}", value, index))
        })
    }

    /// Enum output received as an integer code
    pub fn code<C: HostCode>(&self, index: usize) -> ApiResult<C> {
        C::from_code(self.int(index)?)
    }

    /// Enum output received as a double
    pub fn code_f64<C: HostCode>(&self, index: usize) -> ApiResult<C> {
        C::from_code_f64(self.double(index)?)
    }

    /// GUID output; an empty string reads as `None`
    pub fn guid(&self, index: usize) -> ApiResult<Option<Uuid>> {
        guid_from_text(&self.text(index)?)
    }

    /// Fixed-length record received as a double array
    pub fn vector<V: ValueVector>(&self, index: usize) -> ApiResult<V> {
        let values = self.doubles(index)?;
        if values.len() != V::LEN {
            return Err(ApiError::marshalling(
                &self.operation,
                format!("slot {} holds {} values but {} were expected", index, values.len(), V::LEN),
            ));
        }
        Ok(V::from_exact(&values))
    }

    /// Double array whose length the host also reports in `count_index`
    pub fn counted_doubles(&self, count_index: usize, array_index: usize) -> ApiResult<Vec<f64>> {
        let count = self.count(count_index)?;
        let values = self.doubles(array_index)?;
        self.check_counted(count, values.len(), array_index)?;
        Ok(values)
    }

    /// Text array whose length the host also reports in `count_index`
    pub fn counted_texts(&self, count_index: usize, array_index: usize) -> ApiResult<Vec<String>> {
        let count = self.count(count_index)?;
        let values = self.texts(array_index)?;
        self.check_counted(count, values.len(), array_index)?;
        Ok(values)
    }

    fn check_counted(&self, count: usize, actual: usize, array_index: usize) -> ApiResult<()> {
        if count != actual {
            return Err(ApiError::marshalling(
                &self.operation,
                format!("host reported {} items but slot {} holds {}", count, array_index, actual),
            ));
        }
        Ok(())
    }
}
