//! In-memory host that records every call.
//!
//! Used by the test suites and for dry runs without a live application.
//! By default it behaves like a property store:
//!
//! - `<Group>.Set<X>(name, values...)` stores `values` under `name`
//! - `<Group>.Get<X>(name, outputs...)` writes the stored values back into
//!   the output slots, or fails with status `1` when nothing was stored
//! - when the first argument is not text the call has no name: `Set<X>`
//!   stores all of its arguments and `Get<X>` fills all of its slots
//! - `<Group>.Add(name, values...)` stores `values` under `name` so the entry
//!   shows up in the group's name list
//! - `<Group>.Count(count)` and `<Group>.GetNameList(count, names)` report the
//!   distinct names stored within the group
//! - `<Group>.ChangeName(old, new)` and `<Group>.Delete(name)` rename or drop
//!   everything stored under the name within the group
//! - every other operation succeeds without touching its arguments
//!
//! Per-operation handlers registered with [`RecordingHost::on`] replace the
//! default behaviour.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Host, Value};

type Handler = Box<dyn FnMut(&mut [Value]) -> i32>;

/// One recorded invocation, with argument slots as they were after the call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub operation: String,
    pub args: Vec<Value>,
    pub status: i32,
}

#[derive(Default)]
pub struct RecordingHost {
    calls: Vec<CallRecord>,
    handlers: HashMap<String, Handler>,
    stored: HashMap<(String, String), Vec<Value>>,
    error_message: Option<String>,
    last_failed: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        RecordingHost::default()
    }

    /// Replace the default behaviour of `operation`
    pub fn on(mut self, operation: impl Into<String>, handler: impl FnMut(&mut [Value]) -> i32 + 'static) -> Self {
        self.set_handler(operation, handler);
        self
    }

    /// Make `operation` return `status` without touching its arguments
    pub fn fail(self, operation: impl Into<String>, status: i32) -> Self {
        self.on(operation, move |_| status)
    }

    /// Text reported by [`Host::last_error`] after a failed call
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn set_handler(&mut self, operation: impl Into<String>, handler: impl FnMut(&mut [Value]) -> i32 + 'static) {
        self.handlers.insert(operation.into(), Box::new(handler));
    }

    /// Pre-load the values a `Get` operation answers with for `name`
    pub fn store(&mut self, get_operation: impl Into<String>, name: impl Into<String>, values: Vec<Value>) {
        self.stored.insert((get_operation.into(), name.into()), values);
    }

    /// Values a `Get` operation would answer with for `name`
    pub fn stored(&self, get_operation: &str, name: &str) -> Option<&[Value]> {
        self.stored
            .get(&(get_operation.to_string(), name.to_string()))
            .map(Vec::as_slice)
    }

    pub fn calls(&self) -> &[CallRecord] {
        &self.calls
    }

    pub fn calls_to(&self, operation: &str) -> Vec<&CallRecord> {
        self.calls.iter().filter(|c| c.operation == operation).collect()
    }

    /// Most recent call to `operation`
    pub fn last_call(&self, operation: &str) -> Option<CallRecord> {
        self.calls.iter().rev().find(|c| c.operation == operation).cloned()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn default_behaviour(&mut self, operation: &str, args: &mut [Value]) -> i32 {
        let (group, method) = operation.rsplit_once('.').unwrap_or(("", operation));
        let name = args.first().and_then(Value::as_text).map(str::to_string);

        if let Some(rest) = method.strip_prefix("Set") {
            let get_operation = if group.is_empty() {
                format!("Get{}", rest)
            } else {
                format!("{}.Get{}", group, rest)
            };
            let (key, values) = match name {
                Some(name) => (name, args[1..].to_vec()),
                None => (String::new(), args.to_vec()),
            };
            self.stored.insert((get_operation, key), values);
            return 0;
        }

        if method == "Add" {
            if let Some(name) = name {
                self.stored.insert((operation.to_string(), name), args[1..].to_vec());
            }
            return 0;
        }

        if method == "Count" || method == "GetNameList" {
            let names = self.names_in(group);
            if let Some(slot) = args.first_mut() {
                *slot = Value::Int(names.len() as i32);
            }
            if method == "GetNameList" {
                if let Some(slot) = args.get_mut(1) {
                    *slot = Value::TextArray(names);
                }
            }
            return 0;
        }

        if method.starts_with("Get") {
            let skip = usize::from(name.is_some());
            let key = (operation.to_string(), name.unwrap_or_default());
            return match self.stored.get(&key) {
                Some(values) => {
                    for (slot, value) in args.iter_mut().skip(skip).zip(values) {
                        if slot.same_kind(value) {
                            *slot = value.clone();
                        }
                    }
                    0
                }
                None => 1,
            };
        }

        match method {
            "ChangeName" => {
                let new_name = args.get(1).and_then(Value::as_text).map(str::to_string);
                if let (Some(old), Some(new)) = (name, new_name) {
                    self.rename(group, &old, &new);
                }
                0
            }
            "Delete" => {
                if let Some(name) = name {
                    let prefix = format!("{}.", group);
                    self.stored.retain(|(op, n), _| !(op.starts_with(&prefix) && *n == name));
                }
                0
            }
            _ => 0,
        }
    }

    /// Distinct names stored under operations of `group`, sorted
    fn names_in(&self, group: &str) -> Vec<String> {
        let prefix = format!("{}.", group);
        let mut names: Vec<String> = self
            .stored
            .keys()
            .filter(|(op, name)| op.starts_with(&prefix) && !name.is_empty())
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    fn rename(&mut self, group: &str, old: &str, new: &str) {
        let prefix = format!("{}.", group);
        let keys: Vec<_> = self
            .stored
            .keys()
            .filter(|(op, n)| op.starts_with(&prefix) && n == old)
            .cloned()
            .collect();
        for key in keys {
            if let Some(values) = self.stored.remove(&key) {
                self.stored.insert((key.0, new.to_string()), values);
            }
        }
    }
}

impl Host for RecordingHost {
    fn invoke(&mut self, operation: &str, args: &mut [Value]) -> i32 {
        let status = match self.handlers.get_mut(operation) {
            Some(handler) => handler(args),
            None => self.default_behaviour(operation, args),
        };
        self.last_failed = status != 0;
        self.calls.push(CallRecord {
            operation: operation.to_string(),
            args: args.to_vec(),
            status,
        });
        status
    }

    fn last_error(&self) -> Option<String> {
        if self.last_failed {
            self.error_message.clone()
        } else {
            None
        }
    }
}

impl std::fmt::Debug for RecordingHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingHost")
            .field("calls", &self.calls.len())
            .field("handlers", &self.handlers.len())
            .field("stored", &self.stored.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_mirrors_values() {
        let mut host = RecordingHost::new();
        let mut set = vec![Value::from("W1"), Value::Double(2.5), Value::Int(3)];
        assert_eq!(host.invoke("PropArea.SetThing", &mut set), 0);

        let mut get = vec![Value::from("W1"), Value::Double(0.0), Value::Int(0)];
        assert_eq!(host.invoke("PropArea.GetThing", &mut get), 0);
        assert_eq!(get, set);
    }

    #[test]
    fn test_unnamed_set_then_get() {
        let mut host = RecordingHost::new();
        host.invoke("SapModel.SetPresentUnits", &mut [Value::Int(6)]);
        let mut get = [Value::Int(0)];
        assert_eq!(host.invoke("SapModel.GetPresentUnits", &mut get), 0);
        assert_eq!(get[0], Value::Int(6));
    }

    #[test]
    fn test_get_without_set_fails() {
        let mut host = RecordingHost::new();
        let mut get = vec![Value::from("missing"), Value::Double(0.0)];
        assert_eq!(host.invoke("PropArea.GetThing", &mut get), 1);
        assert_eq!(host.calls()[0].status, 1);
    }

    #[test]
    fn test_change_name_and_delete() {
        let mut host = RecordingHost::new();
        host.invoke("Func.FuncRS.SetUser", &mut [Value::from("A"), Value::Double(0.05)]);
        host.invoke("Func.ChangeName", &mut [Value::from("A"), Value::from("B")]);
        assert!(host.stored("Func.FuncRS.GetUser", "A").is_none());
        assert_eq!(host.stored("Func.FuncRS.GetUser", "B"), Some(&[Value::Double(0.05)][..]));

        host.invoke("Func.Delete", &mut [Value::from("B")]);
        assert!(host.stored("Func.FuncRS.GetUser", "B").is_none());
    }

    #[test]
    fn test_count_and_name_list() {
        let mut host = RecordingHost::new();
        host.invoke("PropArea.SetShell_1", &mut [Value::from("SLAB"), Value::Int(1)]);
        host.invoke("PropArea.SetModifiers", &mut [Value::from("SLAB"), Value::DoubleArray(vec![1.0; 10])]);
        host.invoke("PropArea.SetPlane", &mut [Value::from("WALL"), Value::Int(1)]);
        host.invoke("PropFrame.SetCircle", &mut [Value::from("COL"), Value::Double(1.0)]);

        let mut count = [Value::Int(0)];
        host.invoke("PropArea.Count", &mut count);
        assert_eq!(count[0], Value::Int(2));

        host.invoke("LoadPatterns.Add", &mut [Value::from("DEAD"), Value::Int(1)]);
        host.invoke("LoadPatterns.Count", &mut count);
        assert_eq!(count[0], Value::Int(1));

        let mut list = [Value::Int(0), Value::TextArray(Vec::new())];
        host.invoke("PropArea.GetNameList", &mut list);
        assert_eq!(list[1], Value::TextArray(vec!["SLAB".into(), "WALL".into()]));
    }

    #[test]
    fn test_handlers_and_error_message() {
        let mut host = RecordingHost::new().fail("Func.Delete", 4).with_error_message("locked");
        assert_eq!(host.invoke("Func.Delete", &mut [Value::from("A")]), 4);
        assert_eq!(host.last_error(), Some("locked".to_string()));
        assert_eq!(host.invoke("Func.Count", &mut [Value::Int(0)]), 0);
        assert_eq!(host.last_error(), None);
        assert_eq!(host.calls_to("Func.Delete").len(), 1);
    }
}
