//! Operations shared by every host group that manages named definitions.

use crate::errors::ApiResult;
use crate::host::Seed;

/// A host group whose entries are addressed by name (`PropArea`, `LoadPatterns`, ...).
///
/// Implementors supply the group prefix and their seed; the name-list
/// operations come for free.
pub trait NamedCollection {
    /// Host object group the operations are prefixed with
    const GROUP: &'static str;

    fn seed(&self) -> &Seed;

    /// Number of defined entries
    fn count(&self) -> ApiResult<usize> {
        self.seed()
            .call(format!("{}.Count", Self::GROUP))
            .out_int()
            .invoke()?
            .count(0)
    }

    /// Names of all defined entries
    fn name_list(&self) -> ApiResult<Vec<String>> {
        self.seed()
            .call(format!("{}.GetNameList", Self::GROUP))
            .out_int()
            .out_texts()
            .invoke()?
            .counted_texts(0, 1)
    }

    fn exists(&self, name: &str) -> ApiResult<bool> {
        Ok(self.name_list()?.iter().any(|n| n == name))
    }

    fn change_name(&self, name: &str, new_name: &str) -> ApiResult<()> {
        self.seed()
            .call(format!("{}.ChangeName", Self::GROUP))
            .arg(name)
            .arg(new_name)
            .invoke()?;
        Ok(())
    }

    fn delete(&self, name: &str) -> ApiResult<()> {
        self.seed()
            .call(format!("{}.Delete", Self::GROUP))
            .arg(name)
            .invoke()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::HostTarget;
    use crate::host::{RecordingHost, Value};

    struct Widgets(Seed);

    impl NamedCollection for Widgets {
        const GROUP: &'static str = "Widget";

        fn seed(&self) -> &Seed {
            &self.0
        }
    }

    fn widgets() -> Widgets {
        let mut host = RecordingHost::new();
        host.store("Widget.GetSize", "W1", vec![Value::Double(1.0)]);
        host.store("Widget.GetSize", "W2", vec![Value::Double(2.0)]);
        Widgets(Seed::new(host, HostTarget::default()))
    }

    #[test]
    fn test_count_and_names() {
        let widgets = widgets();
        assert_eq!(widgets.count().unwrap(), 2);
        assert_eq!(widgets.name_list().unwrap(), vec!["W1", "W2"]);
        assert!(widgets.exists("W2").unwrap());
        assert!(!widgets.exists("W3").unwrap());
    }

    #[test]
    fn test_rename_and_delete() {
        let widgets = widgets();
        widgets.change_name("W1", "W9").unwrap();
        assert_eq!(widgets.name_list().unwrap(), vec!["W2", "W9"]);
        widgets.delete("W2").unwrap();
        assert_eq!(widgets.name_list().unwrap(), vec!["W9"]);
    }

    #[test]
    fn test_inconsistent_name_list_is_marshalling_error() {
        let host = RecordingHost::new().on("Widget.GetNameList", |args| {
            args[0] = Value::Int(3);
            args[1] = Value::TextArray(vec!["only".into()]);
            0
        });
        let widgets = Widgets(Seed::new(host, HostTarget::default()));
        assert_eq!(widgets.name_list().unwrap_err().error_code(), "MARSHALLING");
    }
}
