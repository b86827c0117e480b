//! Subcommand implementations. Each returns the text to print.

use std::path::Path;

use oapi_core::codes::{all_tables, CodeTable};
use oapi_core::config::ClientConfig;
use oapi_utils::folders::{is_read_only, list_files, list_folders, set_read_only, FileFilter};
use oapi_utils::paths::{
    file_name_extensions_match, try_convert_path_absolute_to_relative,
    try_convert_path_relative_to_absolute,
};
use oapi_utils::strings::{strings_match, MatchCase};
use tracing::{debug, info};

use crate::cli::{Commands, ListArgs};
use crate::error::{CliError, Result};

pub fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Relative { from_directory, target } => {
            Ok(try_convert_path_absolute_to_relative(&from_directory, &target)?)
        }
        Commands::Absolute { from_directory, relative } => {
            Ok(try_convert_path_relative_to_absolute(&from_directory, &relative)?)
        }
        Commands::MatchExt { file_name, pattern } => {
            Ok(file_name_extensions_match(&file_name, &pattern).to_string())
        }
        Commands::List(args) => list(&args),
        Commands::ReadOnly { path, set } => read_only(&path, set),
        Commands::Codes { name } => codes(name.as_deref()),
        Commands::Check { config, keys } => check(&config, &keys),
    }
}

fn list(args: &ListArgs) -> Result<String> {
    let match_case = if args.case_sensitive {
        MatchCase::Sensitive
    } else {
        MatchCase::Insensitive
    };

    let paths = match args.folders.as_deref() {
        Some(pattern) => list_folders(&args.dir, Some(pattern))?,
        None => {
            let filter = FileFilter {
                name_contains: args.contains.clone(),
                extensions: args.extensions.clone(),
                recursive: args.recursive,
                match_case,
            };
            debug!(?filter, "listing files");
            list_files(&args.dir, &filter)?
        }
    };

    Ok(paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn read_only(path: &Path, set: Option<bool>) -> Result<String> {
    if let Some(value) = set {
        set_read_only(path, value)?;
        info!(path = %path.display(), read_only = value, "updated attribute");
    }
    Ok(is_read_only(path)?.to_string())
}

fn codes(name: Option<&str>) -> Result<String> {
    let tables: Vec<CodeTable> = match name {
        None => all_tables(),
        Some(name) => {
            let found: Vec<CodeTable> = all_tables()
                .into_iter()
                .filter(|table| strings_match(table.name, name))
                .collect();
            if found.is_empty() {
                return Err(CliError::Argument(format!("no code table named '{}'", name)));
            }
            found
        }
    };
    Ok(serde_json::to_string_pretty(&tables)?)
}

fn check(config_path: &Path, keys: &[String]) -> Result<String> {
    let config = ClientConfig::load(config_path)?;
    let table = config.capability_table();
    info!(host = %config.target, rules = table.rules().len(), "checking availability");

    let lines: Vec<String> = keys
        .iter()
        .map(|key| {
            let state = if table.is_available(key, &config.target) {
                "available"
            } else {
                "unsupported"
            };
            format!("{}: {}", key, state)
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_relative_and_absolute() {
        let relative = run(Commands::Relative {
            from_directory: r"C:\Foo\Bar\Moo\Nar".to_string(),
            target: r"C:\Foo\Bar".to_string(),
        })
        .unwrap();
        assert_eq!(relative, r"..\..");

        let absolute = run(Commands::Absolute {
            from_directory: r"C:\Foo\Bar\Moo\Nar".to_string(),
            relative,
        })
        .unwrap();
        assert_eq!(absolute, r"C:\Foo\Bar");
    }

    #[test]
    fn test_relative_reports_util_error() {
        let err = run(Commands::Relative {
            from_directory: r"C:\Foo".to_string(),
            target: r"D:\Foo".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Util(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_match_ext() {
        let out = run(Commands::MatchExt {
            file_name: "Foo.Bar".to_string(),
            pattern: ".B??".to_string(),
        })
        .unwrap();
        assert_eq!(out, "true");
    }

    #[test]
    fn test_list_files_and_folders() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.sdb"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::create_dir(dir.path().join("runs")).unwrap();

        let args = ListArgs {
            dir: dir.path().to_path_buf(),
            extensions: vec![".sdb".to_string()],
            contains: None,
            recursive: false,
            case_sensitive: false,
            folders: None,
        };
        let out = list(&args).unwrap();
        assert!(out.ends_with("a.sdb"));
        assert!(!out.contains("b.txt"));

        let folders = ListArgs {
            folders: Some("*".to_string()),
            ..args
        };
        assert!(list(&folders).unwrap().ends_with("runs"));
    }

    #[test]
    fn test_codes_by_name() {
        let out = codes(Some("units")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);

        let err = codes(Some("NoSuchTable")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_check_uses_configured_target() {
        let dir = TempDir::new().unwrap();
        let path: PathBuf = dir.path().join("client.toml");
        fs::write(
            &path,
            "[target]\nproduct = \"sap2000\"\nversion = \"20.0.0\"\n\n[[capabilities]]\nkey = \"Func.Custom\"\nproducts = [\"etabs\"]\n",
        )
        .unwrap();

        let out = check(&path, &["Func.Custom.SetUser".to_string(), "LoadPatterns.Add".to_string()]).unwrap();
        assert_eq!(out, "Func.Custom.SetUser: unsupported\nLoadPatterns.Add: available");
    }

    #[test]
    fn test_check_missing_config_is_api_error() {
        let err = check(Path::new("does-not-exist.toml"), &["X".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::Api(_)));
    }
}
