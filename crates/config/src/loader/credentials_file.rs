//! Credentials file discovery and parsing.
//!
//! Responsibilities:
//! - Locate the dotenv-format credentials file (explicit path,
//!   `IBM_CREDENTIALS_FILE`, working directory, home directory).
//! - Read it into a key/value map without touching the process environment.
//!
//! Does NOT handle:
//! - Interpreting the values (see env.rs `apply_vars`).
//!
//! Invariants:
//! - A missing file in the working or home directory is not an error.
//! - A file named explicitly (builder or `IBM_CREDENTIALS_FILE`) must exist.
//! - Parse errors never include the offending line.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::env::{env_var_or_none, non_blank};
use super::error::ConfigError;
use crate::constants::{CREDENTIALS_FILE_ENV, CREDENTIALS_FILE_NAME};

/// Where a credentials file came from; explicit sources must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CredentialsSource {
    Explicit(PathBuf),
    Discovered(PathBuf),
}

/// Resolve the credentials file to read, if any.
pub(crate) fn resolve_credentials_file(explicit: Option<&Path>) -> Option<CredentialsSource> {
    if let Some(path) = explicit {
        return Some(CredentialsSource::Explicit(path.to_path_buf()));
    }
    if let Some(path) = env_var_or_none(CREDENTIALS_FILE_ENV) {
        return Some(CredentialsSource::Explicit(PathBuf::from(path)));
    }

    let cwd_candidate = std::env::current_dir()
        .ok()
        .map(|dir| dir.join(CREDENTIALS_FILE_NAME));
    let home_candidate = directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(CREDENTIALS_FILE_NAME));

    cwd_candidate
        .into_iter()
        .chain(home_candidate)
        .find(|path| path.is_file())
        .map(CredentialsSource::Discovered)
}

/// Read a dotenv-format file into a map, dropping blank values.
pub(crate) fn read_credentials_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| map_dotenv_error(path, e))?;

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| map_dotenv_error(path, e))?;
        if let Some(value) = non_blank(value) {
            vars.insert(key, value);
        }
    }

    tracing::debug!(path = %path.display(), entries = vars.len(), "Loaded credentials file");
    Ok(vars)
}

fn map_dotenv_error(path: &Path, error: dotenvy::Error) -> ConfigError {
    match error {
        dotenvy::Error::LineParse(_, idx) => ConfigError::CredentialsFileParse {
            path: path.to_path_buf(),
            error_index: idx,
        },
        dotenvy::Error::Io(io_err) => ConfigError::CredentialsFileRead {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        },
        _ => ConfigError::CredentialsFileRead {
            path: path.to_path_buf(),
            kind: std::io::ErrorKind::InvalidData,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_credentials_file_skips_blank_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "WATSON_OPENSCALE_URL=https://file.example.com").unwrap();
        writeln!(file, "WATSON_OPENSCALE_USERNAME=").unwrap();
        writeln!(file, "# comment").unwrap();

        let vars = read_credentials_file(file.path()).unwrap();
        assert_eq!(
            vars.get("WATSON_OPENSCALE_URL").map(String::as_str),
            Some("https://file.example.com")
        );
        assert!(!vars.contains_key("WATSON_OPENSCALE_USERNAME"));
    }

    #[test]
    fn test_read_missing_credentials_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.env");
        let err = read_credentials_file(&missing).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::CredentialsFileRead { kind: std::io::ErrorKind::NotFound, .. }
        ));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/explicit.env");
        assert_eq!(
            resolve_credentials_file(Some(&path)),
            Some(CredentialsSource::Explicit(path))
        );
    }
}
