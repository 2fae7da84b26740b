use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::{Error, Result};

pub const API_KEY_ENV: &str = "API_KEY";
pub const BASE_URL_ENV: &str = "YT_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Reads `env_file` (or `./.env`) and resolves the settings. The file must
    /// exist; variables already set in the process environment win over it.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let path = env_file.unwrap_or(Path::new(DEFAULT_ENV_FILE));
        Self::from_env_file(path, |name| env::var(name).ok())
    }

    pub fn from_env_file(
        path: &Path,
        process_env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file = read_env_file(path)?;
        Self::from_lookup(|name| process_env(name).or_else(|| file.get(name).cloned()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .map(|k| k.trim().to_owned())
            .unwrap_or_default();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey { var: API_KEY_ENV });
        }

        let base_url = lookup(BASE_URL_ENV)
            .map(|u| u.trim().to_owned())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Ok(Self { api_key, base_url })
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let env_file_error = |source: dotenvy::Error| Error::EnvFile {
        path: PathBuf::from(path),
        source,
    };
    let vars = dotenvy::from_path_iter(path)
        .map_err(env_file_error)?
        .collect::<std::result::Result<HashMap<_, _>, _>>()
        .map_err(env_file_error)?;
    debug!(path = %path.display(), vars = vars.len(), "loaded env file");
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_key_and_default_base_url() {
        let config = Config::from_lookup(lookup(&[(API_KEY_ENV, " abc123\n")])).unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_key_is_missing() {
        let err = Config::from_lookup(lookup(&[(API_KEY_ENV, "   ")])).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey { var: API_KEY_ENV }));
    }

    #[test]
    fn base_url_override() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_ENV, "k"),
            (BASE_URL_ENV, "http://127.0.0.1:9999"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn env_file_supplies_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_ENV_FILE);
        fs::write(&path, "API_KEY=from-file\nYT_API_BASE_URL=http://localhost:1\n").unwrap();

        let config = Config::from_env_file(&path, lookup(&[])).unwrap();
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.base_url, "http://localhost:1");
    }

    #[test]
    fn process_env_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_ENV_FILE);
        fs::write(&path, "API_KEY=from-file\n").unwrap();

        let config = Config::from_env_file(&path, lookup(&[(API_KEY_ENV, "from-env")])).unwrap();
        assert_eq!(config.api_key, "from-env");
    }

    #[test]
    fn missing_env_file_is_an_error_even_with_key_in_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_ENV_FILE);

        let err = Config::from_env_file(&path, lookup(&[(API_KEY_ENV, "from-env")])).unwrap_err();
        match err {
            Error::EnvFile { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected env file error, got {other:?}"),
        }
    }

    #[test]
    fn explicit_missing_env_file_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.env");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::EnvFile { .. }));
    }

    #[test]
    fn env_file_without_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_ENV_FILE);
        fs::write(&path, "OTHER=1\n").unwrap();

        let err = Config::from_env_file(&path, lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey { .. }));
    }
}
