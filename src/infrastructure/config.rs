//! Configuration management

use crate::error::{DiaryError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the diary directory
pub const DIARY_DIRPATH_VAR: &str = "DIARY_DIRPATH";
/// Environment variable holding the editor command
pub const DIARY_EDITOR_VAR: &str = "DIARY_EDITOR";

/// Settings read once at startup and passed into the services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub diary_dir: PathBuf,
    /// Empty means "print the entry path instead of launching an editor"
    pub editor: String,
}

impl Config {
    /// Build config from the process environment, after loading `.env` if present.
    /// Command-line values, when given, win over the environment.
    pub fn from_env(diary_dir: Option<&Path>, editor: Option<&str>) -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        Self::from_lookup(|key| match key {
            DIARY_DIRPATH_VAR if diary_dir.is_some() => {
                diary_dir.map(|dir| dir.as_os_str().to_os_string())
            }
            DIARY_EDITOR_VAR if editor.is_some() => editor.map(OsString::from),
            _ => std::env::var_os(key),
        })
    }

    /// Build config from an arbitrary key lookup. The directory is taken as raw
    /// OS text; the editor command must be UTF-8.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let dir = lookup(DIARY_DIRPATH_VAR)
            .filter(|value| value.to_str().map_or(true, |text| !text.trim().is_empty()))
            .ok_or_else(|| DiaryError::Config(format!("{} is unset", DIARY_DIRPATH_VAR)))?;
        let editor = match lookup(DIARY_EDITOR_VAR) {
            Some(value) => value.into_string().map_err(|_| {
                DiaryError::Config(format!("{} is not valid UTF-8", DIARY_EDITOR_VAR))
            })?,
            None => String::new(),
        };

        Self::new(Path::new(&dir), editor)
    }

    /// Validate the diary directory and build config
    pub fn new(diary_dir: &Path, editor: String) -> Result<Self> {
        let diary_dir = expand_home(diary_dir);

        if !diary_dir.is_dir() {
            return Err(DiaryError::Config(format!(
                "Diary directory {} does not exist",
                diary_dir.display()
            )));
        }

        Ok(Config { diary_dir, editor })
    }

    /// Directory holding per-diary template overrides
    pub fn templates_dir(&self) -> PathBuf {
        self.diary_dir.join("templates")
    }
}

/// Expand a leading `~` to the user's home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();

        let config = Config::from_lookup(lookup_from(&[
            (DIARY_DIRPATH_VAR, dir),
            (DIARY_EDITOR_VAR, "code -w"),
        ]))
        .unwrap();

        assert_eq!(config.diary_dir, temp.path());
        assert_eq!(config.editor, "code -w");
        assert_eq!(config.templates_dir(), temp.path().join("templates"));
    }

    #[test]
    fn test_missing_editor_means_print_only() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();

        let config = Config::from_lookup(lookup_from(&[(DIARY_DIRPATH_VAR, dir)])).unwrap();
        assert_eq!(config.editor, "");
    }

    #[test]
    fn test_unset_directory_fails() {
        for pairs in [vec![], vec![(DIARY_DIRPATH_VAR, "")]] {
            match Config::from_lookup(lookup_from(&pairs)) {
                Err(DiaryError::Config(msg)) => assert!(msg.contains(DIARY_DIRPATH_VAR)),
                other => panic!("Expected Config error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let result = Config::from_lookup(lookup_from(&[(
            DIARY_DIRPATH_VAR,
            missing.to_str().unwrap(),
        )]));

        match result {
            Err(DiaryError::Config(msg)) => {
                assert!(msg.contains("does not exist"));
                assert!(msg.contains("nope"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("diary.md");
        std::fs::write(&file, "").unwrap();

        assert!(Config::new(&file, String::new()).is_err());
    }

    #[test]
    fn test_expand_home() {
        let plain = Path::new("/var/diary");
        assert_eq!(expand_home(plain), PathBuf::from("/var/diary"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/diary")), home.join("diary"));
            assert_eq!(expand_home(Path::new("~")), home);
        }
    }

    // APFS refuses non-UTF-8 file names
    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_directory_is_kept() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(OsStr::from_bytes(b"diary\xff"));
        std::fs::create_dir(&dir).unwrap();

        let raw = dir.as_os_str().to_os_string();
        let config = Config::from_lookup(|key| match key {
            DIARY_DIRPATH_VAR => Some(raw.clone()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.diary_dir, dir);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_editor_fails() {
        use std::os::unix::ffi::OsStringExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().as_os_str().to_os_string();

        let result = Config::from_lookup(|key| match key {
            DIARY_DIRPATH_VAR => Some(dir.clone()),
            _ => Some(OsString::from_vec(b"vi\xff".to_vec())),
        });
        match result {
            Err(DiaryError::Config(msg)) => assert!(msg.contains(DIARY_EDITOR_VAR)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
