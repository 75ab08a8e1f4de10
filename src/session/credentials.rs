//! Credentials storage for the OneLine client.
//!
//! Stores the signed-in identity at `~/.oneline/.credentials.json` so the
//! session can be restored on the next launch.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

/// The credentials directory name.
const CREDENTIALS_DIR: &str = ".oneline";

/// The credentials file name.
const CREDENTIALS_FILE: &str = ".credentials.json";

/// Persisted authentication state for the hosted store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    /// Access token for store requests.
    pub access_token: Option<String>,
    /// The authenticated user's id.
    pub user_id: Option<String>,
    /// The authenticated user's email, for display only.
    pub email: Option<String>,
}

impl Credentials {
    /// Create new empty credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a token and identity are present.
    pub fn is_complete(&self) -> bool {
        self.access_token.is_some() && self.user_id.is_some()
    }
}

/// Manages credential storage and retrieval.
#[derive(Debug, Clone)]
pub struct CredentialsManager {
    /// Path to the credentials file.
    credentials_path: PathBuf,
}

impl CredentialsManager {
    /// Create a new CredentialsManager at the default location.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        let credentials_path = home.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE);
        Some(Self { credentials_path })
    }

    /// Create a manager backed by an explicit path (used in tests).
    pub fn with_path(credentials_path: PathBuf) -> Self {
        Self { credentials_path }
    }

    /// Get the path to the credentials file.
    pub fn credentials_path(&self) -> &PathBuf {
        &self.credentials_path
    }

    /// Load credentials from the credentials file.
    ///
    /// Returns default credentials if the file doesn't exist or can't be read.
    pub fn load(&self) -> Credentials {
        if !self.credentials_path.exists() {
            return Credentials::default();
        }

        let file = match File::open(&self.credentials_path) {
            Ok(f) => f,
            Err(_) => return Credentials::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(creds) => creds,
            Err(_) => Credentials::default(),
        }
    }

    /// Save credentials to the credentials file.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns `true` if successful, `false` otherwise.
    pub fn save(&self, credentials: &Credentials) -> bool {
        if let Some(parent) = self.credentials_path.parent() {
            if !parent.exists() && fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        let file = match File::create(&self.credentials_path) {
            Ok(f) => f,
            Err(_) => return false,
        };

        let mut writer = BufWriter::new(file);
        if serde_json::to_writer_pretty(&mut writer, credentials).is_err() {
            return false;
        }
        writer.flush().is_ok()
    }

    /// Delete the credentials file (sign-out).
    ///
    /// Returns `true` if the file is gone afterwards.
    pub fn clear(&self) -> bool {
        if !self.credentials_path.exists() {
            return true;
        }
        fs::remove_file(&self.credentials_path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_in(dir: &TempDir) -> CredentialsManager {
        CredentialsManager::with_path(dir.path().join(".credentials.json"))
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        assert_eq!(manager.load(), Credentials::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        let creds = Credentials {
            access_token: Some("tok".into()),
            user_id: Some("u-1".into()),
            email: Some("ada@example.com".into()),
        };
        assert!(manager.save(&creds));
        assert_eq!(manager.load(), creds);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        manager.save(&Credentials {
            access_token: Some("tok".into()),
            user_id: Some("u-1".into()),
            email: None,
        });
        assert!(manager.credentials_path().exists());
        assert!(manager.clear());
        assert!(!manager.credentials_path().exists());
        // Clearing again is a no-op success.
        assert!(manager.clear());
    }

    #[test]
    fn test_corrupt_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        std::fs::write(manager.credentials_path(), "not json").unwrap();
        assert_eq!(manager.load(), Credentials::default());
    }

    #[test]
    fn test_is_complete() {
        assert!(!Credentials::new().is_complete());
        assert!(!Credentials {
            access_token: Some("tok".into()),
            user_id: None,
            email: None,
        }
        .is_complete());
        assert!(Credentials {
            access_token: Some("tok".into()),
            user_id: Some("u-1".into()),
            email: None,
        }
        .is_complete());
    }
}
