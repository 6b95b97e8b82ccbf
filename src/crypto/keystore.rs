//! Secure storage for the note encryption key.
//!
//! A key is addressed by an alias and created on first request; later
//! requests for the same alias return the same key.

use crate::errors::{AppError, AppResult};
use rand::RngCore;
use rand::rngs::OsRng;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use zeroize::Zeroizing;

pub const KEY_LEN: usize = 32;

/// 256-bit symmetric key. Wiped from memory on drop.
#[derive(Clone)]
pub struct MasterKey {
    key: Zeroizing<[u8; KEY_LEN]>,
}

impl MasterKey {
    /// Generate new random key
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut key);

        Self {
            key: Zeroizing::new(key),
        }
    }

    fn from_hex(encoded: &str) -> AppResult<Self> {
        let bytes = Zeroizing::new(
            hex::decode(encoded.trim())
                .map_err(|e| AppError::KeyStore(format!("Corrupted key file: {e}")))?,
        );
        if bytes.len() != KEY_LEN {
            return Err(AppError::KeyStore("Invalid key length".to_string()));
        }

        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&bytes);
        Ok(Self {
            key: Zeroizing::new(key),
        })
    }

    fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.key.as_ref()))
    }

    pub(crate) fn bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey(<redacted>)")
    }
}

/// Create-if-absent key storage.
pub trait KeyStore: Send + Sync {
    fn load_or_create(&self, alias: &str) -> AppResult<MasterKey>;
}

fn check_alias(alias: &str) -> AppResult<()> {
    let ok = !alias.is_empty()
        && alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        && !alias.starts_with('.');
    if ok {
        Ok(())
    } else {
        Err(AppError::KeyStore(format!("Invalid key alias '{alias}'")))
    }
}

/// Keys stored hex-encoded in `<dir>/<alias>.key`, owner read/write only.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    dir: PathBuf,
}

impl FileKeyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn key_path(&self, alias: &str) -> PathBuf {
        self.dir.join(format!("{alias}.key"))
    }

    fn write_new(path: &Path, key: &MasterKey) -> AppResult<()> {
        let mut opts = fs::OpenOptions::new();
        opts.write(true).create_new(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o600);
        }

        let mut file = opts.open(path)?;
        file.write_all(key.to_hex().as_bytes())?;
        file.sync_all()?;
        Ok(())
    }
}

impl KeyStore for FileKeyStore {
    fn load_or_create(&self, alias: &str) -> AppResult<MasterKey> {
        check_alias(alias)?;
        let path = self.key_path(alias);

        if path.exists() {
            let encoded = Zeroizing::new(fs::read_to_string(&path)?);
            debug!(path = %path.display(), "loaded note key");
            return MasterKey::from_hex(&encoded);
        }

        fs::create_dir_all(&self.dir)?;
        let key = MasterKey::generate();
        match Self::write_new(&path, &key) {
            Ok(()) => {
                info!(path = %path.display(), "created note key");
                Ok(key)
            }
            // Lost a creation race: the other key wins.
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                let encoded = Zeroizing::new(fs::read_to_string(&path)?);
                MasterKey::from_hex(&encoded)
            }
            Err(e) => Err(e),
        }
    }
}

/// Process-local keys; nothing touches the disk.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    keys: Mutex<HashMap<String, MasterKey>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStore for MemoryKeyStore {
    fn load_or_create(&self, alias: &str) -> AppResult<MasterKey> {
        check_alias(alias)?;
        let mut keys = self
            .keys
            .lock()
            .map_err(|_| AppError::KeyStore("key store lock poisoned".to_string()))?;
        let key = keys
            .entry(alias.to_string())
            .or_insert_with(MasterKey::generate);
        Ok(key.clone())
    }
}
