#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rhabitlog::crypto::{MemoryKeyStore, NoteCipher};
use rhabitlog::db::initialize::open_db;
use rhabitlog::db::pool::DbPool;
use std::fs;
use tempfile::TempDir;

pub fn rhl() -> Command {
    cargo_bin_cmd!("rhabitlog")
}

/// A throw-away directory holding the test DB (and, in test mode, its key).
pub struct TestEnv {
    pub dir: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir
            .path()
            .join("rhabitlog.sqlite")
            .to_string_lossy()
            .to_string();
        Self { dir, db }
    }

    /// `init` the DB through the CLI
    pub fn initialized() -> Self {
        let env = Self::new();
        env.cmd(&["init"]).assert().success();
        env
    }

    /// rhabitlog --db <db> --test <args...>
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut c = rhl();
        c.args(["--db", &self.db, "--test"]).args(args);
        c
    }

    pub fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().to_string()
    }

    pub fn write(&self, name: &str, content: &str) -> String {
        let p = self.path(name);
        fs::write(&p, content).expect("write fixture");
        p
    }
}

/// In-memory database with the full schema, plus a cipher with a fresh key.
pub fn memory_store() -> (DbPool, NoteCipher) {
    let pool = DbPool::in_memory().expect("open in-memory db");
    rhabitlog::db::initialize::init_db(&pool.conn).expect("init db");
    let cipher = NoteCipher::new(&MemoryKeyStore::new(), "test_key");
    (pool, cipher)
}

/// On-disk database inside `dir`.
pub fn disk_store(dir: &TempDir) -> DbPool {
    let path = dir.path().join("lib.sqlite");
    open_db(&path.to_string_lossy()).expect("open db")
}
