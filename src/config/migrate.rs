use crate::db::log::{migration_applied, ttlog};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use rusqlite::Connection;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

const VERSION: &str = "20250310_0002_config_key_store_fields";

const FIELDS: [&str; 3] = ["key_alias", "key_dir", "default_age"];

fn read_mapping(conf_file: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(conf_file)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Failed to parse {:?}: {}", conf_file, e)))?;

    if !yaml.is_mapping() {
        return Err(AppError::Config(format!(
            "Configuration {:?} is not a YAML mapping",
            conf_file
        )));
    }
    Ok(yaml)
}

/// Fields introduced after the first release that `conf_file` lacks.
pub fn missing_fields(conf_file: &Path) -> AppResult<Vec<String>> {
    if !conf_file.exists() {
        return Ok(Vec::new());
    }

    let yaml = read_mapping(conf_file)?;
    Ok(FIELDS
        .iter()
        .filter(|f| yaml.get(**f).is_none())
        .map(|f| f.to_string())
        .collect())
}

/// Add to the YAML file every field introduced after the first release
/// (`key_alias`, `key_dir`, `default_age`), keeping the values already present.
///   Returns the list of keys that were added (empty → no change needed).
pub fn fill_missing_fields(conf_file: &Path) -> AppResult<Vec<String>> {
    if !conf_file.exists() {
        return Ok(Vec::new());
    }

    let mut yaml = read_mapping(conf_file)?;
    let Some(map) = yaml.as_mapping_mut() else {
        return Ok(Vec::new());
    };

    let defaults = super::Config::default();
    let wanted: [(&str, Value); 3] = [
        (FIELDS[0], Value::String(defaults.key_alias)),
        (FIELDS[1], Value::String(defaults.key_dir)),
        (FIELDS[2], Value::Number(defaults.default_age.into())),
    ];

    let mut added = Vec::new();
    for (name, value) in wanted {
        let key = Value::String(name.to_string());
        if !map.contains_key(&key) {
            map.insert(key, value);
            added.push(name.to_string());
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&yaml).map_err(|e| {
            AppError::Config(format!("Failed to serialize updated config {:?}: {}", conf_file, e))
        })?;
        fs::write(conf_file, serialized)?;
    }

    Ok(added)
}

/// Run the config migration once, marking it as applied in the `log` table.
pub fn run_config_migration(conn: &Connection) -> AppResult<()> {
    if migration_applied(conn, VERSION)? {
        return Ok(());
    }

    let added = fill_missing_fields(&super::Config::config_file())?;

    if !added.is_empty() {
        info(format!(
            "Config migration ({}) added: {}",
            VERSION,
            added.join(", ")
        ));
    }

    ttlog(
        conn,
        "migration_applied",
        VERSION,
        "Added key store fields to configuration",
    )?;

    success(format!("Migration applied: {}", VERSION));
    Ok(())
}
