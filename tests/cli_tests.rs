use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::TestEnv;

const SEED: &str = r#"{"version":1,"exportedAt":0,"records":[
    {"id": 1, "timestamp": 1704096000000, "date": "2024-01-01", "note": "new year"},
    {"id": 2, "timestamp": 1704182400000, "date": "2024-01-02"},
    {"id": 3, "timestamp": 1704268800000, "date": "2024-01-03"},
    {"id": 4, "timestamp": 1704441600000, "date": "2024-01-05"},
    {"date": "2024-01-06"}
]}"#;

fn seeded() -> TestEnv {
    let env = TestEnv::initialized();
    let file = env.write("seed.json", SEED);
    env.cmd(&["import", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Imported 4 record(s)"))
        .stdout(contains("Skipped 1 malformed entry"));
    env
}

#[test]
fn init_creates_database() {
    let env = TestEnv::new();
    env.cmd(&["init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
    assert!(fs::metadata(&env.db).is_ok());
}

#[test]
fn add_then_list_today_shows_decrypted_note() {
    let env = TestEnv::initialized();

    env.cmd(&["add", "--note", "morning run"])
        .assert()
        .success()
        .stdout(contains("Record #1 logged"));

    env.cmd(&["list", "--today"])
        .assert()
        .success()
        .stdout(contains("morning run"))
        .stdout(contains("1 record(s)"));
}

#[test]
fn list_by_period() {
    let env = seeded();

    env.cmd(&["list", "--period", "2024-01-02:2024-01-03"])
        .assert()
        .success()
        .stdout(contains("2024-01-02"))
        .stdout(contains("2024-01-03"))
        .stdout(contains("2024-01-05").not());

    env.cmd(&["list", "--period", "2024-13"]).assert().failure();
}

#[test]
fn stats_for_reference_day() {
    let env = seeded();

    env.cmd(&["stats", "--date", "2024-01-07"])
        .assert()
        .success()
        .stdout(contains("Longest streak:"))
        .stdout(contains("3 day(s)"))
        .stdout(contains("Total records:"))
        .stdout(contains("January 2024"));

    env.cmd(&["stats", "--date", "07/01/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    env.cmd(&["stats", "--date=+262142-12-31"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn status_shows_tip() {
    let env = TestEnv::initialized();
    env.cmd(&["add"]).assert().success();

    env.cmd(&["status"])
        .assert()
        .success()
        .stdout(contains("1 record(s) today"))
        .stdout(contains("Already logged today"));
}

#[test]
fn export_import_round_trip() {
    let env = seeded();
    let out = env.path("export.json");

    env.cmd(&["export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Exported 4 record(s)"));

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["version"], 1);
    assert_eq!(doc["records"].as_array().unwrap().len(), 4);
    assert!(fs::read_to_string(&out).unwrap().contains("new year"));

    // refuses to overwrite without --force
    env.cmd(&["export", "--file", &out]).assert().failure();
    env.cmd(&["export", "--file", &out, "--force"]).assert().success();

    let other = TestEnv::initialized();
    other
        .cmd(&["import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 4 record(s)"));
    other
        .cmd(&["list", "--period", "2024-01"])
        .assert()
        .success()
        .stdout(contains("new year"));
}

#[test]
fn import_rejects_bad_shape() {
    let env = TestEnv::initialized();
    let file = env.write("bad.json", "\"just text\"");

    env.cmd(&["import", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("Bad backup format"));

    env.cmd(&["list"])
        .assert()
        .success()
        .stdout(contains("No records found"));
}

#[test]
fn import_reports_skipped_entries_in_plural() {
    let env = TestEnv::initialized();
    let file = env.write(
        "partial.json",
        r#"[{"timestamp": 1704096000000, "date": "2024-01-01"}, {"date": "x"}, {"note": "y"}]"#,
    );

    env.cmd(&["import", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Imported 1 record(s)"))
        .stdout(contains("Skipped 2 malformed entries"));
}

#[test]
fn clear_with_yes_deletes_everything() {
    let env = seeded();
    env.cmd(&["clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted 4 record(s)"));
    env.cmd(&["list"])
        .assert()
        .success()
        .stdout(contains("No records found"));
}

#[test]
fn settings_age() {
    let env = TestEnv::initialized();

    env.cmd(&["settings", "--age", "40"])
        .assert()
        .success()
        .stdout(contains("Age set to 40"));
    env.cmd(&["settings", "--print"])
        .assert()
        .success()
        .stdout(contains("Age:").and(contains("40")))
        .stdout(contains("1-1"));

    env.cmd(&["settings", "--age", "12"])
        .assert()
        .failure()
        .stderr(contains("Invalid age"));
}

#[test]
fn pin_lock_guards_data_commands() {
    let env = TestEnv::initialized();
    env.cmd(&["add", "--note", "guarded"]).assert().success();

    env.cmd(&["pin", "set", "1234"])
        .assert()
        .success()
        .stdout(contains("lock is now enabled"));

    env.cmd(&["list", "--pin", "0000"])
        .assert()
        .failure()
        .stderr(contains("Wrong PIN"));

    env.cmd(&["list", "--pin", "1234"])
        .assert()
        .success()
        .stdout(contains("guarded"));

    env.cmd(&["pin", "verify", "1234"]).assert().success();
    env.cmd(&["pin", "verify", "9999"]).assert().failure();

    // changing or disabling needs the current PIN
    env.cmd(&["pin", "set", "5678", "--pin", "0000"])
        .assert()
        .failure();
    env.cmd(&["pin", "disable", "--pin", "1234"])
        .assert()
        .success();

    // lock off: no PIN needed any more
    env.cmd(&["list"]).assert().success().stdout(contains("guarded"));
    env.cmd(&["pin", "verify", "0000"]).assert().success();

    env.cmd(&["pin", "enable"]).assert().success();
    env.cmd(&["status", "--pin", "1234"]).assert().success();
}

#[test]
fn every_data_command_needs_the_pin() {
    let env = TestEnv::initialized();
    env.cmd(&["add", "--note", "secret"]).assert().success();
    env.cmd(&["pin", "set", "1234"]).assert().success();

    let export = env.path("locked.json");
    let import = env.write("seed.json", SEED);

    let guarded: Vec<Vec<&str>> = vec![
        vec!["add", "--note", "intruder"],
        vec!["list"],
        vec!["stats"],
        vec!["status"],
        vec!["export", "--file", export.as_str()],
        vec!["import", "--file", import.as_str()],
        vec!["clear", "--yes"],
        vec!["settings", "--print"],
        vec!["settings", "--age", "50"],
        vec!["log", "--print"],
        vec!["db", "--info"],
        vec!["db", "--check"],
        vec!["db", "--vacuum"],
        vec!["db", "--migrate"],
    ];

    for args in &guarded {
        let mut with_wrong_pin = args.clone();
        with_wrong_pin.extend(["--pin", "0000"]);

        env.cmd(&with_wrong_pin)
            .assert()
            .failure()
            .stderr(contains("Wrong PIN"))
            .stdout(contains("Total records").not());
    }

    // nothing leaked or changed
    assert!(fs::metadata(&export).is_err());
    env.cmd(&["list", "--pin", "1234"])
        .assert()
        .success()
        .stdout(contains("secret"))
        .stdout(contains("intruder").not())
        .stdout(contains("1 record(s)"));
    env.cmd(&["settings", "--print", "--pin", "1234"])
        .assert()
        .success()
        .stdout(contains("50").not());

    env.cmd(&["db", "--info", "--pin", "1234"])
        .assert()
        .success()
        .stdout(contains("Total records:"));
}

#[test]
fn enabling_lock_without_pin_fails() {
    let env = TestEnv::initialized();
    env.cmd(&["pin", "enable"])
        .assert()
        .failure()
        .stderr(contains("No PIN has been set"));
}

#[test]
fn invalid_pin_format_is_rejected() {
    let env = TestEnv::initialized();
    env.cmd(&["pin", "set", "12ab"])
        .assert()
        .failure()
        .stderr(contains("Invalid PIN"));
}

#[test]
fn log_print_lists_operations() {
    let env = seeded();
    env.cmd(&["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("import"))
        .stdout(contains("migration_applied"));
}

#[test]
fn db_info_and_check() {
    let env = seeded();
    env.cmd(&["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total records:"))
        .stdout(contains("Integrity check passed"));
}
