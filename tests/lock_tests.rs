use rhabitlog::core::lock::{LockGate, LockState};
use rhabitlog::core::settings::SettingsLogic;
use rhabitlog::crypto::hash_pin;
use rhabitlog::errors::AppError;
use rhabitlog::models::settings::UserSettings;

mod common;
use common::memory_store;

fn settings(lock_enabled: bool, pin: Option<&str>) -> UserSettings {
    UserSettings {
        age: 30,
        lock_enabled,
        pin_hash: pin.map(hash_pin),
    }
}

#[test]
fn disabled_lock_lets_anything_through() {
    let mut gate = LockGate::from_settings(&settings(false, Some("1234")));
    assert_eq!(gate.state(), LockState::Disabled);
    assert!(gate.verify(""));
    assert!(gate.verify("9999"));
}

#[test]
fn no_pin_means_no_gate() {
    let mut gate = LockGate::from_settings(&UserSettings::default());
    assert_eq!(gate.state(), LockState::Unset);
    assert!(gate.verify("whatever"));
}

#[test]
fn enabled_lock_checks_the_hash() {
    let mut gate = LockGate::from_settings(&settings(true, Some("1234")));
    assert_eq!(gate.state(), LockState::Locked);

    assert!(!gate.verify("4321"));
    assert!(!gate.verify(""));
    assert_eq!(gate.state(), LockState::Locked);

    assert!(gate.verify("1234"));
    assert_eq!(gate.state(), LockState::Unlocked);
}

#[test]
fn set_pin_enables_the_lock() {
    let mut gate = LockGate::from_settings(&UserSettings::default());
    gate.set_pin("0042").unwrap();

    let s = gate.settings();
    assert!(s.lock_enabled);
    assert_eq!(s.pin_hash.as_deref(), Some(hash_pin("0042").as_str()));

    let mut fresh = LockGate::from_settings(s);
    assert_eq!(fresh.state(), LockState::Locked);
    assert!(fresh.verify("0042"));
}

#[test]
fn set_pin_rejects_bad_format() {
    let mut gate = LockGate::from_settings(&UserSettings::default());
    assert!(matches!(gate.set_pin("12"), Err(AppError::InvalidPin(_))));
    assert!(matches!(gate.set_pin("abcd"), Err(AppError::InvalidPin(_))));
    assert_eq!(gate.state(), LockState::Unset);
}

#[test]
fn toggle_requires_a_pin_to_enable() {
    let mut gate = LockGate::from_settings(&UserSettings::default());
    assert!(matches!(gate.toggle_lock(true), Err(AppError::PinNotSet)));
    assert!(gate.toggle_lock(false).is_ok());

    let mut gate = LockGate::from_settings(&settings(true, Some("1111")));
    gate.toggle_lock(false).unwrap();
    assert_eq!(gate.state(), LockState::Disabled);
    gate.toggle_lock(true).unwrap();
    assert_eq!(gate.state(), LockState::Locked);
}

#[test]
fn settings_round_trip_through_the_store() {
    let (pool, _cipher) = memory_store();

    let first = SettingsLogic::load_or_init(&pool.conn, 27).unwrap();
    assert_eq!(first, UserSettings::with_age(27));

    let mut gate = LockGate::from_settings(&first);
    gate.set_pin("2468").unwrap();
    SettingsLogic::save(&pool.conn, gate.settings()).unwrap();

    // default age is not re-applied once a row exists
    let loaded = SettingsLogic::load_or_init(&pool.conn, 99).unwrap();
    assert_eq!(loaded.age, 27);
    assert!(loaded.lock_enabled);
    assert_eq!(loaded.pin_hash, Some(hash_pin("2468")));
}

#[test]
fn age_must_be_in_range() {
    let (pool, _cipher) = memory_store();
    let s = SettingsLogic::load_or_init(&pool.conn, 25).unwrap();

    assert!(matches!(
        SettingsLogic::update_age(&pool.conn, &s, 17),
        Err(AppError::InvalidAge(17))
    ));
    assert!(SettingsLogic::update_age(&pool.conn, &s, 101).is_err());

    let updated = SettingsLogic::update_age(&pool.conn, &s, 40).unwrap();
    assert_eq!(updated.age, 40);
    assert_eq!(
        SettingsLogic::load_or_init(&pool.conn, 25).unwrap().age,
        40
    );
}
