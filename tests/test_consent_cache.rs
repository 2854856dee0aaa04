mod common;
use crate::common::{read_cache, write_cache};
use oi_contribute::consent_cache::ConsentCache;
use oi_contribute::exceptions::ContribError;
use std::fs;

#[test]
fn test_load_save_is_idempotent_when_absent() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("open-interpreter").join("contribute.json");

    let cache = ConsentCache::load_or_init(&path).unwrap();
    let first = read_cache(&path);
    cache.save(&path).unwrap();

    assert_eq!(read_cache(&path), first);
    assert_eq!(ConsentCache::load_or_init(&path).unwrap(), cache);
}

#[test]
fn test_load_save_is_idempotent_for_all_false_and_all_true() {
    for flag in [false, true] {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("contribute.json");
        write_cache(&path, flag, flag, flag);
        let before = read_cache(&path);

        let cache = ConsentCache::load_or_init(&path).unwrap();
        cache.save(&path).unwrap();

        assert_eq!(read_cache(&path), before);
        assert_eq!(cache.displayed_contribution_message(), flag);
        assert_eq!(cache.asked_to_contribute_past(), flag);
        assert_eq!(cache.asked_to_contribute_future(), flag);
    }
}

#[test]
fn test_mixed_flags_survive_a_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("contribute.json");
    write_cache(&path, true, false, true);

    let mut cache = ConsentCache::load_or_init(&path).unwrap();
    cache.mark_asked_to_contribute_past();
    cache.save(&path).unwrap();

    let reloaded = ConsentCache::load_or_init(&path).unwrap();
    assert!(reloaded.displayed_contribution_message());
    assert!(reloaded.asked_to_contribute_past());
    assert!(reloaded.asked_to_contribute_future());
}

#[test]
fn test_corrupt_cache_is_reported_and_left_untouched() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("contribute.json");
    fs::write(&path, "{not json").unwrap();

    let err = ConsentCache::load_or_init(&path).unwrap_err();

    assert!(matches!(err, ContribError::CacheCorrupt { .. }));
    assert!(err.to_string().contains("corrupt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
}

#[test]
fn test_wrong_types_are_corrupt() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("contribute.json");
    fs::write(
        &path,
        r#"{"displayed_contribution_message": "yes", "asked_to_contribute_past": false, "asked_to_contribute_future": false}"#,
    )
    .unwrap();

    assert!(matches!(
        ConsentCache::load_or_init(&path),
        Err(ContribError::CacheCorrupt { .. })
    ));
}

#[test]
fn test_unknown_fields_are_corrupt() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("contribute.json");
    fs::write(
        &path,
        r#"{"displayed_contribution_message": true, "asked_to_contribute_past": true, "asked_to_contribute_future": true, "extra": 1}"#,
    )
    .unwrap();

    assert!(matches!(
        ConsentCache::load_or_init(&path),
        Err(ContribError::CacheCorrupt { .. })
    ));
}
