use super::*;

#[test]
fn test_declares_migration() {
    assert!(!ModuleInfo::new("a-none", "a/none", 0).declares_migration());
    assert!(ModuleInfo::new("a-base", "a/base", 3).declares_migration());
    assert!(ModuleInfo::new("a-always", "a/always", -1).declares_migration());
}

#[test]
fn test_is_always() {
    assert!(ModuleInfo::new("a-always", "a/always", -1).is_always());
    assert!(!ModuleInfo::new("a-base", "a/base", 3).is_always());
}

#[test]
fn test_handler_capabilities() {
    let module = ModuleInfo::new("a-user", "a/user", 2).with_init();

    // Update handlers are assumed, never probed.
    assert!(module.has_handler(HandlerKind::Update));
    assert!(module.has_handler(HandlerKind::Init));
    assert!(!module.has_handler(HandlerKind::Test));
}

#[test]
fn test_deserialize_defaults() {
    let module: ModuleInfo =
        serde_json::from_str(r#"{"name": "a-base", "url": "a/base"}"#).unwrap();
    assert_eq!(module.file_version, 0);
    assert!(!module.has_init);
    assert!(!module.has_test);
}
