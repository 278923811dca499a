//! 派生宏集成测试

use component_macros::Injectable;
use di_abstractions::{ConstructorRegistry, Injectable as InjectableType};
use di_impl::Registry;
use std::sync::Arc;

#[derive(Debug, Default, Clone, PartialEq, Injectable)]
struct Db(String);

#[derive(Debug, Default, Clone, PartialEq, Injectable)]
struct User(String);

/// 测试服务
#[derive(Debug, Default, Injectable)]
struct TestService {
    db: Db,
    user: User,
    #[inject(skip)]
    initialized: bool,
    retries: u32,
}

#[derive(Debug, Default, Injectable)]
struct Wrapper<T: Default> {
    inner: T,
    label: String,
}

#[derive(Debug, Default, Injectable)]
#[inject(leaf)]
struct Settings {
    db: Db,
}

#[derive(Debug, Default, Injectable)]
struct WithShared {
    settings: Option<Arc<Settings>>,
    db: Db,
}

fn registry() -> Registry {
    let registry = Registry::new();
    registry.register(|| Db("db".to_string()));
    registry.register(|| User("user".to_string()));
    registry
}

#[test]
fn test_derived_composite_injects_fields() {
    let registry = registry();

    let mut service = TestService {
        initialized: true,
        retries: 3,
        ..TestService::default()
    };
    assert!(registry.inject(&mut service).unwrap());

    assert_eq!(service.db, Db("db".to_string()));
    assert_eq!(service.user, User("user".to_string()));
    assert!(service.initialized);
    assert_eq!(service.retries, 3);
}

#[test]
fn test_skipped_field_is_never_constructed() {
    let registry = registry();
    registry.register(|| true);

    let mut service = TestService::default();
    registry.inject(&mut service).unwrap();

    assert!(!service.initialized);
}

#[test]
fn test_generic_composite() {
    let registry = registry();

    let mut wrapper: Wrapper<TestService> = Wrapper::default();
    assert!(registry.inject(&mut wrapper).unwrap());
    assert_eq!(wrapper.inner.db, Db("db".to_string()));
    assert_eq!(wrapper.label, "");

    let mut leaf_wrapper: Wrapper<Db> = Wrapper::default();
    assert!(registry.inject(&mut leaf_wrapper).unwrap());
    assert_eq!(leaf_wrapper.inner, Db("db".to_string()));
}

#[test]
fn test_leaf_attribute_stops_the_walk() {
    let registry = registry();
    assert!(!<Settings as InjectableType>::COMPOSITE);

    let mut settings = Settings::default();
    assert!(!registry.inject(&mut settings).unwrap());
    assert_eq!(settings.db, Db::default());

    registry.register(|| Settings {
        db: Db("from settings".to_string()),
    });
    assert!(registry.inject(&mut settings).unwrap());
    assert_eq!(settings.db, Db("from settings".to_string()));
}

#[test]
fn test_option_field_matches_whole_type() {
    let registry = registry();

    let mut value = WithShared::default();
    registry.inject(&mut value).unwrap();
    assert!(value.settings.is_none());

    registry.register(|| Some(Arc::new(Settings::default())));
    registry.inject(&mut value).unwrap();
    assert!(value.settings.is_some());
    assert_eq!(value.db, Db("db".to_string()));
}
