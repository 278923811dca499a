//! 依赖注入实现的集成测试

use component_macros::Injectable;
use di_abstractions::{ConstructorRegistry, InjectorConfig};
use di_impl::{global, Registry};
use infrastructure_common::DependencyError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Default, Clone, PartialEq, Injectable)]
struct Db(String);

#[derive(Debug, Default, Clone, PartialEq, Injectable)]
struct User(String);

#[derive(Debug, Default, Clone, PartialEq, Injectable)]
struct HomeController {
    db: Db,
    current_user: User,
}

#[derive(Debug, Default, Clone, PartialEq, Injectable)]
struct Foo {
    ctrl: HomeController,
}

#[derive(Debug, Default, Clone, PartialEq, Injectable)]
struct Partial {
    db: Db,
    port: u16,
}

#[derive(Debug, Default, Clone, PartialEq, Injectable)]
struct Inner {
    db: Db,
}

#[derive(Debug, Default, Clone, PartialEq, Injectable)]
struct Outer {
    db: Db,
    inner: Inner,
    user: User,
}

#[test]
fn test_registration_overwrite_uses_last_constructor() {
    let registry = Registry::new();
    registry.register(|| Db("C1".to_string()));
    registry.register(|| Db("C2".to_string()));

    assert_eq!(registry.len(), 1);

    let mut db = Db::default();
    assert!(registry.inject(&mut db).unwrap());
    assert_eq!(db, Db("C2".to_string()));
}

#[test]
fn test_simple_injection() -> anyhow::Result<()> {
    let registry = Registry::new();
    registry.register(|| Db("Awesome".to_string()));

    let mut db = Db::default();
    let injected = registry.inject(&mut db)?;

    assert!(injected);
    assert_eq!(db, Db("Awesome".to_string()));
    Ok(())
}

#[test]
fn test_unregistered_leaf_is_untouched() -> anyhow::Result<()> {
    let registry = Registry::new();

    let mut user = User("before".to_string());
    assert!(!registry.inject(&mut user)?);
    assert_eq!(user, User("before".to_string()));
    Ok(())
}

#[test]
fn test_struct_field_injection() -> anyhow::Result<()> {
    let registry = Registry::new();
    registry.register(|| Db("Awesome".to_string()));

    let mut partial = Partial {
        db: Db::default(),
        port: 8080,
    };
    assert!(registry.inject(&mut partial)?);

    assert_eq!(partial.db, Db("Awesome".to_string()));
    assert_eq!(partial.port, 8080);
    Ok(())
}

#[test]
fn test_nested_struct_injection() -> anyhow::Result<()> {
    let registry = Registry::new();
    registry.register(|| Db("Awesome".to_string()));
    registry.register(|| User("Zainab".to_string()));

    let mut foo = Foo::default();
    assert!(registry.inject(&mut foo)?);

    assert_eq!(foo.ctrl.db, Db("Awesome".to_string()));
    assert_eq!(foo.ctrl.current_user, User("Zainab".to_string()));
    Ok(())
}

#[test]
fn test_non_writable_target_is_an_error() {
    let registry = Registry::new();
    registry.register(|| Db("Awesome".to_string()));

    let db = Db::default();
    let err = registry.inject(&db).unwrap_err();
    assert!(matches!(err, DependencyError::TargetNotWritable { .. }));
    assert!(!err.to_string().is_empty());

    let missing: Option<&mut Db> = None;
    assert!(registry.inject(missing).is_err());
}

#[test]
fn test_injection_is_idempotent() -> anyhow::Result<()> {
    let registry = Registry::new();
    registry.register(|| Db("Awesome".to_string()));
    registry.register(|| User("Zainab".to_string()));

    let mut foo = Foo::default();
    registry.inject(&mut foo)?;
    let first = foo.clone();
    registry.inject(&mut foo)?;

    assert_eq!(foo, first);
    Ok(())
}

#[test]
fn test_depth_limit_from_config() {
    let registry = Registry::with_config(InjectorConfig::default().with_max_depth(1));
    registry.register(|| Db("Awesome".to_string()));

    let mut foo = Foo::default();
    let err = registry.inject(&mut foo).unwrap_err();

    assert!(matches!(err, DependencyError::DepthLimitExceeded { .. }));
    assert_eq!(foo, Foo::default());
}

#[test]
fn test_failed_field_aborts_remaining_fields() {
    let registry = Registry::with_config(InjectorConfig::default().with_max_depth(1));
    registry.register(|| Db("Awesome".to_string()));
    registry.register(|| User("Zainab".to_string()));

    let mut outer = Outer::default();
    let err = registry.inject(&mut outer).unwrap_err();

    assert!(matches!(
        err,
        DependencyError::DepthLimitExceeded { max_depth: 1, .. }
    ));
    // 出错之前的字段已经写入，之后的字段保持原值
    assert_eq!(outer.db, Db("Awesome".to_string()));
    assert_eq!(outer.inner, Inner::default());
    assert_eq!(outer.user, User::default());
}

#[test]
#[should_panic(expected = "依赖注入失败")]
fn test_must_inject_panics_on_non_writable_target() {
    let registry = Registry::new();
    let ctrl = HomeController::default();
    registry.must_inject(&ctrl);
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(Registry::new());
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&calls);
    registry.register(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Db("Awesome".to_string())
    });

    thread::scope(|scope| {
        for i in 0..8 {
            let registry = Arc::clone(&registry);
            scope.spawn(move || {
                if i % 2 == 0 {
                    registry.register(|| User("Zainab".to_string()));
                }
                let mut ctrl = HomeController::default();
                assert!(registry.inject(&mut ctrl).unwrap());
                assert_eq!(ctrl.db, Db("Awesome".to_string()));
            });
        }
    });

    assert_eq!(calls.load(Ordering::SeqCst), 8);
    assert_eq!(registry.len(), 2);

    let mut ctrl = HomeController::default();
    registry.inject(&mut ctrl).unwrap();
    assert_eq!(ctrl.current_user, User("Zainab".to_string()));
}

#[test]
fn test_global_registry() {
    #[derive(Debug, Default, PartialEq, Injectable)]
    struct GlobalDb(String);

    #[derive(Debug, Default, Injectable)]
    struct GlobalController {
        db: GlobalDb,
    }

    global::register(|| GlobalDb("global".to_string()));

    let mut ctrl = GlobalController::default();
    assert!(global::must_inject(&mut ctrl));
    assert_eq!(ctrl.db, GlobalDb("global".to_string()));
    assert!(global::global().is_registered::<GlobalDb>());
}
