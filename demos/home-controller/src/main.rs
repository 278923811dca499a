//! # 依赖注入演示
//!
//! 注册构造函数，然后注入一个嵌套的控制器结构体。
//! 可以通过 `LORN_DI_CONFIG` 指定注入器配置文件，`RUST_LOG` 控制日志级别。

use component_macros::Injectable;
use di_abstractions::ConstructorRegistry;
use di_impl::{config::load_config, Registry};
use infrastructure_common::TypeInfo;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Clone, Injectable)]
struct Db(String);

#[derive(Debug, Default, Clone, Injectable)]
struct User(String);

/// 首页控制器
#[derive(Debug, Default, Injectable)]
struct HomeController {
    db: Db,
    current_user: User,
    #[inject(skip)]
    request_count: u64,
}

/// 应用根对象
#[derive(Debug, Default, Injectable)]
struct App {
    home: HomeController,
    name: String,
}

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::var_os("LORN_DI_CONFIG").map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    let registry = Arc::new(Registry::with_config(config));

    // 一次性注册构造函数
    registry.register(|| Db("Awesome".to_string()));
    registry.register(|| User("Zainab".to_string()));

    let types: Vec<String> = registry
        .registered_types()
        .iter()
        .map(TypeInfo::short_name)
        .collect();
    info!("已注册类型: {:?}", types);

    let mut app = App {
        name: "home".to_string(),
        ..App::default()
    };
    let injected = registry.inject(&mut app)?;

    info!(injected, "注入完成: {:?}", app);
    info!(
        "db = {}, user = {}, requests = {}, name = {}",
        app.home.db.0, app.home.current_user.0, app.home.request_count, app.name
    );
    Ok(())
}
