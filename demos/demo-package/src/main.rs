//! # 组件工厂解析演示
//!
//! 演示模块级组件工厂注册表，包括：
//! - 构建根模块与特性模块的作用域链
//! - 本地解析、父级委托解析与解析失败
//! - 通过模块绑定工厂创建组件实例

use anyhow::Result;
use linker_abstractions::{
    ComponentFactory, ComponentFactoryResolverExt, CreateRequest, InjectorExt,
};
use linker_impl::{
    init_logging, LoggingConfig, ModuleRuntime, StaticComponentFactory, StaticInjector,
};
use runtime_common::global_scope_tracker;
use std::any::Any;
use std::sync::Arc;
use tracing::{info, warn};

// ========== 示例组件 ==========

/// 应用外壳组件
#[derive(Debug)]
pub struct AppShellComponent {
    pub title: String,
}

/// 用户卡片组件
#[derive(Debug)]
pub struct UserCardComponent {
    pub theme: String,
}

/// 未在任何模块注册的对话框组件
#[derive(Debug)]
pub struct DialogComponent;

/// 主题服务
#[derive(Debug)]
pub struct ThemeService {
    pub name: String,
}

// ========== 工厂定义 ==========

/// 应用外壳组件工厂
fn app_shell_factory() -> Arc<dyn ComponentFactory> {
    Arc::new(
        StaticComponentFactory::new::<AppShellComponent, _>("app-shell", |_request| {
            Ok(Arc::new(AppShellComponent {
                title: "Yunque 演示应用".to_string(),
            }) as Arc<dyn Any + Send + Sync>)
        })
        .with_content_selector("*")
        .with_input("title", "title"),
    )
}

/// 用户卡片组件工厂
///
/// 创建时从注入器获取主题服务
fn user_card_factory() -> Arc<dyn ComponentFactory> {
    Arc::new(
        StaticComponentFactory::new::<UserCardComponent, _>("user-card", |request| {
            let theme = request
                .injector
                .get::<ThemeService>()
                .map(|service| service.name.clone())
                .unwrap_or_else(|| "default".to_string());

            Ok(Arc::new(UserCardComponent { theme }) as Arc<dyn Any + Send + Sync>)
        })
        .with_input("user", "user")
        .with_output("selected", "selectedChange"),
    )
}

// ========== 演示函数 ==========

/// 演示本地解析与组件创建
fn demo_local_resolution(feature: &ModuleRuntime) -> Result<()> {
    info!("=== 本地解析演示 ===");

    let factory = feature.resolver().resolve::<UserCardComponent>()?;
    info!(
        "解析成功: {} (选择器 {})",
        factory.identity(),
        factory.selector()
    );

    let request = CreateRequest::new(feature.handle().injector().clone());
    let component = factory.create(request)?;

    let card = component.instance_as::<UserCardComponent>().unwrap();
    info!(
        "组件创建完成: 主题 {}, 所属模块 {}",
        card.theme,
        component.module().map(|m| m.name()).unwrap_or("<无>")
    );
    Ok(())
}

/// 演示父级委托解析
fn demo_delegated_resolution(feature: &ModuleRuntime) -> Result<()> {
    info!("=== 父级委托解析演示 ===");

    // 应用外壳组件只在根模块声明，特性模块通过作用域链回退解析
    let factory = feature.resolver().resolve::<AppShellComponent>()?;
    info!(
        "委托解析成功: {} (选择器 {})",
        factory.identity(),
        factory.selector()
    );
    Ok(())
}

/// 演示解析失败
fn demo_failed_resolution(feature: &ModuleRuntime) {
    info!("=== 解析失败演示 ===");

    match feature.resolver().resolve::<DialogComponent>() {
        Ok(_) => warn!("对话框组件不应当可解析"),
        Err(error) => info!(
            "解析按预期失败: {} (未注册组件: {})",
            error,
            error.identity().short_name()
        ),
    }
}

/// 演示工厂描述符输出
fn demo_descriptors(root: &ModuleRuntime, feature: &ModuleRuntime) -> Result<()> {
    info!("=== 工厂描述符演示 ===");

    for module in [root, feature] {
        let descriptors = module.registry().describe_all();
        info!(
            "模块 {} 的工厂清单:\n{}",
            module.handle().name(),
            serde_json::to_string_pretty(&descriptors)?
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::default())?;

    // 根模块：声明应用外壳组件
    let root = ModuleRuntime::builder("app")
        .declare_factory(app_shell_factory())
        .build()?;

    // 特性模块：声明用户卡片组件，父级解析器指向根模块
    let feature_injector = StaticInjector::builder()
        .with_provider(Arc::new(ThemeService {
            name: "dark".to_string(),
        }))
        .build();

    let feature = ModuleRuntime::builder("app.user")
        .declare_factory(user_card_factory())
        .with_parent(root.resolver())
        .with_injector(Arc::new(feature_injector))
        .build()?;

    demo_local_resolution(&feature)?;
    demo_delegated_resolution(&feature)?;
    demo_failed_resolution(&feature);
    demo_descriptors(&root, &feature)?;

    info!(
        "存活模块作用域数量: {}",
        global_scope_tracker().active_count()
    );

    feature.destroy();
    root.destroy();
    info!("演示结束");
    Ok(())
}
