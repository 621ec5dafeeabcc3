//! Centralized integration tests for linker-impl crate
use linker_abstractions::{
    ComponentFactory, ComponentFactoryResolver, ComponentFactoryResolverExt, CreateRequest,
    InjectorExt, NullFactoryResolver, NullInjector,
};
use linker_impl::{ModuleRuntime, StaticComponentFactory, StaticInjector};
use runtime_common::{ComponentIdentity, ScopeTracker};
use std::any::Any;
use std::sync::Arc;

/// 测试组件
#[derive(Debug)]
struct HeaderComponent {
    greeting: String,
}

#[derive(Debug)]
struct SidebarComponent;

#[derive(Debug)]
struct DialogComponent;

/// 测试服务
#[derive(Debug)]
struct GreetingService {
    greeting: String,
}

fn header_factory() -> Arc<dyn ComponentFactory> {
    Arc::new(
        StaticComponentFactory::new::<HeaderComponent, _>("app-header", |request| {
            // 优先使用请求注入器，其次回退到模块注入器
            let greeting = request
                .injector
                .get::<GreetingService>()
                .or_else(|| {
                    request
                        .module
                        .as_ref()
                        .and_then(|module| module.injector().get::<GreetingService>())
                })
                .map(|service| service.greeting.clone())
                .unwrap_or_else(|| "你好".to_string());

            Ok(Arc::new(HeaderComponent { greeting }) as Arc<dyn Any + Send + Sync>)
        })
        .with_content_selector("*")
        .with_input("greeting", "greeting")
        .with_output("collapsed", "collapsedChange"),
    )
}

fn sidebar_factory() -> Arc<dyn ComponentFactory> {
    Arc::new(StaticComponentFactory::new::<SidebarComponent, _>(
        "app-sidebar",
        |_request| Ok(Arc::new(SidebarComponent) as Arc<dyn Any + Send + Sync>),
    ))
}

/// 构建两级模块链：父模块声明侧边栏，子模块声明页头
fn build_chain() -> (ModuleRuntime, ModuleRuntime) {
    let tracker = Arc::new(ScopeTracker::new());

    let parent = ModuleRuntime::builder("app")
        .declare_factory(sidebar_factory())
        .with_scope_tracker(tracker.clone())
        .build()
        .unwrap();

    let child_injector = StaticInjector::builder()
        .with_provider(Arc::new(GreetingService {
            greeting: "欢迎".to_string(),
        }))
        .build();

    let child = ModuleRuntime::builder("app.feature")
        .declare_factory(header_factory())
        .with_parent(parent.resolver())
        .with_injector(Arc::new(child_injector))
        .with_scope_tracker(tracker)
        .build()
        .unwrap();

    (parent, child)
}

#[test]
fn test_local_resolution_preserves_metadata() {
    let (_parent, child) = build_chain();
    let original = header_factory();

    let resolved = child.resolver().resolve::<HeaderComponent>().unwrap();

    assert_eq!(resolved.identity(), original.identity());
    assert_eq!(resolved.selector(), original.selector());
    assert_eq!(resolved.content_selectors(), original.content_selectors());
    assert_eq!(resolved.inputs(), original.inputs());
    assert_eq!(resolved.outputs(), original.outputs());
    assert_eq!(resolved.describe(), original.describe());
}

#[test]
fn test_delegated_resolution_via_parent() {
    let (_parent, child) = build_chain();

    let resolved = child.resolver().resolve::<SidebarComponent>().unwrap();

    assert_eq!(
        resolved.identity(),
        &ComponentIdentity::of::<SidebarComponent>()
    );
    assert_eq!(resolved.selector(), "app-sidebar");
}

#[test]
fn test_unresolved_fails_with_identity() {
    let (_parent, child) = build_chain();

    let error = child.resolver().resolve::<DialogComponent>().unwrap_err();

    assert_eq!(error.identity(), &ComponentIdentity::of::<DialogComponent>());
    assert!(!child
        .resolver()
        .can_resolve(&ComponentIdentity::of::<DialogComponent>()));
}

#[test]
fn test_create_uses_bound_module_by_default() -> anyhow::Result<()> {
    let (_parent, child) = build_chain();

    let factory = child.resolver().resolve::<HeaderComponent>()?;
    let component = factory.create(CreateRequest::new(Arc::new(NullInjector)))?;

    let module = component.module().expect("组件应当携带模块上下文");
    assert_eq!(module.scope().id, child.handle().scope().id);

    // 请求注入器无提供者时，工厂回退到绑定模块的注入器
    let header = component.instance_as::<HeaderComponent>().unwrap();
    assert_eq!(header.greeting, "欢迎");
    Ok(())
}

#[test]
fn test_explicit_module_overrides_bound_context() -> anyhow::Result<()> {
    let (parent, child) = build_chain();

    let factory = child.resolver().resolve::<HeaderComponent>()?;
    let request = CreateRequest::new(Arc::new(NullInjector)).with_module(parent.handle().clone());
    let component = factory.create(request)?;

    let module = component.module().expect("组件应当携带模块上下文");
    assert_eq!(module.scope().id, parent.handle().scope().id);

    // 父模块注入器没有问候服务，使用默认问候语
    let header = component.instance_as::<HeaderComponent>().unwrap();
    assert_eq!(header.greeting, "你好");
    Ok(())
}

#[test]
fn test_delegated_factory_binds_requesting_module() -> anyhow::Result<()> {
    let (parent, child) = build_chain();

    // 侧边栏工厂来自父模块，但由子模块解析，应绑定子模块上下文
    let factory = child.resolver().resolve::<SidebarComponent>()?;
    let component = factory.create(CreateRequest::new(Arc::new(NullInjector)))?;

    let module = component.module().expect("组件应当携带模块上下文");
    assert_eq!(module.scope().id, child.handle().scope().id);
    assert_ne!(module.scope().id, parent.handle().scope().id);
    Ok(())
}

#[test]
fn test_resolution_chain_example() {
    // 页头本地命中, 侧边栏经由父级命中, 对话框整条链未注册而失败
    let (_parent, child) = build_chain();
    let resolver = child.resolver();

    assert!(resolver.resolve::<HeaderComponent>().is_ok());
    assert!(resolver.resolve::<SidebarComponent>().is_ok());

    let error = resolver.resolve::<DialogComponent>().unwrap_err();
    assert_eq!(error.identity().short_name(), "DialogComponent");
}

#[test]
fn test_null_resolver_terminates_chain() {
    let resolver = NullFactoryResolver::shared();

    let error = resolver.resolve::<HeaderComponent>().unwrap_err();
    assert_eq!(error.identity(), &ComponentIdentity::of::<HeaderComponent>());
    assert!(!resolver.can_resolve(&ComponentIdentity::of::<HeaderComponent>()));
}

#[test]
fn test_projected_nodes_are_passed_through() -> anyhow::Result<()> {
    let (_parent, child) = build_chain();

    let factory = child.resolver().resolve::<HeaderComponent>()?;
    let nodes: Vec<Vec<Arc<dyn Any + Send + Sync>>> =
        vec![vec![Arc::new("投影文本".to_string()) as Arc<dyn Any + Send + Sync>]];

    let request = CreateRequest::new(Arc::new(NullInjector)).with_projected_nodes(nodes);
    let component = factory.create(request)?;

    assert_eq!(
        component.identity(),
        &ComponentIdentity::of::<HeaderComponent>()
    );
    Ok(())
}
