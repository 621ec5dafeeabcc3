//! 模块装配单元测试

use crate::factory::StaticComponentFactory;
use crate::module::ModuleRuntime;
use linker_abstractions::ComponentFactory;
use runtime_common::{ModuleError, RegistryConfig, ScopeTracker};
use std::any::Any;
use std::sync::Arc;

#[derive(Debug)]
struct BannerComponent;

#[derive(Debug)]
struct FooterComponent;

fn banner_factory(selector: &str) -> Arc<dyn ComponentFactory> {
    Arc::new(StaticComponentFactory::new::<BannerComponent, _>(
        selector,
        |_request| Ok(Arc::new(BannerComponent) as Arc<dyn Any + Send + Sync>),
    ))
}

fn footer_factory() -> Arc<dyn ComponentFactory> {
    Arc::new(
        StaticComponentFactory::new::<FooterComponent, _>("app-footer", |_request| {
            Ok(Arc::new(FooterComponent) as Arc<dyn Any + Send + Sync>)
        })
        .with_input("year", "year"),
    )
}

#[test]
fn test_duplicate_declaration_rejected() {
    let result = ModuleRuntime::builder("app")
        .declare_factory(banner_factory("app-banner"))
        .declare_factory(banner_factory("app-banner-alt"))
        .build();

    match result {
        Err(ModuleError::DuplicateComponent { identity }) => {
            assert_eq!(identity.short_name(), "BannerComponent");
        }
        other => panic!("期望重复声明错误, 实际: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_empty_selector_rejected() {
    let result = ModuleRuntime::builder("app")
        .declare_factory(banner_factory("  "))
        .build();

    assert!(matches!(
        result,
        Err(ModuleError::InvalidSelector { .. })
    ));
}

#[test]
fn test_validation_can_be_disabled() {
    let module = ModuleRuntime::builder("app")
        .declare_factory(banner_factory("app-banner"))
        .declare_factory(banner_factory("app-banner-alt"))
        .with_config(RegistryConfig {
            enable_declaration_validation: false,
            ..RegistryConfig::default()
        })
        .build()
        .unwrap();

    // 关闭校验后重复声明以后者为准
    assert_eq!(module.registry().len(), 1);
}

#[test]
fn test_scope_tracked_until_destroy() {
    let tracker = Arc::new(ScopeTracker::new());

    let module = ModuleRuntime::builder("feature")
        .declare_factory(footer_factory())
        .with_scope_tracker(tracker.clone())
        .build()
        .unwrap();

    let scope_id = module.handle().scope().id;
    assert!(tracker.is_active(scope_id));
    assert_eq!(tracker.active_count(), 1);

    module.destroy();
    assert!(!tracker.is_active(scope_id));
    assert_eq!(tracker.active_count(), 0);
}

#[test]
fn test_registry_config_from_json() {
    let config: RegistryConfig =
        serde_json::from_str(r#"{"warn_on_shadowed_parent": true}"#).unwrap();

    assert!(config.enable_declaration_validation);
    assert!(config.warn_on_shadowed_parent);
}

#[test]
fn test_describe_all_reports_local_factories() {
    let tracker = Arc::new(ScopeTracker::new());
    let module = ModuleRuntime::builder("app")
        .declare_factory(footer_factory())
        .with_scope_tracker(tracker)
        .build()
        .unwrap();

    let descriptors = module.registry().describe_all();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].selector, "app-footer");
    assert_eq!(descriptors[0].inputs.len(), 1);

    let json = descriptors[0].to_json().unwrap();
    assert!(json.contains("app-footer"));
}
