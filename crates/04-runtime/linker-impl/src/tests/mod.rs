//! linker-impl 单元测试

mod module_tests;
