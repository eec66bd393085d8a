// Infrastructure Layer - 跨模块基础设施

pub mod event_bus;

pub use event_bus::{AppEvent, EventBus};
