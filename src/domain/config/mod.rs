mod automation_config;

pub use automation_config::AutomationConfig;
