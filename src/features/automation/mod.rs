pub mod automation_service;
pub mod pacer;

pub use automation_service::AutomationService;
pub use pacer::Pacer;
