//! Configuration module

mod site;

pub use site::AutopostConfig;
pub use site::GitConfig;
pub use site::SourceConfig;
pub use site::DEFAULT_TOPICS;
