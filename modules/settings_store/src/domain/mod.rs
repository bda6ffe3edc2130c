//! Domain layer - store logic and collaborator traits

pub mod cache;
pub mod repository;
pub mod store;
pub mod validation;

pub use cache::SettingsCache;
pub use repository::SettingsRepository;
pub use store::{SettingHandle, SettingStore};
