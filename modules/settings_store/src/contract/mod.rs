//! Contract layer - public models, value codec and client trait
//!
//! This layer contains transport-agnostic models and the client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;
pub mod value;

pub use client::SettingsApi;
pub use error::SettingsError;
pub use model::Setting;
pub use value::SettingValue;
