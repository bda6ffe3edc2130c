//! Contract models
//!
//! Pure domain models - NO serde derives.

use chrono::{DateTime, Utc};

use super::value::{self, SettingValue};

/// A named, persisted scalar configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    /// Unique setting name (e.g. "site_name")
    pub name: String,
    /// Encoded value blob as stored in the table; `None` when the row holds
    /// no value
    pub raw_value: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Setting {
    /// Decode the stored blob with scalar coercion.
    ///
    /// An empty or missing blob yields `None`.
    pub fn value(&self) -> Option<SettingValue> {
        self.raw_value.as_deref().and_then(value::decode)
    }

    /// Prettier version of the name: `site_name` becomes `Site Name`.
    pub fn title(&self) -> String {
        self.name
            .split(|c: char| c == '_' || c == ' ')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
