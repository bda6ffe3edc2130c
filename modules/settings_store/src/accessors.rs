//! Generated accessors for known setting names.
//!
//! Instead of resolving arbitrary attribute names at runtime, consumers
//! declare their setting names once and get one accessor method per name,
//! each returning a [`SettingHandle`](crate::SettingHandle) bound to that
//! name.

/// Declare a settings facade with one accessor method per known name.
///
/// Each generated method is named after its setting and returns a
/// [`SettingHandle`](crate::SettingHandle), so reads and writes go through
/// the same two store operations as explicit calls.
///
/// ```
/// use settings_store::{declare_settings, SettingsError};
///
/// declare_settings! {
///     pub struct SiteSettings {
///         site_name,
///         activity_show_limit,
///     }
/// }
///
/// async fn demo(settings: &SiteSettings) -> Result<(), SettingsError> {
///     settings.site_name().set("Acme").await?;
///     assert!(settings.site_name().get().await?.is_some());
///     Ok(())
/// }
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! declare_settings {
    ($vis:vis struct $name:ident { $($setting:ident),* $(,)? }) => {
        $vis struct $name {
            store: ::std::sync::Arc<$crate::SettingStore>,
        }

        impl $name {
            /// Bind the declared accessors to a store.
            $vis fn new(store: ::std::sync::Arc<$crate::SettingStore>) -> Self {
                Self { store }
            }

            /// The underlying store.
            $vis fn store(&self) -> &$crate::SettingStore {
                &self.store
            }

            $(
                $vis fn $setting(&self) -> $crate::SettingHandle<'_> {
                    self.store.entry(stringify!($setting))
                }
            )*
        }
    };
}
