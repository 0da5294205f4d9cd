use crate::error::Result;

/// Narrow interface over a session-scoped key-value store.
///
/// Values are opaque serialized blobs. Implementations take `&self`; any
/// interior mutability is theirs to manage.
pub trait SessionStorage {
    /// Read the blob stored under `key`.
    /// Returns Ok(None) when nothing has been stored yet.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: SessionStorage + ?Sized> SessionStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}
