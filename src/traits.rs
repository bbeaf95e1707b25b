//! Seams between the core and its collaborators.
//!
//! The planner only needs something with a position; persistence and origin
//! acquisition are supplied by the embedding application.

use crate::error::{BlobError, OriginError};
use crate::location::Position;

/// Anything that can be placed on a route.
pub trait Located {
    fn position(&self) -> Position;
}

impl Located for Position {
    fn position(&self) -> Position {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn position(&self) -> Position {
        (**self).position()
    }
}

/// A string-keyed slot holding one serialized value per key.
pub trait BlobStore {
    /// Returns `None` when nothing has been written under `key`.
    fn read_blob(&self, key: &str) -> Result<Option<String>, BlobError>;

    /// Replaces the value under `key` in a single write.
    fn write_blob(&self, key: &str, value: &str) -> Result<(), BlobError>;
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn read_blob(&self, key: &str) -> Result<Option<String>, BlobError> {
        (**self).read_blob(key)
    }

    fn write_blob(&self, key: &str, value: &str) -> Result<(), BlobError> {
        (**self).write_blob(key, value)
    }
}

/// One-shot source of the user's current position.
pub trait OriginProvider {
    fn current_position(&self) -> Result<Position, OriginError>;
}
