//! Location store: CRUD over a collection persisted as a single blob.
//!
//! Every mutation reloads the full collection, applies the change and writes
//! the whole collection back. There is no index; lookups scan in insertion
//! order.

use tracing::{info, warn};

use crate::blob::FileBlobStore;
use crate::config::{DEFAULT_STORE_KEY, StoreConfig};
use crate::error::{BlobError, Result, StoreError, ValidationError};
use crate::location::{Location, LocationPatch, Position, generate_id, normalize_name};
use crate::traits::BlobStore;

/// Result of reading the persisted collection.
#[derive(Debug)]
pub struct Snapshot {
    /// Locations in insertion order.
    pub locations: Vec<Location>,
    /// Set when the blob was present but unreadable; `locations` is then empty.
    pub warning: Option<StoreError>,
}

impl Snapshot {
    fn clean(locations: Vec<Location>) -> Self {
        Self {
            locations,
            warning: None,
        }
    }

    fn corrupt(reason: String) -> Self {
        Self {
            locations: Vec::new(),
            warning: Some(StoreError::CorruptData { reason }),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self.warning, Some(StoreError::CorruptData { .. }))
    }
}

#[derive(Debug)]
pub struct LocationStore<B> {
    blobs: B,
    key: String,
}

impl LocationStore<FileBlobStore> {
    /// File-backed store under `config.data_dir`, keyed by `config.key`.
    pub fn open(config: &StoreConfig) -> Self {
        Self::with_key(FileBlobStore::new(&config.data_dir), config.key.clone())
    }
}

impl<B: BlobStore> LocationStore<B> {
    pub fn new(blobs: B) -> Self {
        Self::with_key(blobs, DEFAULT_STORE_KEY)
    }

    pub fn with_key(blobs: B, key: impl Into<String>) -> Self {
        Self {
            blobs,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Reads the full collection.
    ///
    /// A missing blob is an empty collection. A blob that is not text or does
    /// not parse is also reported as empty, with a `CorruptData` warning
    /// attached.
    pub fn load_all(&self) -> Result<Snapshot> {
        let raw = match self.blobs.read_blob(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Snapshot::clean(Vec::new())),
            Err(err @ BlobError::NotUtf8 { .. }) => return Ok(self.corrupt(err.to_string())),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<Vec<Location>>(&raw) {
            Ok(locations) => Ok(Snapshot::clean(locations)),
            Err(err) => Ok(self.corrupt(err.to_string())),
        }
    }

    fn corrupt(&self, reason: String) -> Snapshot {
        warn!(key = %self.key, reason = %reason, "stored locations are corrupt, using empty collection");
        Snapshot::corrupt(reason)
    }

    /// All locations in insertion order.
    pub fn list(&self) -> Result<Vec<Location>> {
        Ok(self.load_all()?.locations)
    }

    /// Replaces the persisted collection with `locations` in one write.
    pub fn save_all(&self, locations: &[Location]) -> Result<()> {
        let raw = serde_json::to_string(locations)?;
        self.blobs.write_blob(&self.key, &raw)?;
        Ok(())
    }

    pub fn add(
        &self,
        name: &str,
        color: impl Into<String>,
        position: Option<Position>,
    ) -> Result<Location> {
        let name = normalize_name(name)?;
        let position = position.ok_or(ValidationError::MissingPosition)?;
        position.validate()?;

        let mut locations = self.load_all()?.locations;

        let mut id = generate_id();
        while locations.iter().any(|location| location.id == id) {
            id = generate_id();
        }

        let location = Location {
            id,
            name,
            lat: position.lat,
            lng: position.lng,
            color: color.into(),
        };
        locations.push(location.clone());
        self.save_all(&locations)?;

        info!(id = %location.id, name = %location.name, "added location");
        Ok(location)
    }

    /// Merges `patch` into the location with `id`, keeping unpatched fields.
    pub fn update(&self, id: &str, patch: LocationPatch) -> Result<Location> {
        let name = patch.name.as_deref().map(normalize_name).transpose()?;
        if let Some(position) = &patch.position {
            position.validate()?;
        }

        let mut locations = self.load_all()?.locations;
        let location = locations
            .iter_mut()
            .find(|location| location.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        if let Some(name) = name {
            location.name = name;
        }
        if let Some(color) = patch.color {
            location.color = color;
        }
        if let Some(position) = patch.position {
            location.set_position(position);
        }
        let updated = location.clone();

        self.save_all(&locations)?;

        info!(id = %updated.id, "updated location");
        Ok(updated)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Location>> {
        Ok(self
            .load_all()?
            .locations
            .into_iter()
            .find(|location| location.id == id))
    }

    /// Deletes the location with `id` and returns it.
    pub fn remove(&self, id: &str) -> Result<Location> {
        let mut locations = self.load_all()?.locations;
        let index = locations
            .iter()
            .position(|location| location.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        let removed = locations.remove(index);
        self.save_all(&locations)?;

        info!(id = %removed.id, "removed location");
        Ok(removed)
    }
}
