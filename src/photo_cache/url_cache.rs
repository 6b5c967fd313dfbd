//! Folder-keyed cache of signed photo URLs.

use bevy::log::{debug, info};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use super::expiry::{ExpiryExtractor, SignedUrlExpiry};
use super::{FolderId, PHOTO_CACHE_DURATION_MINUTES};
use crate::clock::SharedClock;

/// Anything the backend returns that carries signed photo URLs
pub trait CacheablePhoto {
    fn id(&self) -> i64;
    fn primary_url(&self) -> Option<&str>;
    fn thumbnail_url(&self) -> Option<&str>;
}

/// One photo's URLs as stored in the cache
#[derive(Debug, Clone, PartialEq)]
pub struct CachedPhoto {
    pub id: i64,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub cached_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// All cached photos of one folder
#[derive(Debug, Clone)]
pub struct CacheGroup {
    pub entries: Vec<CachedPhoto>,
    pub cached_at: DateTime<Utc>,
}

/// Cache occupancy, for logging and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub group_count: usize,
    pub total_entry_count: usize,
}

/// Why a group could not be served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Staleness {
    WindowElapsed,
    UrlExpired,
}

pub struct PhotoUrlCache {
    groups: HashMap<FolderId, CacheGroup>,
    freshness: Duration,
    clock: SharedClock,
    expiry: Box<dyn ExpiryExtractor>,
}

impl PhotoUrlCache {
    pub fn new(freshness: Duration, clock: SharedClock) -> Self {
        Self {
            groups: HashMap::new(),
            freshness,
            clock,
            expiry: Box::new(SignedUrlExpiry),
        }
    }

    /// Cache with the standard freshness window
    pub fn with_default_window(clock: SharedClock) -> Self {
        Self::new(Duration::minutes(PHOTO_CACHE_DURATION_MINUTES), clock)
    }

    /// Use a different scheme for reading URL expiry
    pub fn with_expiry(mut self, extractor: impl ExpiryExtractor + 'static) -> Self {
        self.expiry = Box::new(extractor);
        self
    }

    /// Cached photos of a folder, if the whole group is still usable.
    ///
    /// A stale group is evicted. `None` means the folder must be fetched again.
    pub fn get(&mut self, folder_id: FolderId) -> Option<&[CachedPhoto]> {
        let now = self.clock.now();
        let group = self.groups.get(&folder_id)?;

        if let Some(reason) = self.staleness(group, now) {
            debug!("Photo cache evicting folder {}: {:?}", folder_id, reason);
            self.groups.remove(&folder_id);
            return None;
        }

        debug!("Photo cache hit for folder {}", folder_id);
        self.groups.get(&folder_id).map(|g| g.entries.as_slice())
    }

    /// Store a folder's photos, replacing any previous group for it
    pub fn set<P: CacheablePhoto>(&mut self, folder_id: FolderId, photos: &[P]) {
        let now = self.clock.now();
        let default_expiry = now
            .checked_add_signed(self.freshness)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let entries: Vec<CachedPhoto> = photos
            .iter()
            .map(|photo| {
                let expires_at = photo
                    .primary_url()
                    .and_then(|url| self.expiry.extract_expiry(url))
                    .unwrap_or(default_expiry);
                CachedPhoto {
                    id: photo.id(),
                    url: photo.primary_url().map(str::to_owned),
                    thumbnail_url: photo.thumbnail_url().map(str::to_owned),
                    cached_at: now,
                    expires_at,
                }
            })
            .collect();

        debug!("Photo cache stored {} photos for folder {}", entries.len(), folder_id);
        self.groups.insert(
            folder_id,
            CacheGroup {
                entries,
                cached_at: now,
            },
        );
    }

    /// Evict one folder, or every folder when `folder_id` is `None`
    pub fn clear(&mut self, folder_id: Option<FolderId>) {
        match folder_id {
            Some(id) => {
                if self.groups.remove(&id).is_some() {
                    info!("Photo cache cleared for folder {}", id);
                }
            }
            None => {
                info!("Photo cache cleared ({} folders)", self.groups.len());
                self.groups.clear();
            }
        }
    }

    /// Whether a group is stored for the folder, fresh or not
    pub fn contains(&self, folder_id: FolderId) -> bool {
        self.groups.contains_key(&folder_id)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            group_count: self.groups.len(),
            total_entry_count: self.groups.values().map(|g| g.entries.len()).sum(),
        }
    }

    fn staleness(&self, group: &CacheGroup, now: DateTime<Utc>) -> Option<Staleness> {
        if now - group.cached_at >= self.freshness {
            return Some(Staleness::WindowElapsed);
        }
        if group.entries.iter().any(|e| e.expires_at <= now) {
            return Some(Staleness::UrlExpired);
        }
        None
    }
}
