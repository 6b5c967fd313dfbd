//! In-memory cache of signed photo URLs, grouped by folder.
//!
//! Signed URLs handed out by the backend stop working after a while, so a
//! cached folder is only served while the whole group is fresh and none of its
//! URLs has expired. Otherwise the group is dropped and the caller fetches the
//! folder again. Expiry is checked lazily on read; the cache runs no timers.
//!
//! ## Module Structure
//!
//! - [`expiry`] - Reading the expiry time out of a signed URL
//! - [`url_cache`] - `PhotoUrlCache` and its entry types

mod expiry;
mod url_cache;


pub use expiry::{ExpiryExtractor, SignedUrlExpiry};
pub use url_cache::{CacheGroup, CacheStats, CacheablePhoto, CachedPhoto, PhotoUrlCache};

/// How long a cached folder is served before it is considered stale
pub const PHOTO_CACHE_DURATION_MINUTES: i64 = 50;

/// Backend folder identifier
pub type FolderId = i64;
