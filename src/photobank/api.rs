//! Photo bank backend calls.
//!
//! The backend answers plain JSON over HTTPS. List endpoints return either a
//! bare array or an object wrapping the array, depending on the endpoint
//! version, so both shapes are accepted.

use serde::{Deserialize, Serialize};

use crate::photo_cache::{CacheablePhoto, FolderId};

/// A photo bank folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoFolder {
    pub id: FolderId,
    pub folder_name: String,
    #[serde(default)]
    pub folder_type: Option<String>,
    #[serde(default)]
    pub photo_count: Option<u32>,
}

impl PhotoFolder {
    /// Folder the backend fills with photos rejected by technical sorting
    pub fn is_tech_rejects(&self) -> bool {
        self.folder_type.as_deref() == Some("tech_rejects")
    }
}

/// A photo as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: i64,
    pub file_name: String,
    #[serde(default)]
    pub s3_url: Option<String>,
    #[serde(default)]
    pub thumbnail_s3_url: Option<String>,
    #[serde(default)]
    pub is_raw: bool,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PhotoRecord {
    /// RAW photos get their preview generated later on the server
    pub fn awaiting_thumbnail(&self) -> bool {
        self.is_raw && self.thumbnail_s3_url.is_none()
    }
}

impl CacheablePhoto for PhotoRecord {
    fn id(&self) -> i64 {
        self.id
    }

    fn primary_url(&self) -> Option<&str> {
        self.s3_url.as_deref()
    }

    fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_s3_url.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PhotosResponse {
    Bare(Vec<PhotoRecord>),
    Wrapped {
        #[serde(default)]
        photos: Vec<PhotoRecord>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FoldersResponse {
    Bare(Vec<PhotoFolder>),
    Wrapped {
        #[serde(default)]
        folders: Vec<PhotoFolder>,
    },
}

/// Parse a photo list response body
pub fn parse_photos(body: &str) -> Result<Vec<PhotoRecord>, String> {
    match serde_json::from_str(body) {
        Ok(PhotosResponse::Bare(photos)) | Ok(PhotosResponse::Wrapped { photos }) => Ok(photos),
        Err(e) => Err(format!("Failed to parse photo list: {}", e)),
    }
}

/// Parse a folder list response body
pub fn parse_folders(body: &str) -> Result<Vec<PhotoFolder>, String> {
    match serde_json::from_str(body) {
        Ok(FoldersResponse::Bare(folders)) | Ok(FoldersResponse::Wrapped { folders }) => {
            Ok(folders)
        }
        Err(e) => Err(format!("Failed to parse folder list: {}", e)),
    }
}

fn get_body(base_url: &str, user_id: i64, query: &[(&str, String)]) -> Result<String, String> {
    let mut request = ureq::get(base_url)
        .set("User-Agent", "photostudio")
        .set("X-User-Id", &user_id.to_string());
    for (key, value) in query {
        request = request.query(key, value);
    }

    match request.call() {
        Ok(response) => response
            .into_string()
            .map_err(|e| format!("Failed to read response: {}", e)),
        Err(ureq::Error::Status(code, _)) => Err(format!("Backend returned HTTP {}", code)),
        Err(e) => Err(format!("Request failed: {}", e)),
    }
}

/// Fetch the photos of one folder
pub fn fetch_folder_photos(
    base_url: &str,
    user_id: i64,
    folder_id: FolderId,
) -> Result<Vec<PhotoRecord>, String> {
    let body = get_body(
        base_url,
        user_id,
        &[
            ("action", "list_photos".to_string()),
            ("folder_id", folder_id.to_string()),
        ],
    )?;
    parse_photos(&body)
}

/// Fetch the user's folders
pub fn fetch_folders(base_url: &str, user_id: i64) -> Result<Vec<PhotoFolder>, String> {
    let body = get_body(base_url, user_id, &[("action", "list_folders".to_string())])?;
    parse_folders(&body)
}
