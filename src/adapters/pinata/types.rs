//! Pinata API Types
//!
//! Response structures for the pinFileToIPFS / pinJSONToIPFS endpoints.

use serde::{Deserialize, Serialize};

/// Response body of both pin endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PinResponse {
    /// CID of the pinned content
    pub ipfs_hash: String,
    #[serde(default)]
    pub pin_size: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub is_duplicate: Option<bool>,
}

impl PinResponse {
    /// Public gateway URI for the pinned content
    pub fn gateway_uri(&self, gateway_url: &str) -> String {
        format!("{}/{}", gateway_url.trim_end_matches('/'), self.ipfs_hash)
    }
}

/// Best-effort MIME type from a file name, used for local uploads
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
