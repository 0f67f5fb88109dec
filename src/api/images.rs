//! Product image downloads.

use crate::error::Result;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// ImageApi
// ---------------------------------------------------------------------------

/// Interface for the image endpoint. Unlike the JSON endpoints this path is
/// unversioned and the response is raw image bytes.
pub struct ImageApi<'a> {
    transport: &'a Transport,
}

impl<'a> ImageApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Download a product image scaled to the requested dimensions.
    ///
    /// The `security_token` comes from the product sheet that referenced
    /// the image.
    pub fn image(
        &self,
        file_id: i64,
        security_token: &str,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>> {
        self.transport.get_bytes(
            &format!("/Image/{}/{}", file_id, security_token),
            &[("width", width.to_string()), ("height", height.to_string())],
            "image/*",
        )
    }
}
