use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    /// Writing the confirmation lines failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// PNG encoding or the file write behind it failed, including a missing output directory.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    /// The config could not be serialized for the log.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
