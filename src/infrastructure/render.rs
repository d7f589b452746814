use crate::domain::ports::CodeRenderer;
use crate::error::{BookingError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Writes the payment URI to a file as the viewable artifact.
///
/// Anything that can turn a URI into an actual QR image can replace
/// this by implementing `CodeRenderer`.
pub struct FileRenderer {
    path: PathBuf,
}

impl FileRenderer {
    pub const DEFAULT_PATH: &'static str = "ticket_payment_code.txt";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl CodeRenderer for FileRenderer {
    async fn render(&self, uri: &str) -> Result<()> {
        tokio::fs::write(&self.path, uri).await.map_err(|e| {
            BookingError::Payment(format!(
                "could not write payment code to {}: {e}",
                self.path.display()
            ))
        })
    }
}
