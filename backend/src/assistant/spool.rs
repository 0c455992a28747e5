//! Transient on-disk copy of synthesized audio.

use tempfile::NamedTempFile;

use crate::errors::AppError;

/// Audio written to a temporary `.mp3` file. The file is removed on drop.
pub struct SpooledAudio {
    file: NamedTempFile,
}

impl SpooledAudio {
    pub async fn write(audio: &[u8]) -> Result<Self, AppError> {
        let file = tempfile::Builder::new()
            .prefix("gwen_")
            .suffix(".mp3")
            .tempfile()?;
        tokio::fs::write(file.path(), audio).await?;
        Ok(Self { file })
    }

    /// Read the audio back for the response body, then delete the file.
    pub async fn into_bytes(self) -> Result<Vec<u8>, AppError> {
        let bytes = tokio::fs::read(self.file.path()).await?;
        Ok(bytes)
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}
