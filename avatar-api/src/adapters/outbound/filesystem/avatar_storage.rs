use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::{models::AvatarFilename, ports::outbound::AvatarStorage, AvatarError};

const PARTIAL_PREFIX: &str = ".partial-";

/// Avatar files stored flat in a single directory.
#[derive(Debug, Clone)]
pub struct LocalAvatarStorage {
    dir: PathBuf,
}

impl LocalAvatarStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn init(&self) -> Result<(), AvatarError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|err| AvatarError::StorageWrite(format!("{}: {err}", self.dir.display())))?;

        tracing::info!("Avatar storage initialized at: {}", self.dir.display());
        Ok(())
    }

    fn path_of(&self, filename: &AvatarFilename) -> PathBuf {
        self.dir.join(filename.as_str())
    }
}

#[async_trait]
impl AvatarStorage for LocalAvatarStorage {
    async fn read(&self, filename: &AvatarFilename) -> Result<Vec<u8>, AvatarError> {
        fs::read(self.path_of(filename))
            .await
            .map_err(|err| AvatarError::StorageRead(format!("{filename}: {err}")))
    }

    /// Writes go to a hidden partial file first so readers never see a
    /// truncated avatar.
    async fn write(&self, filename: &AvatarFilename, bytes: &[u8]) -> Result<(), AvatarError> {
        let partial = self.dir.join(format!("{PARTIAL_PREFIX}{filename}"));
        let target = self.path_of(filename);

        let result: std::io::Result<()> = async {
            fs::write(&partial, bytes).await?;
            fs::rename(&partial, &target).await
        }
        .await;

        if let Err(err) = result {
            let _ = fs::remove_file(&partial).await;
            return Err(AvatarError::StorageWrite(format!("{filename}: {err}")));
        }

        Ok(())
    }

    async fn delete(&self, filename: &AvatarFilename) -> Result<(), AvatarError> {
        fs::remove_file(self.path_of(filename))
            .await
            .map_err(|err| AvatarError::StorageWrite(format!("{filename}: {err}")))
    }

    async fn list(&self) -> Result<Vec<AvatarFilename>, AvatarError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(AvatarError::StorageRead(format!(
                    "{}: {err}",
                    self.dir.display()
                )))
            }
        };

        let mut filenames = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| AvatarError::StorageRead(err.to_string()))?
        {
            let is_file = entry
                .file_type()
                .await
                .map(|file_type| file_type.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!("skipping non UTF-8 file in avatar storage");
                continue;
            };
            if name.starts_with(PARTIAL_PREFIX) {
                continue;
            }

            filenames.extend(AvatarFilename::parse(name));
        }

        Ok(filenames)
    }
}
