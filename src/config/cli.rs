use crate::core::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Storage rooted at a local output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        storage.write_file("rankings.json", b"{}").await.unwrap();
        let data = tokio::fs::read(base.join("rankings.json")).await.unwrap();

        assert_eq!(data, b"{}");
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("rankings.csv", b"old").await.unwrap();
        storage.write_file("rankings.csv", b"new").await.unwrap();

        let data = tokio::fs::read(temp_dir.path().join("rankings.csv")).await.unwrap();
        assert_eq!(data, b"new");
    }
}
