//! File system utilities for bundling.

use crate::bundler::error::{Error, Result};
use std::path::Path;
use tokio::fs;

/// Copies a regular file, overwriting the destination.
///
/// Creates the destination's parent directory if it is missing. Fails if
/// the source is not a regular file. Errors carry both paths.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let copy_error = |source| Error::AssetCopy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(from).await.map_err(copy_error)?;
    if !metadata.is_file() {
        return Err(copy_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).await.map_err(copy_error)?;
    }
    fs::copy(from, to).await.map_err(copy_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn copy_overwrites_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("index.html");
        let to = dir.path().join("dist").join("index.html");
        std::fs::write(&from, "<h1>new</h1>").unwrap();
        std::fs::create_dir_all(to.parent().unwrap()).unwrap();
        std::fs::write(&to, "<h1>old, and longer than the new one</h1>").unwrap();

        copy_file(&from, &to).await.unwrap();

        assert_eq!(std::fs::read(&to).unwrap(), b"<h1>new</h1>");
    }

    #[tokio::test]
    async fn copy_creates_missing_destination_dir() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("style.css");
        let to = dir.path().join("dist").join("style.css");
        std::fs::write(&from, "body { margin: 0 }").unwrap();

        copy_file(&from, &to).await.unwrap();

        assert!(to.is_file());
    }

    #[tokio::test]
    async fn missing_source_names_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("style.css");
        let to = dir.path().join("dist").join("style.css");

        let err = copy_file(&from, &to).await.unwrap_err();

        assert!(matches!(&err, Error::AssetCopy { from: f, .. } if f == &from));
        assert!(!to.exists());
    }

    #[tokio::test]
    async fn directory_source_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let to = dir.path().join("out");

        let err = copy_file(dir.path(), &to).await.unwrap_err();

        assert!(matches!(err, Error::AssetCopy { .. }));
    }
}
