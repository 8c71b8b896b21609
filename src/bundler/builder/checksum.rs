//! Artifact checksum calculation.
//!
//! SHA-256 of single files and of whole directory trees, used to describe
//! bundle contents and to compare two runs of the bundler.

use crate::{bail, bundler::Result, bundler::error::ErrorExt};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Calculates SHA256 checksum of a file or directory.
///
/// For directories every file is hashed together with its relative path,
/// in sorted order, so two trees with the same files and contents hash the
/// same regardless of creation order.
pub async fn calculate_sha256(path: &Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading metadata", path)?;

    if metadata.is_file() {
        calculate_file_sha256(path).await
    } else if metadata.is_dir() {
        calculate_directory_sha256(path).await
    } else {
        bail!("Path is neither file nor directory: {}", path.display())
    }
}

async fn calculate_file_sha256(file_path: &Path) -> Result<String> {
    let mut hasher = Sha256::new();
    hash_file_into(&mut hasher, file_path).await?;
    Ok(format!("{:x}", hasher.finalize()))
}

async fn calculate_directory_sha256(dir_path: &Path) -> Result<String> {
    let mut entries = Vec::new();
    for entry in walkdir::WalkDir::new(dir_path).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() {
            entries.push(entry.into_path());
        }
    }
    entries.sort();

    let mut hasher = Sha256::new();
    for path in entries {
        if let Ok(rel_path) = path.strip_prefix(dir_path) {
            hasher.update(rel_path.to_string_lossy().as_bytes());
            // Separator so "a" + "bc" and "ab" + "c" differ.
            hasher.update([0u8]);
        }
        hash_file_into(&mut hasher, &path).await?;
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Streams a file into the hasher in 8KB chunks.
async fn hash_file_into(hasher: &mut Sha256, file_path: &Path) -> Result<()> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(())
}
