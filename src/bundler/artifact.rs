//! Files that make up a finished bundle.

use crate::bundler::{Result, Settings, builder::calculate_sha256, error::ErrorExt};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Role of a file in the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Compiled WebAssembly module (`.wasm`).
    Module,
    /// JavaScript glue and its type declarations (`.js`, `.d.ts`).
    Glue,
    /// Package manifest written by the compiler (`package.json`).
    Manifest,
    /// One of the copied static assets.
    Asset,
    /// Anything else the compiler left behind (README, .gitignore, ...).
    Other,
}

impl ArtifactKind {
    /// Classifies a file in the output directory by name.
    ///
    /// `assets` are the static asset names copied into the bundle; they win
    /// over extension-based classification.
    pub fn classify(path: &Path, assets: &[String]) -> Self {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return ArtifactKind::Other;
        };

        if assets.iter().any(|asset| asset == name) {
            ArtifactKind::Asset
        } else if name.ends_with(".wasm") {
            ArtifactKind::Module
        } else if name.ends_with(".js") || name.ends_with(".d.ts") {
            ArtifactKind::Glue
        } else if name == "package.json" {
            ArtifactKind::Manifest
        } else {
            ArtifactKind::Other
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArtifactKind::Module => "module",
            ArtifactKind::Glue => "glue",
            ArtifactKind::Manifest => "manifest",
            ArtifactKind::Asset => "asset",
            ArtifactKind::Other => "other",
        };
        f.pad(s)
    }
}

/// One file in the output directory after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledArtifact {
    /// What the file is.
    pub kind: ArtifactKind,
    /// Location of the file.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the contents.
    pub checksum: String,
}

/// Result of a successful bundle run.
#[derive(Debug, Clone)]
pub struct BundleOutput {
    /// Output directory holding the bundle.
    pub out_dir: PathBuf,
    /// Files in the output directory, sorted by path.
    pub artifacts: Vec<BundledArtifact>,
}

impl BundleOutput {
    /// Artifacts of the given kind.
    pub fn of_kind(&self, kind: ArtifactKind) -> impl Iterator<Item = &BundledArtifact> {
        self.artifacts.iter().filter(move |a| a.kind == kind)
    }
}

/// Lists the regular files in the output directory with size and checksum.
///
/// Nested directories (wasm-bindgen `snippets/`) are walked too. Results are
/// sorted by path. The listing is informational: entries that cannot be
/// read are left out and logged at debug level.
pub async fn discover_artifacts(settings: &Settings) -> Vec<BundledArtifact> {
    let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(settings.out_dir())
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    paths.sort();

    describe_artifacts(paths, settings.assets()).await
}

async fn describe_artifacts(paths: Vec<PathBuf>, assets: &[String]) -> Vec<BundledArtifact> {
    let mut artifacts = Vec::with_capacity(paths.len());
    for path in paths {
        match describe_artifact(path, assets).await {
            Ok(artifact) => artifacts.push(artifact),
            Err(e) => log::debug!("Skipping artifact: {e}"),
        }
    }
    artifacts
}

async fn describe_artifact(path: PathBuf, assets: &[String]) -> Result<BundledArtifact> {
    let size = tokio::fs::metadata(&path)
        .await
        .fs_context("reading artifact metadata", &path)?
        .len();
    let checksum = calculate_sha256(&path).await?;
    let kind = ArtifactKind::classify(&path, assets);

    log::debug!("{kind:>8} {} ({size} bytes, sha256 {checksum})", path.display());
    Ok(BundledArtifact {
        kind,
        path,
        size,
        checksum,
    })
}
