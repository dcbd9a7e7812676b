//! Bundle container I/O.
//!
//! A project bundle is a zip archive of JSON documents and floor-plan
//! images. Unpacking rejects entries that would escape the destination
//! directory; repacking archives a project directory back into a bundle.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error("archive error: {0}")]
    Archive(String),

    #[error("archive entry escapes the destination directory: {0}")]
    UnsafeEntry(String),
}

impl BundleError {
    fn io(path: &Path, source: io::Error) -> Self {
        BundleError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Extract a bundle into a destination directory.
pub fn unpack_project(bundle_path: &Path, dest_dir: &Path) -> Result<(), BundleError> {
    let file = File::open(bundle_path).map_err(|e| BundleError::io(bundle_path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| BundleError::Archive(e.to_string()))?;

    fs::create_dir_all(dest_dir).map_err(|e| BundleError::io(dest_dir, e))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| BundleError::Archive(e.to_string()))?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| BundleError::UnsafeEntry(entry.name().to_string()))?;
        let target = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| BundleError::io(&target, e))?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| BundleError::io(parent, e))?;
        }
        let mut out = File::create(&target).map_err(|e| BundleError::io(&target, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| BundleError::io(&target, e))?;
    }

    Ok(())
}

/// Archive a project directory into a bundle file.
pub fn repack_project(project_dir: &Path, bundle_path: &Path) -> Result<(), BundleError> {
    let file = File::create(bundle_path).map_err(|e| BundleError::io(bundle_path, e))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    let mut pending = vec![project_dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir).map_err(|e| BundleError::io(&dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| BundleError::io(&dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            let relative = path
                .strip_prefix(project_dir)
                .map_err(|_| BundleError::UnsafeEntry(path.display().to_string()))?;
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            writer
                .start_file(name, options)
                .map_err(|e| BundleError::Archive(e.to_string()))?;
            let mut input = File::open(&path).map_err(|e| BundleError::io(&path, e))?;
            io::copy(&mut input, &mut writer).map_err(|e| BundleError::io(&path, e))?;
        }
    }

    writer
        .finish()
        .map_err(|e| BundleError::Archive(e.to_string()))?;
    Ok(())
}
