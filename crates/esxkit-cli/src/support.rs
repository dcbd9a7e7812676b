//! Shared helpers for the command modules: opening project inputs
//! (directory or bundle) and resolving profiles. Unrecoverable input
//! errors print to stderr and exit 2; validation failures exit 1 from the
//! commands themselves.

use esxkit_model::unpack_project;
use esxkit_profile::{ProjectProfile, find_profile};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const BUNDLE_EXTENSION: &str = "esx";
pub const RENAMED_PROJECT_APPENDIX: &str = "__APs_RENAMED";

/// An opened project: either the directory the caller named, or a bundle
/// unpacked into a scratch directory that is removed on drop.
pub struct ProjectInput {
    dir: PathBuf,
    name: String,
    /// Set when the input was a bundle; the original path.
    bundle_path: Option<PathBuf>,
    scratch: Option<ScratchDir>,
}

impl ProjectInput {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bundle_path(&self) -> Option<&Path> {
        self.bundle_path.as_deref()
    }
}

struct ScratchDir {
    path: PathBuf,
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("esxkit-{name}-{}-{unique}", std::process::id()))
}

/// Open a project directory or unpack a bundle into a scratch directory.
pub fn open_project_or_exit(project: &str) -> ProjectInput {
    let path = PathBuf::from(project);
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| project.to_string());

    if path.is_dir() {
        return ProjectInput {
            dir: path,
            name,
            bundle_path: None,
            scratch: None,
        };
    }

    if path.extension().is_some_and(|ext| ext == BUNDLE_EXTENSION) {
        let dest = scratch_dir(&name);
        if let Err(err) = unpack_project(&path, &dest) {
            eprintln!("error: failed to unpack {}: {err}", path.display());
            std::process::exit(2);
        }
        return ProjectInput {
            dir: dest.clone(),
            name,
            bundle_path: Some(path),
            scratch: Some(ScratchDir { path: dest }),
        };
    }

    eprintln!("error: {} is neither a directory nor an .esx bundle", path.display());
    std::process::exit(2);
}

/// Resolve the active profile from a TOML file or the built-in registry.
pub fn resolve_profile_or_exit(profile: &str, profile_file: Option<&str>) -> ProjectProfile {
    if let Some(file) = profile_file {
        let text = fs::read_to_string(file).unwrap_or_else(|err| {
            eprintln!("error: failed to read profile file {file}: {err}");
            std::process::exit(2);
        });
        return ProjectProfile::from_toml_str(&text).unwrap_or_else(|err| {
            eprintln!("error: {err}");
            std::process::exit(2);
        });
    }

    find_profile(profile).unwrap_or_else(|| {
        eprintln!("error: unknown profile '{profile}'");
        std::process::exit(2);
    })
}

impl std::fmt::Debug for ProjectInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectInput")
            .field("dir", &self.dir)
            .field("name", &self.name)
            .field("bundle_path", &self.bundle_path)
            .field("scratch", &self.scratch.is_some())
            .finish()
    }
}
