//! Native library location.
//!
//! The FSUIPC protocol work lives in a prebuilt shared library. This module
//! only decides which file to hand to the loader: a platform-specific file
//! name probed in two conventional locations.

use crate::error::StartupError;
use std::env;
use std::path::{Path, PathBuf};

/// File stem shared by all platform builds of the native library.
const LIBRARY_STEM: &str = "libfsuipc";

/// Platform families with a known shared-library extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    /// Detect the compile-target platform family.
    pub fn current() -> Result<Self, StartupError> {
        Self::from_os_name(env::consts::OS)
    }

    /// Map an `std::env::consts::OS` name to a platform family.
    pub fn from_os_name(os: &str) -> Result<Self, StartupError> {
        match os {
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::MacOs),
            "linux" | "freebsd" | "netbsd" | "openbsd" => Ok(Self::Unix),
            other => Err(StartupError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Shared-library file extension for this platform family.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Windows => "dll",
            Self::MacOs => "dylib",
            Self::Unix => "so",
        }
    }

    /// Library file name for this platform family.
    pub fn library_file_name(self) -> String {
        format!("{LIBRARY_STEM}.{}", self.extension())
    }
}

/// Locate the native library relative to the running executable.
///
/// Probes the executable's own directory first, then a `bin/` directory one
/// level up (the conventional build-output layout). Resolution never loads
/// or connects; it only yields a path.
pub fn locate() -> Result<PathBuf, StartupError> {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    locate_from(&exe_dir, Platform::current()?)
}

/// Locate the native library relative to an explicit base directory.
pub fn locate_from(base_dir: &Path, platform: Platform) -> Result<PathBuf, StartupError> {
    let file_name = platform.library_file_name();
    let adjacent = base_dir.join(&file_name);
    let build_output = base_dir.join("..").join("bin").join(&file_name);

    for candidate in [&adjacent, &build_output] {
        tracing::debug!(path = %candidate.display(), "probing native library");
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    Err(StartupError::LibraryNotFound {
        searched: vec![adjacent, build_output],
    })
}
