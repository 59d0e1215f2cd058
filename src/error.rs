//! Unified error types for the client.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// StartupError
// ---------------------------------------------------------------------------

/// Errors that abort the program before the command loop starts.
#[derive(Debug)]
pub enum StartupError {
    /// The running platform has no known shared-library extension.
    UnsupportedPlatform(String),
    /// Neither candidate location contained the native library.
    LibraryNotFound { searched: Vec<PathBuf> },
    /// The library file exists but could not be loaded.
    Load(libloading::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform(os) => write!(f, "unsupported platform: {os}"),
            Self::LibraryNotFound { searched } => {
                write!(f, "native library not found (searched")?;
                for path in searched {
                    write!(f, " {}", path.display())?;
                }
                write!(f, ")")
            }
            Self::Load(e) => write!(f, "failed to load native library: {e}"),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<libloading::Error> for StartupError {
    fn from(e: libloading::Error) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// ClientError
// ---------------------------------------------------------------------------

/// Errors raised by a native-client call itself.
///
/// A report carrying `request_status == false` is not a `ClientError`; it is
/// a plain value the caller inspects. This type covers the cases where the
/// call could not produce a report at all.
#[derive(Debug)]
pub enum ClientError {
    /// A required export was missing or the library rejected the lookup.
    Symbol(String, libloading::Error),
    /// The native call returned a null report pointer.
    NullResponse(&'static str),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name, e) => write!(f, "symbol `{name}` unavailable: {e}"),
            Self::NullResponse(name) => write!(f, "`{name}` returned no response"),
        }
    }
}

impl std::error::Error for ClientError {}
