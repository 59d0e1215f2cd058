//! Native client boundary.
//!
//! All protocol work happens inside the prebuilt FSUIPC library; this module
//! owns the foreign-function surface around it. Every export hands back a
//! heap-allocated C report which we copy into an owned Rust value and return
//! to the library through `FreeMemory` before the call completes.

use crate::error::{ClientError, StartupError};
use crate::types::{
    com1_receive, com2_receive, format_fsuipc_version, simulator_name, CallReport,
    ConnectionReport, FrequencyReport, VersionReport,
};
use libloading::{Library, Symbol};
use std::ffi::{c_char, c_int, CStr};
use std::path::Path;

/// Operations exposed by the native FSUIPC client.
///
/// The command loop only talks to this trait, so tests can script responses
/// without a native library present. A `request_status == false` report is a
/// normal return value; `Err` means the call itself failed.
pub trait FsuipcApi {
    fn open_client(&self) -> Result<VersionReport, ClientError>;
    fn close_client(&self) -> Result<CallReport, ClientError>;
    fn connection_state(&self) -> Result<ConnectionReport, ClientError>;
    fn version_info(&self) -> Result<VersionReport, ClientError>;
    fn frequency_info(&self) -> Result<FrequencyReport, ClientError>;
    fn set_com1_frequency(&self, khz: i32) -> Result<CallReport, ClientError>;
    fn set_com2_frequency(&self, khz: i32) -> Result<CallReport, ClientError>;
}

// ---------------------------------------------------------------------------
// Raw report layout
// ---------------------------------------------------------------------------

// Field order and types mirror the library's exported C structs; the derived
// reports embed the base header as their first member.

#[repr(C)]
struct RawBase {
    request_status: bool,
    err_message: *const c_char,
}

#[repr(C)]
struct RawConnection {
    base: RawBase,
    status: u32,
}

#[repr(C)]
struct RawFrequencies {
    base: RawBase,
    frequency_flag: u8,
    frequency: [u32; 4],
}

#[repr(C)]
struct RawVersion {
    base: RawBase,
    simulator_type: u16,
    fsuipc_version: u32,
    api_version: u8,
}

fn message(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

fn call_report(raw: &RawBase) -> CallReport {
    CallReport {
        request_status: raw.request_status,
        err_message: message(raw.err_message),
    }
}

fn connection_report(raw: &RawConnection) -> ConnectionReport {
    ConnectionReport {
        request_status: raw.base.request_status,
        status: raw.status,
        err_message: message(raw.base.err_message),
    }
}

fn frequency_report(raw: &RawFrequencies) -> FrequencyReport {
    FrequencyReport {
        request_status: raw.base.request_status,
        frequency_flag: raw.frequency_flag,
        com1_rx: com1_receive(raw.frequency_flag),
        com2_rx: com2_receive(raw.frequency_flag),
        frequency: raw.frequency,
        err_message: message(raw.base.err_message),
    }
}

fn version_report(raw: &RawVersion) -> VersionReport {
    VersionReport {
        request_status: raw.base.request_status,
        version: format_fsuipc_version(raw.fsuipc_version),
        simulator_name: simulator_name(raw.simulator_type),
        api_version: raw.api_version,
        err_message: message(raw.base.err_message),
    }
}

// ---------------------------------------------------------------------------
// NativeClient
// ---------------------------------------------------------------------------

/// Client handle bound to a loaded native library.
///
/// Loading does not connect; `open_client` is a separate explicit call. The
/// handle is not thread-safe by the library's contract and is only ever used
/// from one logical flow at a time.
pub struct NativeClient {
    library: Library,
}

impl NativeClient {
    /// Load the native library from a resolved path.
    pub fn load(path: &Path) -> Result<Self, StartupError> {
        tracing::debug!(path = %path.display(), "loading native library");
        let library = unsafe { Library::new(path) }?;
        Ok(Self { library })
    }

    fn symbol<T>(&self, name: &'static str) -> Result<Symbol<'_, T>, ClientError> {
        unsafe { self.library.get(name.as_bytes()) }
            .map_err(|e| ClientError::Symbol(name.to_string(), e))
    }

    /// Copy a heap-allocated report out of the library and release it.
    ///
    /// Safety: `raw` must be a pointer just returned by `name`, and `convert`
    /// must copy everything it needs before this function frees the report.
    unsafe fn consume<T, R>(
        &self,
        name: &'static str,
        raw: *mut T,
        convert: impl FnOnce(&T) -> R,
    ) -> Result<R, ClientError> {
        if raw.is_null() {
            return Err(ClientError::NullResponse(name));
        }
        let report = convert(&*raw);
        match self.symbol::<unsafe extern "C" fn(*mut RawBase)>("FreeMemory") {
            Ok(free) => free(raw.cast()),
            Err(e) => tracing::warn!("leaking native report: {e}"),
        }
        Ok(report)
    }
}

impl FsuipcApi for NativeClient {
    fn open_client(&self) -> Result<VersionReport, ClientError> {
        tracing::debug!("OpenFSUIPCClient");
        let open = self.symbol::<unsafe extern "C" fn() -> *mut RawVersion>("OpenFSUIPCClient")?;
        unsafe { self.consume("OpenFSUIPCClient", open(), version_report) }
    }

    fn close_client(&self) -> Result<CallReport, ClientError> {
        tracing::debug!("CloseFSUIPCClient");
        let close = self.symbol::<unsafe extern "C" fn() -> *mut RawBase>("CloseFSUIPCClient")?;
        unsafe { self.consume("CloseFSUIPCClient", close(), call_report) }
    }

    fn connection_state(&self) -> Result<ConnectionReport, ClientError> {
        tracing::debug!("GetConnectionState");
        let state =
            self.symbol::<unsafe extern "C" fn() -> *mut RawConnection>("GetConnectionState")?;
        unsafe { self.consume("GetConnectionState", state(), connection_report) }
    }

    fn version_info(&self) -> Result<VersionReport, ClientError> {
        tracing::debug!("GetFSUIPCVersionInfo");
        let version =
            self.symbol::<unsafe extern "C" fn() -> *mut RawVersion>("GetFSUIPCVersionInfo")?;
        unsafe { self.consume("GetFSUIPCVersionInfo", version(), version_report) }
    }

    fn frequency_info(&self) -> Result<FrequencyReport, ClientError> {
        tracing::debug!("ReadFrequencyInfo");
        let read =
            self.symbol::<unsafe extern "C" fn() -> *mut RawFrequencies>("ReadFrequencyInfo")?;
        unsafe { self.consume("ReadFrequencyInfo", read(), frequency_report) }
    }

    fn set_com1_frequency(&self, khz: i32) -> Result<CallReport, ClientError> {
        tracing::debug!(khz, "SetCom1Frequency");
        let set =
            self.symbol::<unsafe extern "C" fn(c_int) -> *mut RawBase>("SetCom1Frequency")?;
        unsafe { self.consume("SetCom1Frequency", set(khz), call_report) }
    }

    fn set_com2_frequency(&self, khz: i32) -> Result<CallReport, ClientError> {
        tracing::debug!(khz, "SetCom2Frequency");
        let set =
            self.symbol::<unsafe extern "C" fn(c_int) -> *mut RawBase>("SetCom2Frequency")?;
        unsafe { self.consume("SetCom2Frequency", set(khz), call_report) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn message_handles_null_and_text() {
        assert_eq!(message(ptr::null()), "");
        let text = CString::new("FSUIPC not connected").unwrap();
        assert_eq!(message(text.as_ptr()), "FSUIPC not connected");
    }

    #[test]
    fn version_report_decodes_raw_fields() {
        let err = CString::new("No error found").unwrap();
        let raw = RawVersion {
            base: RawBase {
                request_status: true,
                err_message: err.as_ptr(),
            },
            simulator_type: 8,
            fsuipc_version: 0x5122_0003,
            api_version: 2,
        };
        let report = version_report(&raw);
        assert!(report.request_status);
        assert_eq!(report.version, "5.122c");
        assert_eq!(report.simulator_name, "FSX");
        assert_eq!(report.api_version, 2);
    }

    #[test]
    fn frequency_report_derives_receive_indicators() {
        let raw = RawFrequencies {
            base: RawBase {
                request_status: true,
                err_message: ptr::null(),
            },
            frequency_flag: crate::types::FLAG_COM1_RECEIVE,
            frequency: [118_000_000, 118_000_500, 121_500_000, 121_500_750],
        };
        let report = frequency_report(&raw);
        assert!(report.com1_rx);
        assert!(!report.com2_rx);
        assert_eq!(report.frequency[3], 121_500_750);
    }

    #[test]
    fn failed_call_keeps_the_library_message() {
        let err = CString::new("IPC request contains bad data").unwrap();
        let raw = RawBase {
            request_status: false,
            err_message: err.as_ptr(),
        };
        let report = call_report(&raw);
        assert!(!report.request_status);
        assert_eq!(report.err_message, "IPC request contains bad data");
    }
}
