//! Shared test fixtures for the library's unit-test modules.
//!
//! Kept intentionally simple and std-only so unit tests can use these helpers
//! without introducing new dependencies.

use crate::client::FsuipcApi;
use crate::error::ClientError;
use crate::render::RenderSink;
use crate::types::{CallReport, ConnectionReport, FrequencyReport, VersionReport};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("fsuipc-cmd-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Scripted stand-in for the native client.
///
/// Each `*_response` slot holds the report the next call returns; a `None`
/// slot makes the call fail with a `ClientError`, standing in for a broken
/// native boundary. Every invocation is appended to `calls`.
#[derive(Default)]
pub struct ScriptedClient {
    pub calls: Mutex<Vec<String>>,
    pub open_response: Option<VersionReport>,
    pub close_response: Option<CallReport>,
    pub state_response: Option<ConnectionReport>,
    pub version_response: Option<VersionReport>,
    pub frequency_response: Option<FrequencyReport>,
    pub set_response: Option<CallReport>,
}

impl ScriptedClient {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn scripted<T: Clone>(&self, slot: &Option<T>) -> Result<T, ClientError> {
        slot.clone().ok_or(ClientError::NullResponse("scripted"))
    }
}

impl FsuipcApi for ScriptedClient {
    fn open_client(&self) -> Result<VersionReport, ClientError> {
        self.record("open".to_string());
        self.scripted(&self.open_response)
    }

    fn close_client(&self) -> Result<CallReport, ClientError> {
        self.record("close".to_string());
        self.scripted(&self.close_response)
    }

    fn connection_state(&self) -> Result<ConnectionReport, ClientError> {
        self.record("state".to_string());
        self.scripted(&self.state_response)
    }

    fn version_info(&self) -> Result<VersionReport, ClientError> {
        self.record("version".to_string());
        self.scripted(&self.version_response)
    }

    fn frequency_info(&self) -> Result<FrequencyReport, ClientError> {
        self.record("frequency".to_string());
        self.scripted(&self.frequency_response)
    }

    fn set_com1_frequency(&self, khz: i32) -> Result<CallReport, ClientError> {
        self.record(format!("set_com1 {khz}"));
        self.scripted(&self.set_response)
    }

    fn set_com2_frequency(&self, khz: i32) -> Result<CallReport, ClientError> {
        self.record(format!("set_com2 {khz}"));
        self.scripted(&self.set_response)
    }
}

/// Render sink that records lines instead of printing them.
#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }
}

impl RenderSink for RecordingSink {
    fn prompt(&self) {
        self.push("<prompt>".to_string());
    }

    fn section(&self, title: &str) {
        self.push(format!("{title}:"));
    }

    fn field(&self, key: &str, value: &str) {
        self.push(format!("{key}: {value}"));
    }

    fn activity(&self, text: &str) {
        self.push(text.to_string());
    }

    fn warn(&self, msg: &str) {
        self.push(msg.to_string());
    }

    fn error(&self, msg: &str) {
        self.push(format!("Error: {msg}"));
    }
}

/// Successful call report with the library's default message.
pub fn ok_report() -> CallReport {
    CallReport {
        request_status: true,
        err_message: "No error found".to_string(),
    }
}

/// Failed call report carrying a library error message.
pub fn failed_report(msg: &str) -> CallReport {
    CallReport {
        request_status: false,
        err_message: msg.to_string(),
    }
}

/// Successful version report for a connected FSX session.
pub fn fsx_version_report() -> VersionReport {
    VersionReport {
        request_status: true,
        version: "5.122c".to_string(),
        simulator_name: "FSX".to_string(),
        api_version: 2,
        err_message: String::new(),
    }
}
