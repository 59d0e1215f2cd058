//! Interactive command loop over the native client.
//!
//! One session per process run. All command handling is sequential; the only
//! concurrency is the blocking stdin read, which runs on a dedicated blocking
//! slot so the loop can still observe a stop request between reads.

use crate::build_info;
use crate::client::FsuipcApi;
use crate::commands::{parse_command, ComChannel, CommandAction, COMMANDS};
use crate::render::RenderSink;
use crate::types::{connection_label, format_mhz_from_hz, format_mhz_from_khz};
use std::io;
use tokio::task::JoinHandle;

/// Result of one blocking read from stdin.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Operator submitted a full line.
    Line(String),
    /// Stdin reached end-of-input.
    Eof,
    /// An interrupt signal arrived while waiting for input.
    Interrupted,
}

/// Read one line of operator input on the blocking pool.
///
/// The caller awaits this under a `select!` with the interrupt signal, so a
/// stop request is observed at the next loop iteration rather than cutting a
/// read short.
pub async fn read_input_line() -> io::Result<ReadOutcome> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => Ok(ReadOutcome::Eof),
            Ok(_) => Ok(ReadOutcome::Line(
                line.trim_end_matches(['\n', '\r']).to_string(),
            )),
            Err(e) => Err(e),
        }
    })
    .await
    .map_err(io::Error::other)?
}

/// One interactive session owning the client handle and its lifecycle state.
pub struct Session<C, R> {
    client: C,
    render: R,
    running: bool,
    auto_refresh: bool,
    refresh_task: Option<JoinHandle<()>>,
}

impl<C: FsuipcApi, R: RenderSink> Session<C, R> {
    pub fn new(client: C, render: R) -> Self {
        Self {
            client,
            render,
            running: false,
            auto_refresh: false,
            refresh_task: None,
        }
    }

    /// Whether the loop will keep reading input.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run the read-dispatch-print loop until `exit`, end-of-input, or an
    /// interrupt signal. Always returns with exit-worthy cleanup done.
    pub async fn run(&mut self) -> io::Result<()> {
        self.running = true;
        self.banner();

        while self.running {
            self.render.prompt();
            let outcome = tokio::select! {
                line = read_input_line() => line?,
                _ = tokio::signal::ctrl_c() => ReadOutcome::Interrupted,
            };
            match outcome {
                ReadOutcome::Line(line) => self.dispatch(&line),
                ReadOutcome::Eof | ReadOutcome::Interrupted => self.stop(),
            }
        }

        Ok(())
    }

    /// Parse and handle one line of input. Blank lines are ignored.
    pub fn dispatch(&mut self, input: &str) {
        let Some(action) = parse_command(input) else {
            return;
        };
        self.handle(action);
    }

    fn handle(&mut self, action: CommandAction) {
        match action {
            CommandAction::Connect => self.connect(),
            CommandAction::Disconnect => self.disconnect(),
            CommandAction::Status => self.status(),
            CommandAction::Version => self.version(),
            CommandAction::Frequency => self.frequency(),
            CommandAction::SetFrequency { channel, khz } => self.set_frequency(channel, khz),
            CommandAction::FrequencyUsage(channel) => {
                let name = channel.command_name();
                self.render
                    .warn(&format!("Usage: {name} <khz> (example: {name} 122800)"));
            }
            CommandAction::InvalidFrequency(_) => {
                self.render.warn("invalid frequency value");
            }
            CommandAction::Help => self.help(),
            CommandAction::Quit => self.stop(),
            CommandAction::Unknown(cmd) => {
                self.render
                    .warn(&format!("unknown command: {cmd} (type 'help' to list commands)"));
            }
        }
    }

    fn banner(&self) {
        self.render
            .section(&format!("FSUIPC client {}", build_info::startup_metadata_line()));
        self.render.activity("type 'help' or 'h' to list commands");
    }

    fn help(&self) {
        self.render.section("commands");
        for command in &COMMANDS {
            self.render.field(command.usage, command.description);
        }
    }

    fn connect(&self) {
        match self.client.open_client() {
            Ok(report) if report.request_status => {
                self.render.section("connected");
                self.render.field("version", &report.version);
                self.render.field("simulator", &report.simulator_name);
                self.render.field("api version", &report.api_version.to_string());
            }
            Ok(report) => self
                .render
                .warn(&format!("connect failed: {}", report.err_message)),
            Err(e) => self.render.error(&e.to_string()),
        }
    }

    fn disconnect(&self) {
        match self.client.close_client() {
            Ok(report) if report.request_status => self.render.activity("disconnected"),
            Ok(report) => self
                .render
                .warn(&format!("disconnect failed: {}", report.err_message)),
            Err(e) => self.render.error(&e.to_string()),
        }
    }

    fn status(&self) {
        match self.client.connection_state() {
            Ok(report) if report.request_status => {
                self.render.section("status");
                self.render.field("connection", &connection_label(report.status));
            }
            Ok(report) => self
                .render
                .warn(&format!("status query failed: {}", report.err_message)),
            Err(e) => self.render.error(&e.to_string()),
        }
    }

    fn version(&self) {
        match self.client.version_info() {
            Ok(report) if report.request_status => {
                self.render.section("FSUIPC version");
                self.render.field("version", &report.version);
                self.render.field("simulator", &report.simulator_name);
                self.render.field("api version", &report.api_version.to_string());
            }
            Ok(report) => self
                .render
                .warn(&format!("version query failed: {}", report.err_message)),
            Err(e) => self.render.error(&e.to_string()),
        }
    }

    fn frequency(&self) {
        match self.client.frequency_info() {
            Ok(report) if report.request_status => {
                let [com1_active, com1_standby, com2_active, com2_standby] = report.frequency;
                self.render.section("frequency");
                self.render
                    .field("flags", &format!("{:#010b}", report.frequency_flag));
                self.render.field("com1 rx", yes_no(report.com1_rx));
                self.render.field("com2 rx", yes_no(report.com2_rx));
                self.render
                    .field("com1 active", &format_mhz_from_hz(com1_active));
                self.render
                    .field("com1 standby", &format_mhz_from_hz(com1_standby));
                self.render
                    .field("com2 active", &format_mhz_from_hz(com2_active));
                self.render
                    .field("com2 standby", &format_mhz_from_hz(com2_standby));
            }
            Ok(report) => self
                .render
                .warn(&format!("frequency query failed: {}", report.err_message)),
            Err(e) => self.render.error(&e.to_string()),
        }
    }

    fn set_frequency(&self, channel: ComChannel, khz: i32) {
        let result = match channel {
            ComChannel::Com1 => self.client.set_com1_frequency(khz),
            ComChannel::Com2 => self.client.set_com2_frequency(khz),
        };
        match result {
            Ok(report) if report.request_status => self
                .render
                .activity(&format!("{channel} set to {}", format_mhz_from_khz(khz))),
            Ok(report) => self
                .render
                .warn(&format!("set {channel} failed: {}", report.err_message)),
            Err(e) => self.render.error(&e.to_string()),
        }
    }

    /// Stop the loop: clear refresh bookkeeping, cancel any pending refresh
    /// task, and print the farewell. Used by `exit`, end-of-input, and the
    /// interrupt signal alike.
    fn stop(&mut self) {
        tracing::debug!(auto_refresh = self.auto_refresh, "session stopping");
        self.running = false;
        self.auto_refresh = false;
        if let Some(task) = self.refresh_task.take() {
            task.abort();
        }
        self.render.activity("goodbye");
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
