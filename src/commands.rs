//! Command metadata and parsing for the interactive loop.

/// Static command metadata used by both parsing and the help listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub usage: &'static str,
    pub description: &'static str,
}

/// Built-in commands, in help-listing order.
pub const COMMANDS: [CommandEntry; 9] = [
    CommandEntry {
        usage: "connect / conn",
        description: "Open the FSUIPC connection.",
    },
    CommandEntry {
        usage: "disconnect / disc",
        description: "Close the FSUIPC connection.",
    },
    CommandEntry {
        usage: "status / s",
        description: "Show the connection state.",
    },
    CommandEntry {
        usage: "version / v",
        description: "Show FSUIPC version information.",
    },
    CommandEntry {
        usage: "freq / f",
        description: "Show current COM frequencies.",
    },
    CommandEntry {
        usage: "com1 <khz>",
        description: "Set the COM1 frequency in kilohertz (example: com1 122800).",
    },
    CommandEntry {
        usage: "com2 <khz>",
        description: "Set the COM2 frequency in kilohertz (example: com2 122800).",
    },
    CommandEntry {
        usage: "help / h",
        description: "List available commands.",
    },
    CommandEntry {
        usage: "exit / quit / q",
        description: "Leave the program.",
    },
];

/// The two tunable communication channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComChannel {
    Com1,
    Com2,
}

impl ComChannel {
    /// Lowercase command token for usage messages.
    pub fn command_name(self) -> &'static str {
        match self {
            Self::Com1 => "com1",
            Self::Com2 => "com2",
        }
    }
}

impl std::fmt::Display for ComChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Com1 => write!(f, "COM1"),
            Self::Com2 => write!(f, "COM2"),
        }
    }
}

/// Parsed command actions consumed by the loop.
///
/// Argument-count and numeric validation happen here, before dispatch, so the
/// loop never reaches the native client with malformed setter input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    Connect,
    Disconnect,
    Status,
    Version,
    Frequency,
    SetFrequency { channel: ComChannel, khz: i32 },
    FrequencyUsage(ComChannel),
    InvalidFrequency(ComChannel),
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line of operator input.
///
/// Returns `None` for blank input. The command token is case-insensitive;
/// arguments keep their original form.
pub fn parse_command(input: &str) -> Option<CommandAction> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut tokens = trimmed.split_whitespace();
    let command = tokens.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<&str> = tokens.collect();

    let action = match command.as_str() {
        "connect" | "conn" => CommandAction::Connect,
        "disconnect" | "disc" => CommandAction::Disconnect,
        "status" | "s" => CommandAction::Status,
        "version" | "v" => CommandAction::Version,
        "freq" | "f" => CommandAction::Frequency,
        "com1" => parse_set_frequency(ComChannel::Com1, &args),
        "com2" => parse_set_frequency(ComChannel::Com2, &args),
        "help" | "h" => CommandAction::Help,
        "exit" | "quit" | "q" => CommandAction::Quit,
        other => CommandAction::Unknown(other.to_string()),
    };

    Some(action)
}

fn parse_set_frequency(channel: ComChannel, args: &[&str]) -> CommandAction {
    let [khz] = args else {
        return CommandAction::FrequencyUsage(channel);
    };
    match khz.parse::<i32>() {
        Ok(khz) => CommandAction::SetFrequency { channel, khz },
        Err(_) => CommandAction::InvalidFrequency(channel),
    }
}
