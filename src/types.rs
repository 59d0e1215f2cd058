//! Owned report types returned by the native client, plus the decoding and
//! formatting helpers shared by the command handlers.

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Outcome common to every native call: did the request succeed, and if not,
/// what did the library say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallReport {
    pub request_status: bool,
    pub err_message: String,
}

/// Connection-state query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionReport {
    pub request_status: bool,
    pub status: u32,
    pub err_message: String,
}

/// Version query result with fields already decoded to display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub request_status: bool,
    pub version: String,
    pub simulator_name: String,
    pub api_version: u8,
    pub err_message: String,
}

/// Frequency query result.
///
/// `frequency` holds COM1 active, COM1 standby, COM2 active, COM2 standby in
/// the library's base unit (hertz).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyReport {
    pub request_status: bool,
    pub frequency_flag: u8,
    pub com1_rx: bool,
    pub com2_rx: bool,
    pub frequency: [u32; 4],
    pub err_message: String,
}

// ---------------------------------------------------------------------------
// Radio-switch flag bits
// ---------------------------------------------------------------------------

pub const FLAG_COM1_TRANSMIT: u8 = 0x80;
pub const FLAG_COM2_TRANSMIT: u8 = 0x40;
pub const FLAG_COM1_RECEIVE: u8 = 0x20;
pub const FLAG_COM2_RECEIVE: u8 = 0x10;

/// COM1 receive indicator from the radio-switch byte.
pub fn com1_receive(flag: u8) -> bool {
    flag & FLAG_COM1_RECEIVE != 0
}

/// COM2 receive indicator from the radio-switch byte.
pub fn com2_receive(flag: u8) -> bool {
    flag & FLAG_COM2_RECEIVE != 0
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Render the packed FSUIPC version number as display text.
///
/// The high word carries four BCD digits (`0x7005` reads as 7.005); the low
/// word is a build-letter index, zero meaning no letter.
pub fn format_fsuipc_version(raw: u32) -> String {
    let bcd = (raw >> 16) as u16;
    let mut text = format!(
        "{}.{}{}{}",
        (bcd >> 12) & 0xF,
        (bcd >> 8) & 0xF,
        (bcd >> 4) & 0xF,
        bcd & 0xF
    );
    let letter = raw & 0xFFFF;
    if (1..=26).contains(&letter) {
        text.push((b'a' + letter as u8 - 1) as char);
    }
    text
}

/// Map the simulator type code to a readable name.
pub fn simulator_name(code: u16) -> String {
    match code {
        1 => "FS98".to_string(),
        2 => "FS2000".to_string(),
        3 => "CFS2".to_string(),
        4 => "CFS1".to_string(),
        5 => "Fly!".to_string(),
        6 => "FS2002".to_string(),
        7 => "FS2004".to_string(),
        8 => "FSX".to_string(),
        9 => "ESP".to_string(),
        10 => "Prepar3D".to_string(),
        11 => "FSX Steam Edition".to_string(),
        12 => "MSFS".to_string(),
        other => format!("unknown simulator ({other})"),
    }
}

/// Map the connection status code to the operator-facing label.
pub fn connection_label(status: u32) -> String {
    match status {
        0 => "disconnected".to_string(),
        1 => "connected".to_string(),
        other => format!("unknown state ({other})"),
    }
}

// ---------------------------------------------------------------------------
// Frequency formatting
// ---------------------------------------------------------------------------

/// Format a frequency in hertz as megahertz with three decimals.
///
/// Integer arithmetic with half-up rounding at the third decimal, so ties
/// like 118000500 Hz land on 118.001 deterministically.
pub fn format_mhz_from_hz(hz: u32) -> String {
    let thousandths = (u64::from(hz) + 500) / 1000;
    format!("{}.{:03} MHz", thousandths / 1000, thousandths % 1000)
}

/// Format a frequency in kilohertz as megahertz with three decimals.
pub fn format_mhz_from_khz(khz: i32) -> String {
    let magnitude = khz.unsigned_abs();
    let sign = if khz < 0 { "-" } else { "" };
    format!("{sign}{}.{:03} MHz", magnitude / 1000, magnitude % 1000)
}
