// Field schema shared with modem_ctrl's `call info` response
//
// The key set and the report line order form a contract with an independently
// versioned tool. Any change here bumps FIELD_SCHEMA_VERSION.

pub const FIELD_SCHEMA_VERSION: u32 = 2;

/// How a field is read when it is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Absence aborts the whole extraction
    Strict,
    /// Absence falls back to a marker
    Defaulted,
    /// Absence is passed on to the caller's own fallback rule
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub access: AccessMode,
}

impl FieldRule {
    pub const fn strict(name: &'static str) -> Self {
        Self {
            name,
            access: AccessMode::Strict,
        }
    }

    pub const fn defaulted(name: &'static str) -> Self {
        Self {
            name,
            access: AccessMode::Defaulted,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            access: AccessMode::Optional,
        }
    }
}

// Scalar keys reported by modem_ctrl. Defaulted ones render as the marker
// when absent; optional ones are combined with other keys first.
pub const REVISION: FieldRule = FieldRule::defaulted("revision");
pub const TEMPERATURE: FieldRule = FieldRule::defaulted("temperature");
pub const VOLTAGE: FieldRule = FieldRule::defaulted("voltage");
pub const CONNECT_STATUS: FieldRule = FieldRule::defaulted("connect_status");
pub const SIM_STATUS: FieldRule = FieldRule::optional("SIM Status");
pub const SIM_STATUS_ALIAS: FieldRule = FieldRule::optional("sim_status");
pub const ISP: FieldRule = FieldRule::optional("ISP");
pub const CQI_UL: FieldRule = FieldRule::optional("CQI UL");
pub const CQI_DL: FieldRule = FieldRule::optional("CQI DL");
pub const AMBR_UL: FieldRule = FieldRule::optional("AMBR UL");
pub const AMBR_DL: FieldRule = FieldRule::optional("AMBR DL");
pub const NETWORK_MODE: FieldRule = FieldRule::optional("network_mode");
/// Misspelled MCC sent by some QModem builds, preferred over MCC when present
pub const MMC: FieldRule = FieldRule::optional("MMC");
pub const MCC: FieldRule = FieldRule::optional("MCC");
pub const MNC: FieldRule = FieldRule::defaulted("MNC");

/// Target keys picked out of `modem_info`
pub static SCALAR_FIELDS: [FieldRule; 15] = [
    REVISION,
    TEMPERATURE,
    VOLTAGE,
    CONNECT_STATUS,
    SIM_STATUS,
    SIM_STATUS_ALIAS,
    ISP,
    CQI_UL,
    CQI_DL,
    AMBR_UL,
    AMBR_DL,
    NETWORK_MODE,
    MMC,
    MCC,
    MNC,
];

// Fields inside a single modem_info record
pub const RECORD_KEY: FieldRule = FieldRule::strict("key");
pub const RECORD_VALUE: FieldRule = FieldRule::strict("value");
pub const RECORD_TYPE: FieldRule = FieldRule::strict("type");
pub const RECORD_CLASS: FieldRule = FieldRule::strict("class");
pub const RECORD_MIN_VALUE: FieldRule = FieldRule::strict("min_value");
pub const RECORD_MAX_VALUE: FieldRule = FieldRule::strict("max_value");
pub const RECORD_UNIT: FieldRule = FieldRule::strict("unit");

pub const PROGRESS_TYPE: &str = "progress_bar";
pub const PROGRESS_CLASS: &str = "Cell Information";

pub const SIM_MISSING: &str = "miss";
pub const ISP_PLACEHOLDER: &str = "????";
pub const NETWORK_MODE_SUFFIX: &str = " Mode";
/// Stand-in for an unreported CQI/AMBR direction
pub const NOT_REPORTED: &str = "-";

/// Status lines in output order
pub const STATUS_LINE_KEYS: [&str; 9] = [
    "revision",
    "temperature",
    "voltage",
    "connect",
    "sim",
    "isp",
    "cqi",
    "ambr",
    "networkmode",
];

pub const SIGNAL_SLOTS: usize = 3;

pub fn scalar_field(key: &str) -> Option<&'static FieldRule> {
    SCALAR_FIELDS.iter().find(|rule| rule.name == key)
}
