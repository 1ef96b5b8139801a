// Text report exchanged with the status display
use crate::domain::field_schema::{SIGNAL_SLOTS, STATUS_LINE_KEYS};
use crate::domain::modem_info::{ProgressField, ProgressFields};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalBlock {
    pub name: String,
    pub value: String,
    pub min: String,
    pub max: String,
    pub unit: String,
}

impl SignalBlock {
    pub fn placeholder() -> Self {
        Self {
            name: "-".to_string(),
            value: "0".to_string(),
            min: "0".to_string(),
            max: "0".to_string(),
            unit: "-".to_string(),
        }
    }

    pub fn from_progress(field: &ProgressField) -> Self {
        Self {
            name: field.name.clone(),
            value: field.value.clone(),
            min: field.min_value.clone(),
            max: field.max_value.clone(),
            // Displays read this as "value/max", not "min/max"
            unit: format!("{}/{}{}", field.value, field.max_value, field.unit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModemReport {
    pub revision: String,
    pub temperature: String,
    pub voltage: String,
    pub connect: String,
    pub sim: String,
    pub isp: String,
    pub cqi: String,
    pub ambr: String,
    pub network_mode: String,
    pub signals: [SignalBlock; SIGNAL_SLOTS],
}

impl ModemReport {
    /// First three progress fields, padded with placeholder blocks
    pub fn signals_from(progress: &ProgressFields) -> [SignalBlock; SIGNAL_SLOTS] {
        std::array::from_fn(|i| {
            progress
                .get(i)
                .map(SignalBlock::from_progress)
                .unwrap_or_else(SignalBlock::placeholder)
        })
    }

    fn status_values(&self) -> [&str; 9] {
        [
            &self.revision,
            &self.temperature,
            &self.voltage,
            &self.connect,
            &self.sim,
            &self.isp,
            &self.cqi,
            &self.ambr,
            &self.network_mode,
        ]
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = STATUS_LINE_KEYS
            .iter()
            .zip(self.status_values())
            .map(|(key, value)| format!("{}:{}", key, value))
            .collect();

        for (i, signal) in self.signals.iter().enumerate() {
            lines.push(format!("signal{}name:{}", i, signal.name));
            lines.push(format!("signal{}value:{}", i, signal.value));
            lines.push(format!("signal{}min:{}", i, signal.min));
            lines.push(format!("signal{}max:{}", i, signal.max));
            lines.push(format!("signal{}unit:{}", i, signal.unit));
        }

        lines
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

impl fmt::Display for ModemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Shown by the display for anything the report did not carry
pub const DISPLAY_UNKNOWN: &str = "未知";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalStatus {
    pub name: String,
    pub value: i32,
    pub min: i32,
    pub max: i32,
    pub unit: String,
}

impl Default for SignalStatus {
    fn default() -> Self {
        Self {
            name: DISPLAY_UNKNOWN.to_string(),
            value: 0,
            min: 0,
            max: 0,
            unit: DISPLAY_UNKNOWN.to_string(),
        }
    }
}

/// The status display's view of a report.
///
/// Exported for the display side of the contract; the `modem-info` binary only
/// produces reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModemStatus {
    pub revision: String,
    pub temperature: String,
    pub voltage: String,
    pub connect: String,
    pub sim: String,
    pub isp: String,
    pub cqi: String,
    pub ambr: String,
    pub network_mode: String,
    pub signals: [SignalStatus; SIGNAL_SLOTS],
}

impl Default for ModemStatus {
    fn default() -> Self {
        let unknown = || DISPLAY_UNKNOWN.to_string();
        Self {
            revision: unknown(),
            temperature: unknown(),
            voltage: unknown(),
            connect: unknown(),
            sim: unknown(),
            isp: unknown(),
            cqi: unknown(),
            ambr: unknown(),
            network_mode: unknown(),
            signals: Default::default(),
        }
    }
}

impl ModemStatus {
    /// Read a report line by line, splitting each on its first colon.
    ///
    /// Lines without a colon or with an empty value are skipped, unknown keys
    /// are ignored and anything not mentioned keeps its default.
    pub fn from_report(text: &str) -> Self {
        let mut status = Self::default();
        for line in text.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            status.assign(key, value);
        }
        status
    }

    fn assign(&mut self, key: &str, value: &str) {
        let slot = match key {
            "revision" => &mut self.revision,
            "temperature" => &mut self.temperature,
            "voltage" => &mut self.voltage,
            "connect" => &mut self.connect,
            "sim" => &mut self.sim,
            "isp" => &mut self.isp,
            "cqi" => &mut self.cqi,
            "ambr" => &mut self.ambr,
            "networkmode" => &mut self.network_mode,
            _ => return self.assign_signal(key, value),
        };
        *slot = value.to_string();
    }

    fn assign_signal(&mut self, key: &str, value: &str) {
        let Some(rest) = key.strip_prefix("signal") else {
            return;
        };
        let mut chars = rest.chars();
        let Some(index) = chars.next().and_then(|c| c.to_digit(10)) else {
            return;
        };
        let Some(signal) = self.signals.get_mut(index as usize) else {
            return;
        };
        match chars.as_str() {
            "name" => signal.name = value.to_string(),
            "value" => signal.value = parse_leading_int(value),
            "min" => signal.min = parse_leading_int(value),
            "max" => signal.max = parse_leading_int(value),
            "unit" => signal.unit = value.to_string(),
            _ => {}
        }
    }
}

/// Integer prefix of `text` after leading whitespace, 0 when there is none
fn parse_leading_int(text: &str) -> i32 {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['-', '+']));
    let digits = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign_len);
    text[..sign_len + digits].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ModemReport {
        ModemReport {
            revision: "RM520NGLAAR03A07M4G".to_string(),
            temperature: "45 C".to_string(),
            voltage: "3.8 V".to_string(),
            connect: "Yes".to_string(),
            sim: "ready".to_string(),
            isp: "中国联通".to_string(),
            cqi: "DL 12 UL -".to_string(),
            ambr: "150000/50000".to_string(),
            network_mode: "NR5G-SA".to_string(),
            signals: [
                SignalBlock::from_progress(&ProgressField {
                    name: "RSRP".to_string(),
                    value: "-95".to_string(),
                    min_value: "-140".to_string(),
                    max_value: "-44".to_string(),
                    unit: "dBm".to_string(),
                }),
                SignalBlock::placeholder(),
                SignalBlock::placeholder(),
            ],
        }
    }

    #[test]
    fn test_render_line_order() {
        let rendered = sample_report().render();
        let keys: Vec<&str> = rendered
            .lines()
            .map(|l| l.split_once(':').map(|(k, _)| k).unwrap_or(""))
            .collect();

        assert_eq!(keys.len(), 24);
        assert_eq!(&keys[..9], &STATUS_LINE_KEYS);
        assert_eq!(
            &keys[9..14],
            &["signal0name", "signal0value", "signal0min", "signal0max", "signal0unit"]
        );
        assert_eq!(keys[23], "signal2unit");
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_unit_line_reuses_value() {
        let report = sample_report();
        assert_eq!(report.signals[0].unit, "-95/-44dBm");
        assert!(report.render().contains("signal0unit:-95/-44dBm"));
    }

    #[test]
    fn test_placeholder_block() {
        let rendered = sample_report().render();
        let tail: Vec<&str> = rendered.lines().skip(14).take(5).collect();
        assert_eq!(
            tail,
            vec!["signal1name:-", "signal1value:0", "signal1min:0", "signal1max:0", "signal1unit:-"]
        );
    }

    #[test]
    fn test_display_matches_render() {
        let report = sample_report();
        assert_eq!(report.to_string(), report.render());
    }

    #[test]
    fn test_read_back_report() {
        let status = ModemStatus::from_report(&sample_report().render());

        assert_eq!(status.revision, "RM520NGLAAR03A07M4G");
        assert_eq!(status.isp, "中国联通");
        assert_eq!(status.cqi, "DL 12 UL -");
        assert_eq!(status.network_mode, "NR5G-SA");
        assert_eq!(
            status.signals[0],
            SignalStatus {
                name: "RSRP".to_string(),
                value: -95,
                min: -140,
                max: -44,
                unit: "-95/-44dBm".to_string(),
            }
        );
        assert_eq!(status.signals[2].name, "-");
        assert_eq!(status.signals[2].value, 0);
    }

    #[test]
    fn test_read_back_skips_malformed_lines() {
        let status = ModemStatus::from_report("None\nsim:\nvoltage:3.8 V\nsignal7name:x\nfoo:bar");
        assert_eq!(status.sim, DISPLAY_UNKNOWN);
        assert_eq!(status.voltage, "3.8 V");
        assert_eq!(
            status,
            ModemStatus {
                voltage: "3.8 V".to_string(),
                ..ModemStatus::default()
            }
        );
    }

    #[test]
    fn test_read_back_splits_on_first_colon() {
        let status = ModemStatus::from_report("revision:EC25:EUX");
        assert_eq!(status.revision, "EC25:EUX");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("-95"), -95);
        assert_eq!(parse_leading_int(" 18dB"), 18);
        assert_eq!(parse_leading_int("+7"), 7);
        assert_eq!(parse_leading_int("-"), 0);
        assert_eq!(parse_leading_int("n78"), 0);
        assert_eq!(parse_leading_int(""), 0);
    }
}
