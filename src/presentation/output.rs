// Report output for the status display
use crate::domain::modem_info::ExtractError;
use std::io::Write;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    NoData,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Failed => ExitCode::FAILURE,
            Outcome::Reported | Outcome::NoData => ExitCode::SUCCESS,
        }
    }
}

/// Print the report, or nothing at all when there is none
pub fn write_outcome<W: Write>(
    out: &mut W,
    result: Result<Option<String>, ExtractError>,
) -> std::io::Result<Outcome> {
    match result {
        Ok(Some(report)) => {
            writeln!(out, "{}", report)?;
            out.flush()?;
            Ok(Outcome::Reported)
        }
        Ok(None) => {
            tracing::info!("No modem info available");
            Ok(Outcome::NoData)
        }
        Err(e) => {
            tracing::error!("Modem info extraction failed: {}", e);
            Ok(Outcome::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_printed_with_trailing_newline() {
        let mut out = Vec::new();
        let outcome = write_outcome(&mut out, Ok(Some("revision:EC25\nsim:ready".to_string()))).unwrap();
        assert_eq!(outcome, Outcome::Reported);
        assert_eq!(String::from_utf8(out).unwrap(), "revision:EC25\nsim:ready\n");
    }

    #[test]
    fn test_no_data_prints_nothing() {
        let mut out = Vec::new();
        assert_eq!(write_outcome(&mut out, Ok(None)).unwrap(), Outcome::NoData);
        assert!(out.is_empty());
    }

    #[test]
    fn test_strict_failure_prints_nothing() {
        let mut out = Vec::new();
        let error = ExtractError::MissingField {
            index: 2,
            field: "type",
        };
        assert_eq!(write_outcome(&mut out, Err(error)).unwrap(), Outcome::Failed);
        assert!(out.is_empty());
    }
}
