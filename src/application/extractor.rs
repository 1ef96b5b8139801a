// Modem info extractor - Use case for building the status report
use crate::application::modem_source::ModemInfoSource;
use crate::domain::carrier::resolve_isp;
use crate::domain::field_schema::{
    scalar_field, AMBR_DL, AMBR_UL, CONNECT_STATUS, CQI_DL, CQI_UL, NETWORK_MODE,
    NETWORK_MODE_SUFFIX, NOT_REPORTED, PROGRESS_CLASS, PROGRESS_TYPE, RECORD_CLASS, RECORD_KEY,
    RECORD_MAX_VALUE, RECORD_MIN_VALUE, RECORD_TYPE, RECORD_UNIT, RECORD_VALUE, REVISION,
    SIM_STATUS, SIM_STATUS_ALIAS, TEMPERATURE, VOLTAGE,
};
use crate::domain::modem_info::{
    stringify, ExtractError, ExtractedFields, FieldRecord, Markers, ProgressField, ProgressFields,
};
use crate::domain::report::ModemReport;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone)]
pub struct ModemInfoExtractor {
    source: Arc<dyn ModemInfoSource>,
    markers: Markers,
}

impl ModemInfoExtractor {
    pub fn new(source: Arc<dyn ModemInfoSource>, markers: Markers) -> Self {
        Self { source, markers }
    }

    /// Query modem_ctrl and render the report.
    ///
    /// `Ok(None)` covers every recoverable failure (command, JSON, response
    /// shape). Only a record missing a strictly required field is an error.
    pub async fn get_modem_info(&self) -> Result<Option<String>, ExtractError> {
        let raw = match self.source.call_info().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("modem_ctrl call failed: {}", e);
                return Ok(None);
            }
        };

        Ok(extract(&raw, &self.markers)?.map(|report| report.render()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ShapeError {
    #[error("`{0}` is missing")]
    Missing(&'static str),
    #[error("`{0}` is not an array")]
    NotArray(&'static str),
    #[error("`{0}` is empty")]
    Empty(&'static str),
}

/// Build a report from a parsed `call info` response
pub fn extract(raw: &Value, markers: &Markers) -> Result<Option<ModemReport>, ExtractError> {
    let records = match field_list(raw) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Unexpected modem_ctrl response: {}", e);
            return Ok(None);
        }
    };

    let (fields, progress) = classify(records)?;
    tracing::debug!(
        "Extracted {} scalar fields and {} progress fields from {} records",
        fields.len(),
        progress.len(),
        records.len()
    );

    Ok(Some(build_report(&fields, &progress, markers)))
}

fn field_list(raw: &Value) -> Result<&[Value], ShapeError> {
    let info = non_empty_array(raw, "info")?;
    non_empty_array(&info[0], "modem_info")
}

fn non_empty_array<'a>(parent: &'a Value, key: &'static str) -> Result<&'a [Value], ShapeError> {
    let items = parent
        .get(key)
        .ok_or(ShapeError::Missing(key))?
        .as_array()
        .ok_or(ShapeError::NotArray(key))?;
    if items.is_empty() {
        return Err(ShapeError::Empty(key));
    }
    Ok(items)
}

fn classify(records: &[Value]) -> Result<(ExtractedFields, ProgressFields), ExtractError> {
    let mut fields = ExtractedFields::default();
    let mut progress = ProgressFields::default();

    for (index, raw) in records.iter().enumerate() {
        let record = FieldRecord::new(index, raw);
        let key = record.read(&RECORD_KEY)?;

        if let Some(rule) = key.and_then(Value::as_str).and_then(scalar_field) {
            let value = record.read_string(&RECORD_VALUE)?;
            fields.insert(rule, value.trim().to_string());
        } else if is_cell_progress_bar(&record)? {
            progress.insert(ProgressField {
                name: key.map(stringify).unwrap_or_default().replace(' ', ""),
                value: record.read_string(&RECORD_VALUE)?,
                min_value: record.read_string(&RECORD_MIN_VALUE)?,
                max_value: record.read_string(&RECORD_MAX_VALUE)?,
                unit: record.read_string(&RECORD_UNIT)?,
            });
        }
    }

    Ok((fields, progress))
}

// `class` is only required once `type` says progress_bar
fn is_cell_progress_bar(record: &FieldRecord<'_>) -> Result<bool, ExtractError> {
    if record.read(&RECORD_TYPE)?.and_then(Value::as_str) != Some(PROGRESS_TYPE) {
        return Ok(false);
    }
    Ok(record.read(&RECORD_CLASS)?.and_then(Value::as_str) == Some(PROGRESS_CLASS))
}

fn build_report(fields: &ExtractedFields, progress: &ProgressFields, markers: &Markers) -> ModemReport {
    let sim_status = fields
        .read(&SIM_STATUS, &markers.unknown)
        .or_else(|| fields.read(&SIM_STATUS_ALIAS, &markers.unknown));
    let marker = markers.select(sim_status);

    let network_mode = fields
        .read(&NETWORK_MODE, marker)
        .map(|mode| mode.strip_suffix(NETWORK_MODE_SUFFIX).unwrap_or(mode))
        .unwrap_or(marker);

    let cqi = combine_directions(
        fields.read(&CQI_DL, marker),
        fields.read(&CQI_UL, marker),
        marker,
        |dl, ul| format!("DL {} UL {}", dl, ul),
    );
    let ambr = combine_directions(
        fields.read(&AMBR_DL, marker),
        fields.read(&AMBR_UL, marker),
        marker,
        |dl, ul| format!("{}/{}", dl, ul),
    );

    ModemReport {
        revision: fields.read_string(&REVISION, marker),
        temperature: fields.read_string(&TEMPERATURE, marker),
        voltage: fields.read_string(&VOLTAGE, marker),
        connect: fields.read_string(&CONNECT_STATUS, marker),
        sim: sim_status.unwrap_or(marker).to_string(),
        isp: resolve_isp(fields, marker),
        cqi,
        ambr,
        network_mode: network_mode.to_string(),
        signals: ModemReport::signals_from(progress),
    }
}

/// Join a downlink/uplink pair, or fall back to the marker when neither side
/// was reported
fn combine_directions(
    dl: Option<&str>,
    ul: Option<&str>,
    marker: &str,
    join: impl Fn(&str, &str) -> String,
) -> String {
    let dl = dl.filter(|v| !v.is_empty()).unwrap_or(NOT_REPORTED);
    let ul = ul.filter(|v| !v.is_empty()).unwrap_or(NOT_REPORTED);
    if dl == NOT_REPORTED && ul == NOT_REPORTED {
        marker.to_string()
    } else {
        join(dl, ul)
    }
}
