// Carrier resolution from PLMN codes
use crate::domain::field_schema::{ISP, ISP_PLACEHOLDER, MCC, MMC, MNC};
use crate::domain::modem_info::ExtractedFields;

/// Mainland China operators by PLMN (MCC + MNC)
const OPERATORS: &[(&str, &[&str])] = &[
    // China Mobile
    ("中国移动", &["46000", "46002", "46007"]),
    // China Unicom
    ("中国联通", &["46001", "46006", "46009"]),
    // China Telecom
    ("中国电信", &["46003", "46005", "46011"]),
    // China Broadnet
    ("中国广电", &["46015"]),
    // China Tietong
    ("中国铁通", &["46020"]),
];

pub fn operator_name(plmn: &str) -> Option<&'static str> {
    OPERATORS
        .iter()
        .find(|(_, codes)| codes.contains(&plmn))
        .map(|(name, _)| *name)
}

/// Pick the ISP label for the report.
///
/// A reported ISP wins unless it is the `????` placeholder; otherwise the PLMN
/// code is rebuilt from MMC/MCC and MNC and mapped to an operator name.
/// Unknown codes are returned as the raw digits.
pub fn resolve_isp(fields: &ExtractedFields, marker: &str) -> String {
    match fields.read(&ISP, marker) {
        Some(isp) if isp != ISP_PLACEHOLDER => isp.to_string(),
        _ => {
            let mcc = fields
                .read(&MMC, marker)
                .or_else(|| fields.read(&MCC, marker))
                .unwrap_or("");
            let mnc = fields.read_string(&MNC, marker);
            let plmn = format!("{}{}", mcc, mnc);
            match operator_name(&plmn) {
                Some(name) => name.to_string(),
                None => plmn,
            }
        }
    }
}
