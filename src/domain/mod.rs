// Domain layer - Modem info models and normalization rules
pub mod carrier;
pub mod field_schema;
pub mod modem_info;
pub mod report;
