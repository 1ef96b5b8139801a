// Application layer - Extraction use case and its data source seam
pub mod extractor;
pub mod modem_source;
