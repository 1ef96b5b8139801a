// Modem status extraction for the front-panel display
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
