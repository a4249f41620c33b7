pub mod dataset_selector;
pub mod schema_preview;
pub mod ui;
