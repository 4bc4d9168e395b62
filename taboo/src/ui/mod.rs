//! Terminal output for the taboo CLI: themes, message formatting, the censor
//! summary and the diff view.

pub mod censor_summary;
pub mod diff_viewer;
pub mod output_format;
pub mod theme;
