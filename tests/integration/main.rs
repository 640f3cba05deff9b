//! Integration tests for vbscout.

mod analyze_test;
mod config_test;
mod helpers;
mod preprocess_test;
mod transcript_test;
mod validate_test;
