//! UI utilities for terminal output
//!
//! Progress spinners shown on stderr while the foundation is being walked.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
