pub mod automation;
pub mod config;
pub mod error;
pub mod followup;
pub mod io;
pub mod notify;
pub mod overlay;
pub mod paths;
pub mod pipeline;
pub mod prospect;
pub mod report;
pub mod score;
pub mod time;
pub mod types;

pub use error::{CrmError, Result};
