//! Hashguard: File Integrity Monitoring
//!
//! Records a baseline of content digests for every file under a directory and
//! later reports which files were added, modified or deleted since.
//!
//! ```no_run
//! use hashguard::api::IntegrityApi;
//! use hashguard::config::HashguardConfig;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), hashguard::error::ApiError> {
//! let api = IntegrityApi::from_config(&HashguardConfig::default());
//! api.record_baseline(Path::new("/etc"))?;
//! let result = api.check(Path::new("/etc"))?;
//! for path in &result.modified {
//!     println!("modified: {}", path);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod store;
pub mod tree;
pub mod types;
