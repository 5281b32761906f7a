//! vkclean - leave every VK group and community the user belongs to.
//!
//! The workflow is a straight line: authenticate, list memberships, show
//! them, ask for confirmation, then leave them one by one with a fixed
//! pause between calls. Destructive calls are simulated unless dry run is
//! switched off in [`CleanupConfig`].
//!
//! # Example
//!
//! ```no_run
//! use vkclean::{Cleaner, CleanupConfig, Console};
//! use vkclean_core::{Credentials, GroupRecord, Service};
//!
//! struct Yes;
//!
//! impl Console for Yes {
//!     fn show_groups(&mut self, _groups: &[GroupRecord]) {}
//!     fn show_mode(&mut self, _dry_run: bool, _count: usize) {}
//!     fn ask(&mut self, _question: &str) -> std::io::Result<String> {
//!         Ok("yes".to_string())
//!     }
//! }
//!
//! # async fn example<S: Service>(service: S) {
//! let credentials = Credentials::resolve(Some("token".into()), None, None);
//! let mut cleaner = Cleaner::new(service, credentials, CleanupConfig::default(), Yes);
//! let report = cleaner.run().await;
//! println!("{:?}", report.end);
//! # }
//! ```

pub mod auth;
pub mod cleaner;
pub mod config;
pub mod console;
pub mod error;
pub mod groups;
pub mod remover;

pub use auth::{Authenticated, authenticate};
pub use cleaner::{Cleaner, Report, RunEnd, RunOutcome, Stage};
pub use config::CleanupConfig;
pub use console::{Console, is_affirmative};
pub use error::CleanupError;
pub use groups::list_groups;
pub use remover::{Leave, Remover};
