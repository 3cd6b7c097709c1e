//! Page behaviors for the spreadsheet upload view.
//!
//! Two independent behaviors are attached when the view becomes ready:
//! notification banners close themselves after a configurable delay, and the
//! upload file picker rejects selections whose filename suffix is not in the
//! allow-list.

mod alerts;
mod app;
pub mod config;
pub mod extensions;
pub mod guard;
mod runtime;

pub use crate::alerts::schedule_dismissals;
pub use crate::app::{Page, PageBehaviors, init};
pub use crate::runtime::{run, run_with_config};
