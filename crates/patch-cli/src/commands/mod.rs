//! Command implementations for patch-cli

pub mod apply;
pub mod output;
pub mod patch;
pub mod remove;
pub mod replace;

pub use apply::run_apply;
pub use patch::{PatchReport, patch_file};
pub use remove::run_remove_block;
pub use replace::run_replace;
