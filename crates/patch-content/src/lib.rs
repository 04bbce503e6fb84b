//! Text editing engine for textpatch
//!
//! Two literal edit operations, a line-block remover and an exact-match
//! replacer, plus the rule files, in-memory documents and diff previews
//! that let them be applied with a dry run.

pub mod diff;
pub mod document;
pub mod edit;
pub mod error;
pub mod remove;
pub mod replace;
pub mod rule;

pub use diff::{DiffPreview, LineChange};
pub use document::{AppliedRule, Document};
pub use edit::{Edit, EditKind, Location};
pub use error::{Error, Result};
pub use remove::BlockRemoval;
pub use replace::ExactReplacement;
pub use rule::{Rule, RuleSet};
