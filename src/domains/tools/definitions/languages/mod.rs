//! Tools backed by the `codingLanguage` table.

pub mod add;
pub mod list;
pub mod status;

pub use add::{AddLanguageParams, AddLanguageTool};
pub use list::ListLanguagesTool;
pub use status::DatabaseStatusTool;
