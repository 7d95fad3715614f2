//! Tool definitions module.
//!
//! Each tool is defined in its own file: parameters, `execute()`,
//! `http_handler()`, `to_tool()` and `create_route()`.

pub mod add;
pub mod common;
pub mod languages;
pub mod secret_word;
pub mod time;
pub mod weather;

pub use add::{AddParams, AddTool};
pub use languages::{AddLanguageParams, AddLanguageTool, DatabaseStatusTool, ListLanguagesTool};
pub use secret_word::SecretWordTool;
pub use time::CurrentTimeTool;
pub use weather::{WeatherParams, WeatherTool};
