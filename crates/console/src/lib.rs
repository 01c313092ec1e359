//! Interactive CodeGame debug console.
//!
//! Resolves what to observe through operator prompts and saved sessions,
//! then renders the live debug stream of the chosen target.

pub mod error;
pub mod line_prompt;
pub mod prompt;
pub mod renderer;
pub mod resolver;
pub mod session;

pub use error::ConsoleError;
pub use line_prompt::LinePrompter;
pub use prompt::{PromptError, Prompter};
pub use renderer::LogRenderer;
pub use resolver::{prompt_endpoint, prompt_severities, resolve_target};
pub use session::{SessionOptions, banner, run_debug_session};
