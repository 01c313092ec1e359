//! Interactive prompt capability and answer parsing.

/// Errors from an interactive prompt.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The questions the console can ask the operator.
///
/// Implemented by [`crate::line_prompt::LinePrompter`] for terminals and by
/// scripted doubles in tests.
pub trait Prompter {
    /// Asks for a free-text answer.
    fn input(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Asks the operator to pick one of `options`; returns its index.
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize, PromptError>;

    /// Asks the operator to pick any subset of `options`, starting from
    /// `defaults`; returns the chosen indices in ascending order.
    fn multi_select(
        &mut self,
        prompt: &str,
        options: &[String],
        defaults: &[usize],
    ) -> Result<Vec<usize>, PromptError>;

    /// Asks a yes/no question.
    fn yes_no(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError>;
}

/// Parses a 1-based menu choice into a 0-based index.
pub fn parse_selection(answer: &str, len: usize) -> Option<usize> {
    let n: usize = answer.trim().parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

/// Parses a multi-select answer: 1-based numbers separated by commas or
/// whitespace. An empty answer keeps `defaults`.
pub fn parse_multi_selection(answer: &str, len: usize, defaults: &[usize]) -> Option<Vec<usize>> {
    let answer = answer.trim();
    let mut picked: Vec<usize> = if answer.is_empty() {
        defaults.iter().copied().filter(|i| *i < len).collect()
    } else {
        answer
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| parse_selection(part, len))
            .collect::<Option<Vec<_>>>()?
    };
    picked.sort_unstable();
    picked.dedup();
    Some(picked)
}

/// Parses a yes/no answer. An empty answer yields `default`.
pub fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
