//! Line-based terminal prompts backed by rustyline.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::prompt::{
    PromptError, Prompter, parse_multi_selection, parse_selection, parse_yes_no,
};

/// Terminal prompter. Ctrl-C and Ctrl-D cancel; invalid answers are re-asked.
pub struct LinePrompter {
    editor: DefaultEditor,
}

impl LinePrompter {
    pub fn new() -> Result<Self, PromptError> {
        let editor = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self { editor })
    }

    fn read(&mut self, prompt: &str) -> Result<String, PromptError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line.trim().to_string()),
            Err(e) => Err(readline_error(e)),
        }
    }

    /// Reads until `parse` accepts the answer.
    fn ask<T>(
        &mut self,
        prompt: &str,
        hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.read(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => println!("{}", hint.red()),
            }
        }
    }
}

fn print_options(prompt: &str, options: &[String], marked: Option<&[usize]>) {
    println!("{}", prompt.bold());
    for (i, option) in options.iter().enumerate() {
        let number = format!("{:>3})", i + 1).cyan();
        match marked {
            Some(marked) => {
                let mark = if marked.contains(&i) { "[x]" } else { "[ ]" };
                println!("{number} {mark} {option}");
            }
            None => println!("{number} {option}"),
        }
    }
}

impl Prompter for LinePrompter {
    fn input(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.ask(&format!("{prompt} "), "A value is required.", |answer| {
            (!answer.is_empty()).then(|| answer.to_string())
        })
    }

    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize, PromptError> {
        print_options(prompt, options, None);
        let len = options.len();
        self.ask(
            &format!("Choose [1-{len}]: "),
            &format!("Enter a number between 1 and {len}."),
            |answer| parse_selection(answer, len),
        )
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        options: &[String],
        defaults: &[usize],
    ) -> Result<Vec<usize>, PromptError> {
        print_options(prompt, options, Some(defaults));
        let len = options.len();
        self.ask(
            "Choose (e.g. 2,3,4; empty keeps [x]): ",
            &format!("Enter numbers between 1 and {len}, separated by commas."),
            |answer| parse_multi_selection(answer, len, defaults),
        )
    }

    fn yes_no(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let choices = if default { "[Y/n]" } else { "[y/N]" };
        self.ask(
            &format!("{prompt} {choices} "),
            "Answer y or n.",
            |answer| parse_yes_no(answer, default),
        )
    }
}

fn readline_error(err: ReadlineError) -> PromptError {
    match err {
        ReadlineError::Interrupted | ReadlineError::Eof => PromptError::Cancelled,
        ReadlineError::Io(e) => PromptError::Io(e),
        other => PromptError::Io(std::io::Error::other(other)),
    }
}
