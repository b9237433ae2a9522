use crate::core::NamePrompt;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

pub const PROMPT_TEXT: &str = "Enter animal name: ";

/// 去除空白並轉小寫
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Interactive prompt on stdin. End of input yields `None`.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl NamePrompt for StdinPrompt {
    fn read_name(&self) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", PROMPT_TEXT)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            tracing::debug!("stdin closed, no more animal names");
            return Ok(None);
        }

        Ok(Some(normalize_name(&line)))
    }
}

/// A name given up front (e.g. `--name`). Answers once, then reports no more input.
#[derive(Debug)]
pub struct FixedName {
    name: Mutex<Option<String>>,
}

impl FixedName {
    pub fn new(name: &str) -> Self {
        Self {
            name: Mutex::new(Some(normalize_name(name))),
        }
    }
}

impl NamePrompt for FixedName {
    fn read_name(&self) -> Result<Option<String>> {
        let mut name = self.name.lock().unwrap_or_else(|e| e.into_inner());
        Ok(name.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Red Fox \n"), "red fox");
        assert_eq!(normalize_name("\t\n"), "");
    }

    #[test]
    fn test_fixed_name_answers_once() {
        let prompt = FixedName::new(" Cheetah ");
        assert_eq!(prompt.read_name().unwrap().as_deref(), Some("cheetah"));
        assert_eq!(prompt.read_name().unwrap(), None);
    }

    #[test]
    fn test_boxed_prompt() {
        let prompt: Box<dyn NamePrompt> = Box::new(FixedName::new("Owl"));
        assert_eq!(prompt.read_name().unwrap().as_deref(), Some("owl"));
    }
}
