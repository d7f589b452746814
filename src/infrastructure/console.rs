use crate::domain::ports::Console;
use crate::error::Result;
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Interactive console over the process stdin/stdout.
pub struct TerminalConsole {
    input: Lines<BufReader<Stdin>>,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            input: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for TerminalConsole {
    async fn read_line(&mut self, prompt: &str) -> Result<String> {
        // Prompt stays on the same line as the answer.
        print!("{prompt}");
        std::io::stdout().flush()?;
        Ok(self.input.next_line().await?.unwrap_or_default())
    }

    fn print(&mut self, line: &str) {
        println!("{line}");
    }
}
