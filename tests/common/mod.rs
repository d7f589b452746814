use async_trait::async_trait;
use museum_tickets::application::flow::SessionFlow;
use museum_tickets::domain::catalog::Catalog;
use museum_tickets::domain::ports::{CodeRenderer, Console, ConsoleBox};
use museum_tickets::error::{BookingError, Result};
use museum_tickets::infrastructure::i18n::StaticLocalizer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Everything the session printed or prompted, in order.
pub type Transcript = Arc<Mutex<Vec<String>>>;

pub struct ScriptedConsole {
    answers: Mutex<VecDeque<String>>,
    transcript: Transcript,
}

pub fn scripted_console(answers: &[&str]) -> (ConsoleBox, Transcript) {
    let transcript: Transcript = Arc::new(Mutex::new(Vec::new()));
    let console = ScriptedConsole {
        answers: Mutex::new(answers.iter().map(|s| s.to_string()).collect()),
        transcript: Arc::clone(&transcript),
    };
    (Box::new(console), transcript)
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.lock().unwrap().push(prompt.to_string());
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or_default())
    }

    fn print(&mut self, line: &str) {
        self.transcript.lock().unwrap().push(line.to_string());
    }
}

pub struct NullRenderer;

#[async_trait]
impl CodeRenderer for NullRenderer {
    async fn render(&self, _uri: &str) -> Result<()> {
        Ok(())
    }
}

pub struct FailingRenderer;

#[async_trait]
impl CodeRenderer for FailingRenderer {
    async fn render(&self, _uri: &str) -> Result<()> {
        Err(BookingError::Payment("renderer unavailable".to_string()))
    }
}

/// Session flow over the default catalog with a scripted console and a
/// seeded rng.
pub fn scripted_flow(answers: &[&str]) -> (SessionFlow, Transcript) {
    let (console, transcript) = scripted_console(answers);
    let flow = SessionFlow::with_rng(
        Catalog::default(),
        Box::new(StaticLocalizer::new()),
        Box::new(NullRenderer),
        console,
        StdRng::seed_from_u64(99),
    );
    (flow, transcript)
}

pub fn contains(transcript: &Transcript, needle: &str) -> bool {
    transcript
        .lock()
        .unwrap()
        .iter()
        .any(|line| line.contains(needle))
}
