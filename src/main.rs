use clap::Parser;
use miette::{IntoDiagnostic, Result};
use museum_tickets::application::flow::SessionFlow;
use museum_tickets::domain::catalog::Catalog;
use museum_tickets::domain::language::Language;
use museum_tickets::infrastructure::console::TerminalConsole;
use museum_tickets::infrastructure::i18n::StaticLocalizer;
use museum_tickets::infrastructure::render::FileRenderer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Language (en, kn, hi). Skips the interactive language menu.
    #[arg(long)]
    lang: Option<Language>,

    /// File the scannable payment code is written to.
    #[arg(long, default_value = FileRenderer::DEFAULT_PATH)]
    code_path: PathBuf,

    /// JSON catalog file overriding the built-in destination list.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match cli.catalog {
        Some(path) => Catalog::from_path(&path).into_diagnostic()?,
        None => Catalog::default(),
    };

    let mut flow = SessionFlow::new(
        catalog,
        Box::new(StaticLocalizer::new()),
        Box::new(FileRenderer::new(cli.code_path)),
        Box::new(TerminalConsole::new()),
    );
    if let Some(lang) = cli.lang {
        flow.set_language(lang);
    }

    flow.run().await.into_diagnostic()?;

    Ok(())
}
