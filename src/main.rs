use std::io;

use anyhow::Result;
use tracing::info;

use rookie_cli::Session;
use rookie_engine::{EvalConfig, Evaluator, Searcher};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("rookie starting");

    let searcher = Searcher::new(Evaluator::new(EvalConfig::default()));
    let mut session = Session::new(searcher);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = session.run(&mut stdin.lock(), &mut stdout.lock())?;

    info!(?outcome, "rookie shutting down");
    Ok(())
}
