use std::io;

use error::AppError;
use session::SessionFile;
use settings::Settings;

mod commands;
mod error;
mod prompt;
mod session;
mod settings;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "splitter={level},split_engine={level}",
            level = settings.level
        ))
        .with_writer(io::stderr)
        .init();

    let path = settings.session.as_deref().ok_or(AppError::MissingSession)?;
    tracing::info!("Loading session from {path}...");
    let engine = SessionFile::load(path)?.into_engine()?;

    let stdin = io::stdin();
    let engine = prompt::Prompt::new(engine, io::stdout(), settings.summary_json)
        .run(stdin.lock())?;

    if !engine.is_complete() {
        let (done, total) = engine.progress();
        tracing::warn!("session abandoned after {done} of {total} items");
    }

    Ok(())
}
