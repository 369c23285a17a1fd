use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use contact_book::cli::Assistant;
use contact_book::config::settings::{
    Settings, DEFAULT_LOG_LEVEL, DEFAULT_PAGE_SIZE, DEFAULT_PROMPT,
};

#[derive(Parser)]
#[command(
    name = "contacts",
    author = "Kaylee Beyene",
    version,
    about = "Interactive contact book assistant",
    long_about = "An interactive assistant that keeps names, phone numbers and \
                  birthdays in memory for the current session. Type 'hello' to \
                  start and 'exit' to leave."
)]
struct Cli {
    /// Contacts shown per page
    #[arg(long, env = "CONTACT_BOOK_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Prompt printed before each command
    #[arg(long, env = "CONTACT_BOOK_PROMPT", default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, env = "CONTACT_BOOK_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::default()
        .with_page_size(cli.page_size)
        .with_prompt(cli.prompt)
        .with_log_level(cli.log_level);
    settings.validate()?;

    // Logs go to stderr so stdout only carries the conversation
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut assistant = Assistant::new(settings);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    assistant.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
