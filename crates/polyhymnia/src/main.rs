use crate::prelude::*;
use clap::Parser;
use polyhymnia_core::query::DATAMUSE_API_URL;
use std::time::Duration;

mod client;
mod display;
mod error;
mod prelude;
mod search;

#[derive(Debug, clap::Parser)]
#[command(
    name = "polyhymnia",
    author,
    version,
    about = "Find words by meaning, sound, spelling, and relationships",
    long_about = "Polyhymnia uses the Datamuse API to find words based on meaning, sound, spelling, and relationships."
)]
pub struct App {
    #[clap(flatten)]
    search: search::SearchOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Datamuse words endpoint
    #[clap(long, env = "DATAMUSE_API_URL", default_value = DATAMUSE_API_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[clap(long, env = "DATAMUSE_TIMEOUT", default_value_t = client::REQUEST_TIMEOUT.as_secs())]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "POLYHYMNIA_VERBOSE", default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    search::run(app.search, app.global).await
}
