use anyhow::Result;
use draft_blanks::config::{Command, Config};
use draft_blanks::{cli, lsp::server::serve};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if config.command == Command::Serve {
        serve(config).await
    } else {
        cli::run(&config)
    }
}
