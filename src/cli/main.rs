mod commands;
mod config;
mod logger;
mod output;

use self::config::{
    Config,
    Severity,
};
use anyhow::Context;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(argh::FromArgs)]
#[argh(description = "A CLI to interact with the HubbleSite api")]
pub struct Options {
    #[argh(option, long = "config", description = "the path to a config file")]
    config: Option<PathBuf>,

    #[argh(switch, short = 'v', long = "verbose", description = "log at the info level")]
    verbose: bool,

    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(argh::FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    News(self::commands::news::Options),
    NewsRelease(self::commands::news_release::Options),
    Images(self::commands::images::Options),
    Image(self::commands::image::Options),
    Videos(self::commands::videos::Options),
    Video(self::commands::video::Options),
    Glossary(self::commands::glossary::Options),
    GlossaryTerm(self::commands::glossary_term::Options),
    ExternalFeed(self::commands::external_feed::Options),
    ExternalFeedSince(self::commands::external_feed_since::Options),
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();

    let config = match options.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };

    let level = log_level(options.verbose, &config);
    self::logger::setup(level).context("failed to setup logger")?;

    let mut has_errors = false;
    for message in config.validate() {
        match message.severity() {
            Severity::Warn => tracing::warn!("{}", message.error()),
            Severity::Error => {
                tracing::error!("{}", message.error());
                has_errors = true;
            }
        }
    }
    if has_errors {
        anyhow::bail!("invalid config");
    }

    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    tokio_rt.block_on(async_main(options, config))?;
    Ok(())
}

/// Pick the log level.
///
/// `--verbose` means `info`, then the config level, then `warn`.
fn log_level(verbose: bool, config: &Config) -> LevelFilter {
    if verbose {
        LevelFilter::INFO
    } else {
        config.log_level().unwrap_or(LevelFilter::WARN)
    }
}

async fn async_main(options: Options, config: Config) -> anyhow::Result<()> {
    let client = config.build_client()?;

    match options.subcommand {
        SubCommand::News(options) => self::commands::news::exec(&client, options).await?,
        SubCommand::NewsRelease(options) => {
            self::commands::news_release::exec(&client, options).await?
        }
        SubCommand::Images(options) => self::commands::images::exec(&client, options).await?,
        SubCommand::Image(options) => self::commands::image::exec(&client, options).await?,
        SubCommand::Videos(options) => self::commands::videos::exec(&client, options).await?,
        SubCommand::Video(options) => self::commands::video::exec(&client, options).await?,
        SubCommand::Glossary(options) => self::commands::glossary::exec(&client, options).await?,
        SubCommand::GlossaryTerm(options) => {
            self::commands::glossary_term::exec(&client, options).await?
        }
        SubCommand::ExternalFeed(options) => {
            self::commands::external_feed::exec(&client, options).await?
        }
        SubCommand::ExternalFeedSince(options) => {
            self::commands::external_feed_since::exec(&client, options).await?
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use argh::FromArgs;

    #[test]
    fn log_levels() {
        let config = Config::default();
        assert_eq!(log_level(false, &config), LevelFilter::WARN);
        assert_eq!(log_level(true, &config), LevelFilter::INFO);

        let config = Config::load_from_str("log_level = \"trace\"").expect("invalid config");
        assert_eq!(log_level(false, &config), LevelFilter::TRACE);
        assert_eq!(log_level(true, &config), LevelFilter::INFO);

        let config = Config::load_from_str("log_level = \"loud\"").expect("invalid config");
        assert_eq!(log_level(false, &config), LevelFilter::WARN);
    }

    #[test]
    fn return_type_option() {
        let result = Options::from_args(&["hubble"], &["news", "-t", "xml"]);
        assert!(result.is_err());

        let options = Options::from_args(&["hubble"], &["news", "1", "2", "-t", "content"])
            .expect("failed to parse args");
        match options.subcommand {
            SubCommand::News(_) => {}
            _ => panic!("expected the news subcommand"),
        }
    }
}
