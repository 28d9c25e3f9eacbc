use anyhow::Context;
use std::path::{
    Path,
    PathBuf,
};
use tracing::info;

/// The env var that holds a fallback api key
const API_KEY_ENV_VAR: &str = "KLOUT_API_KEY";

#[derive(argh::FromArgs)]
#[argh(description = "a tool to look up users on klout")]
pub struct Options {
    #[argh(option, description = "the api key", long = "api-key", short = 'k')]
    pub api_key: Option<String>,

    #[argh(option, description = "a proxy to send requests through")]
    pub proxy: Option<url::Url>,

    #[argh(option, description = "the path to a config file")]
    pub config: Option<PathBuf>,

    #[argh(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(argh::FromArgs)]
#[argh(subcommand)]
pub enum SubCommand {
    Score(ScoreOptions),
    Profile(ProfileOptions),
    Topics(TopicsOptions),
    InfluencedBy(InfluencedByOptions),
    InfluencerOf(InfluencerOfOptions),
}

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "score", description = "get the klout score of users")]
pub struct ScoreOptions {
    #[argh(positional, description = "the usernames")]
    pub usernames: Vec<String>,
}

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "profile", description = "get the klout profile of users")]
pub struct ProfileOptions {
    #[argh(positional, description = "the usernames")]
    pub usernames: Vec<String>,
}

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "topics", description = "get the topics of users")]
pub struct TopicsOptions {
    #[argh(positional, description = "the usernames")]
    pub usernames: Vec<String>,
}

#[derive(argh::FromArgs)]
#[argh(
    subcommand,
    name = "influenced-by",
    description = "get the users that influence users"
)]
pub struct InfluencedByOptions {
    #[argh(positional, description = "the usernames")]
    pub usernames: Vec<String>,
}

#[derive(argh::FromArgs)]
#[argh(
    subcommand,
    name = "influencer-of",
    description = "get the users influenced by users"
)]
pub struct InfluencerOfOptions {
    #[argh(positional, description = "the usernames")]
    pub usernames: Vec<String>,
}

/// Get the default config file path
fn default_config_path() -> anyhow::Result<PathBuf> {
    let config_dir = dirs_next::config_dir().context("missing config dir")?;
    Ok(config_dir.join("klout/config.toml"))
}

/// Load the config, or return an empty config if the file does not exist
fn load_config(path: &Path) -> anyhow::Result<klout::ClientConfig> {
    let file = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("no config at '{}', using defaults", path.display());
            return Ok(klout::ClientConfig::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read '{}'", path.display()))
        }
    };
    let config = toml::from_str(&file).context("failed to parse config")?;
    info!("loaded config from '{}'", path.display());
    Ok(config)
}

/// Setup the logger
fn setup_logger() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::filter::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to set subscriber")
}

fn main() {
    let options: Options = argh::from_env();
    let code = match real_main(options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{:?}", e);
            1
        }
    };
    std::process::exit(code);
}

fn real_main(options: Options) -> anyhow::Result<()> {
    setup_logger()?;

    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    tokio_rt.block_on(async_main(options))
}

async fn async_main(options: Options) -> anyhow::Result<()> {
    let config_path = match options.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let mut config = load_config(&config_path)?;

    if options.api_key.is_some() {
        config.api_key = options.api_key;
    }
    if config.api_key.is_none() {
        config.api_key = std::env::var(API_KEY_ENV_VAR).ok();
    }
    if options.proxy.is_some() {
        config.proxy = options.proxy;
    }

    let client = klout::Client::new(config).context("failed to build client")?;
    let users = match options.subcommand {
        SubCommand::Score(options) => client.score(options.usernames).await,
        SubCommand::Profile(options) => client.profile(options.usernames).await,
        SubCommand::Topics(options) => client.topics(options.usernames).await,
        SubCommand::InfluencedBy(options) => client.influenced_by(options.usernames).await,
        SubCommand::InfluencerOf(options) => client.influencer_of(options.usernames).await,
    }
    .context("failed to look up users")?;

    let output = serde_json::to_string_pretty(&users).context("failed to serialize users")?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_config_is_empty() {
        let path = std::env::temp_dir().join("klout-missing-config/config.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config, klout::ClientConfig::new());
    }

    #[test]
    fn config_from_file() {
        let path =
            std::env::temp_dir().join(format!("klout-config-{}.toml", std::process::id()));
        std::fs::write(&path, "api_key = \"secret\"\n").unwrap();
        let config = load_config(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap(), klout::ClientConfig::new().api_key("secret"));
    }
}
