use anyhow::{Context, anyhow};
use clap::Parser;
use inquire::Password;
use weather_checker_core::{Config, WeatherQuery, config::API_KEY_ENV, report};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-checker", version, about = "Commandline weather checker")]
pub struct Cli {
    /// City to check, e.g. "Warsaw".
    #[arg(required_unless_present = "configure")]
    pub city: Option<String>,

    /// Enable long listing format.
    #[arg(short, long)]
    pub long: bool,

    /// Store an API key in the config file and exit.
    #[arg(long, conflicts_with_all = ["city", "long"])]
    pub configure: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        if self.configure {
            return configure();
        }

        let city = self.city.ok_or_else(|| anyhow!("A city name is required"))?;
        let query = WeatherQuery::new(city, self.long);

        let config = Config::load()?;
        let env_key = std::env::var(API_KEY_ENV).ok();
        let client = config.client(env_key.as_deref())?;

        let mut stdout = std::io::stdout().lock();
        let record = report(&client, &query, &mut stdout).await?;
        tracing::debug!(found = record.is_some(), city = %query.city, "weather check finished");

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        return Err(anyhow!("API key must not be empty"));
    }

    config.set_api_key(api_key);
    let path = config.save()?;
    println!("Saved API key to {}", path.display());

    Ok(())
}
