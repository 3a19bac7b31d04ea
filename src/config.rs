use std::env;

use clap::Parser;

use handle_errors::Error;

/// Runtime configuration for the trivia API. Every flag can also be supplied
/// through the environment (a `.env` file is honored); environment values win
/// over command-line values.
#[derive(Parser, Debug, PartialEq)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// Log level for the service crates (info, warn or error)
    #[clap(short, long, default_value = "warn")]
    pub log_level: String,
    /// Port the HTTP server binds to
    #[clap(long, default_value = "8080")]
    pub port: u16,
    /// Database user
    #[clap(long, default_value = "postgres")]
    pub db_user: String,
    /// Database password
    #[clap(long, default_value = "postgres")]
    pub db_password: String,
    /// Host of the Postgres server
    #[clap(long, default_value = "localhost")]
    pub db_host: String,
    /// Port of the Postgres server
    #[clap(long, default_value = "5432")]
    pub db_port: u16,
    /// Database name
    #[clap(long, default_value = "trivia")]
    pub db_name: String,
}

impl Config {
    pub fn new() -> Result<Config, Error> {
        dotenv::dotenv().ok();
        let config = Config::parse();

        let port = env::var("PORT")
            .ok()
            .map(|val| val.parse::<u16>())
            .unwrap_or(Ok(config.port))
            .map_err(Error::ParseError)?;

        let db_user = env::var("POSTGRES_USER").unwrap_or(config.db_user.to_owned());
        let db_password = env::var("POSTGRES_PASSWORD").unwrap_or(config.db_password.to_owned());
        let db_host = env::var("POSTGRES_HOST").unwrap_or(config.db_host.to_owned());
        let db_port = env::var("POSTGRES_PORT")
            .ok()
            .map(|val| val.parse::<u16>())
            .unwrap_or(Ok(config.db_port))
            .map_err(Error::ParseError)?;
        let db_name = env::var("POSTGRES_DB").unwrap_or(config.db_name.to_owned());

        Ok(Config {
            log_level: config.log_level,
            port,
            db_user,
            db_password,
            db_host,
            db_port,
            db_name,
        })
    }

    pub fn db_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}
