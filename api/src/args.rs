use clap::{ArgAction, Args as ClapArgs, Parser};
use pawcare_core::domain::common::{DatabaseConfig, DemoConfig, PawcareConfig};
use uuid::Uuid;

#[derive(Debug, Clone, Parser)]
#[command(name = "pawcare-api", version, about = "PawCare pet-care API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub demo: DemoArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Prefix prepended to every route, e.g. "/api".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        long = "database-url",
        env = "DATABASE_URL",
        default_value = "sqlite://pawcare.sqlite?mode=rwc"
    )]
    pub url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DemoArgs {
    #[arg(
        long = "seed-demo-data",
        env = "SEED_DEMO_DATA",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub seed_data: bool,

    /// Owner assumed for requests without an X-Owner-Id header.
    #[arg(
        long = "demo-owner-id",
        env = "DEMO_OWNER_ID",
        default_value = "0193a5c4-7e2b-7000-8000-00000000d3e0"
    )]
    pub owner_id: Uuid,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for PawcareConfig {
    fn from(args: Args) -> Self {
        PawcareConfig {
            database: DatabaseConfig {
                url: args.database.url,
            },
            demo: DemoConfig {
                owner_id: args.demo.owner_id,
                seed_data: args.demo.seed_data,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["pawcare-api"]);
        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.allowed_origins, vec!["http://localhost:5173"]);
        assert!(args.demo.seed_data);
    }

    #[test]
    fn test_into_core_config() {
        let args = Args::parse_from([
            "pawcare-api",
            "--database-url",
            "sqlite::memory:",
            "--seed-demo-data",
            "false",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = PawcareConfig::from(args);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert!(!config.demo.seed_data);
    }
}
