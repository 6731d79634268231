use std::{net::IpAddr, path::PathBuf};

use clap::Parser;
use nutridish_core::domain::common::{DatabaseConfig, NutriDishConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutridish-api", about = "NutriDish recipe and meal-planning API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api/v1".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Directory the recipe images are served from.
    #[arg(long, env = "IMAGE_DIR", default_value = "image")]
    pub image_dir: PathBuf,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub db_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub db_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "nutridish")]
    pub db_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "nutridish")]
    pub db_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "nutridish")]
    pub db_name: String,
}

impl From<Args> for NutriDishConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.db_host,
                port: args.database.db_port,
                username: args.database.db_user,
                password: args.database.db_password,
                name: args.database.db_name,
            },
        }
    }
}
