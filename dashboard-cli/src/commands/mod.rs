//! Command implementations. Each returns the text to print.

mod account;
mod admin;
mod config;
mod item;
mod list;
mod moderate;

use std::fs;
use std::time::Duration;

use dashboard_lib::AdminClient;
use dashboard_lib::auth::SessionHandle;

use crate::cli::{Cli, Commands};
use crate::config::{Config, Setting};
use crate::error::CliError;
use crate::paths;
use crate::session_store::SettingsSessionStore;
use crate::settings::{SettingsProvider, SqliteBackend};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything a command needs: stored settings, the effective config and a
/// client whose session is persisted in the settings database.
pub struct Context {
    pub settings: SettingsProvider,
    pub config: Config,
    pub client: AdminClient,
}

impl Context {
    /// Opens the settings database in the platform data directory.
    pub async fn open(base_url: Option<String>) -> Result<Self, CliError> {
        let path = paths::settings_db().ok_or(CliError::NoDataDir)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let settings = SettingsProvider::new(SqliteBackend::new(&path).await?);
        Self::new(settings, base_url).await
    }

    pub async fn new(settings: SettingsProvider, base_url: Option<String>) -> Result<Self, CliError> {
        let mut config = Config::load(&settings).await?;
        if let Some(url) = base_url {
            config.base_url = Setting::BaseUrl.validate(&url)?;
        }

        let session = SessionHandle::init(SettingsSessionStore::new(settings.clone())).await;
        let client = AdminClient::builder()
            .url(config.base_url.as_str())
            .session(session)
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        log::debug!("Using API at {}", client.base_url());

        Ok(Self {
            settings,
            config,
            client,
        })
    }
}

pub async fn run(cli: Cli) -> Result<String, CliError> {
    let ctx = Context::open(cli.base_url).await?;
    dispatch(&ctx, cli.command).await
}

pub async fn dispatch(ctx: &Context, command: Commands) -> Result<String, CliError> {
    match command {
        Commands::Login { email, password } => account::login(ctx, &email, &password).await,
        Commands::Logout => account::logout(ctx).await,
        Commands::Whoami => account::whoami(ctx).await,
        Commands::List(args) => list::run(ctx, args).await,
        Commands::Show { resource, id } => item::show(ctx, &resource, &id).await,
        Commands::Delete { resource, id } => item::delete(ctx, &resource, &id).await,
        Commands::Ad(command) => moderate::ad(ctx, command).await,
        Commands::Vendor(command) => moderate::vendor(ctx, command).await,
        Commands::Admin(command) => admin::run(ctx, command).await,
        Commands::Config(command) => config::run(&ctx.settings, command).await,
    }
}

#[cfg(test)]
pub(crate) async fn test_context(name: &str) -> Context {
    // Nothing listens on port 9; any request fails fast.
    Context::new(
        crate::settings::temp_provider(name).await,
        Some("http://127.0.0.1:9".to_string()),
    )
    .await
    .unwrap()
}
