use crate::cli::ConfigCommand;
use crate::config::Setting;
use crate::error::CliError;
use crate::settings::SettingsProvider;

async fn describe(settings: &SettingsProvider, setting: Setting) -> Result<String, CliError> {
    Ok(match settings.get::<String>(setting.key()).await? {
        Some(value) => format!("{} = {}", setting, value),
        None => format!("{} = {} (default)", setting, setting.default_value()),
    })
}

pub async fn run(settings: &SettingsProvider, command: ConfigCommand) -> Result<String, CliError> {
    match command {
        ConfigCommand::Get { key: None } => {
            let mut lines = Vec::new();
            for setting in Setting::ALL {
                lines.push(describe(settings, setting).await?);
            }
            Ok(lines.join("\n"))
        }
        ConfigCommand::Get { key: Some(key) } => describe(settings, key.parse()?).await,
        ConfigCommand::Set { key, value } => {
            let setting: Setting = key.parse()?;
            let value = setting.validate(&value)?;
            settings.set(setting.key(), &value).await?;
            Ok(format!("{} = {}", setting, value))
        }
        ConfigCommand::Unset { key } => {
            let setting: Setting = key.parse()?;
            settings.delete(setting.key()).await?;
            Ok(format!("{} reset to {}", setting, setting.default_value()))
        }
    }
}
