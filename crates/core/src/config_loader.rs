use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads application configuration by layering the TOML file and
    /// `APP_`-prefixed environment variables over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> Result<AppConfig> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/Config.toml"))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()?;

        Ok(config)
    }

    /// Loads application configuration with a specific profile.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_with_profile(profile: &str) -> Result<AppConfig> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/Config.toml"))
            .merge(Toml::file(format!("config/Config.{profile}.toml")))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_falls_back_to_defaults() {
        // No config file in the jail directory, so defaults apply.
        figment::Jail::expect_with(|_jail| {
            let config = ConfigLoader::load().expect("load should succeed without a file");
            assert_eq!(config.server.port, 8080);
            Ok(())
        });
    }

    #[test]
    fn toml_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/Config.toml",
                r#"
                [server]
                host = "127.0.0.1"
                port = 9090

                [tradier]
                api_url = "https://sandbox.tradier.com/v1"
                "#,
            )?;

            let config = ConfigLoader::load().expect("load should succeed");
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.tradier.api_url, "https://sandbox.tradier.com/v1");
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APP_SERVER__PORT", "3000");

            let config = ConfigLoader::load().expect("load should succeed");
            assert_eq!(config.server.port, 3000);
            Ok(())
        });
    }
}
