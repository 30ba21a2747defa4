/// Configuration management
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub log_format: Option<LogFormat>,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenv::dotenv().ok();
        envy::from_env()
    }

    /// JSON logs in production unless `LOG_FORMAT` says otherwise.
    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or(if self.app_env == "production" {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.app_env, "development");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.log_format(), LogFormat::Pretty);
    }

    #[test]
    fn production_defaults_to_json_logs() {
        let config: Config = envy::from_iter(vars(&[("APP_ENV", "production")])).unwrap();
        assert_eq!(config.log_format(), LogFormat::Json);

        let config: Config = envy::from_iter(vars(&[
            ("APP_ENV", "production"),
            ("LOG_FORMAT", "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.log_format(), LogFormat::Pretty);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result: Result<Config, _> = envy::from_iter(vars(&[("PORT", "abc")]));
        assert!(result.is_err());
    }
}
