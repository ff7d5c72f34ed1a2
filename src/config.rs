use std::path::PathBuf;
use std::time::Duration;

use crate::error::FatalError;

pub const USERNAME_VAR: &str = "ISLANDSUN_USERNAME";
pub const PASSWORD_VAR: &str = "ISLANDSUN_PASSWORD";

/// Backend endpoints. Defaults point at production; tests swap in a stub.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub login: String,
    pub product_search: String,
    pub marketing_price: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: "http://apps.islandsunindonesia.com:81/islandsun/index.php/login".to_string(),
            product_search:
                "http://apps.islandsunindonesia.com:81/islandsun/samplerequest/getAjaxproduct/null"
                    .to_string(),
            marketing_price:
                "http://apps.islandsunindonesia.com:81/islandsun/samplerequest/getMarketingPrice"
                    .to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoints: Endpoints,
    pub workers: usize,
    pub request_timeout: Duration,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            workers: 15,
            request_timeout: Duration::from_secs(15),
            output_dir: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Reads `ISLANDSUN_USERNAME` / `ISLANDSUN_PASSWORD`. Unset or blank
    /// values are a configuration error, checked before any network call.
    pub fn from_env() -> Result<Self, FatalError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FatalError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        match (get(USERNAME_VAR), get(PASSWORD_VAR)) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(FatalError::MissingCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_present() {
        let creds = Credentials::from_lookup(|key| match key {
            USERNAME_VAR => Some("alice".to_string()),
            PASSWORD_VAR => Some("s3cret".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "s3cret");
    }

    #[test]
    fn missing_username_is_config_error() {
        let err = Credentials::from_lookup(|key| match key {
            PASSWORD_VAR => Some("s3cret".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, FatalError::MissingCredentials));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn blank_password_is_config_error() {
        let err = Credentials::from_lookup(|key| match key {
            USERNAME_VAR => Some("alice".to_string()),
            PASSWORD_VAR => Some("   ".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, FatalError::MissingCredentials));
    }

    #[test]
    fn default_endpoints_are_distinct() {
        let ep = Endpoints::default();
        assert_ne!(ep.login, ep.product_search);
        assert_ne!(ep.product_search, ep.marketing_price);
    }
}
