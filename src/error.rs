use thiserror::Error;

/// Errors that abort the run before or during login. Everything past login
/// degrades per item instead of failing the process.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("environment variables ISLANDSUN_USERNAME and ISLANDSUN_PASSWORD must be provided")]
    MissingCredentials,

    #[error("login failed: {0}")]
    Login(#[from] reqwest::Error),
}

impl FatalError {
    pub fn exit_code(&self) -> i32 {
        match self {
            FatalError::MissingCredentials => 2,
            FatalError::Login(_) => 3,
        }
    }
}
