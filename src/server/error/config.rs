use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {name}: '{value}'")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The rejected value
        value: String,
    },

    /// Only one half of the shared secret pair is configured.
    ///
    /// `FEEDBACK_SECRET` and `FEEDBACK_TOKEN` enable the shared-secret guard together;
    /// setting one without the other would leave the create endpoint half protected.
    #[error("FEEDBACK_SECRET and FEEDBACK_TOKEN must be set together")]
    IncompleteSharedSecret,
}
