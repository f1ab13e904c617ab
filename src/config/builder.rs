use super::{ScaffoldConfig, DEFAULT_TIMEOUT_SECS};
use crate::cli::{CreateArgs, RemoteArgs};
use crate::errors::{Error, Result};
use crate::github::parse_reference;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// A builder for creating a [`ScaffoldConfig`] programmatically.
///
/// # Examples
///
/// ```
/// use plugin_scaffold::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .repository("https://github.com/twilio/flex-plugin-builder/tree/v4.0.0")
///     .output_dir("my-plugin")
///     .parallel(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.reference.git_ref, "v4.0.0");
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    repository: Option<String>,
    output_dir: PathBuf,
    api_base: Option<String>,
    token: Option<String>,
    user_agent: String,
    timeout_secs: u64,
    parallel: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            repository: None,
            output_dir: PathBuf::from("."),
            api_base: None,
            token: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            parallel: true,
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from the options shared by all remote commands.
    pub fn from_remote_args(args: &RemoteArgs) -> Self {
        let mut builder = Self::new()
            .repository(&args.repository)
            .timeout_secs(args.timeout);
        if let Some(api_url) = &args.api_url {
            builder = builder.api_base(api_url);
        }
        builder
    }

    /// Seeds a builder from the `create` command's options.
    pub fn from_create_args(args: &CreateArgs) -> Self {
        Self::from_remote_args(&args.remote)
            .output_dir(&args.output_dir)
            .parallel(!args.sequential)
    }

    /// Sets the repository reference (required).
    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the per-request timeout in seconds. Must be greater than zero.
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the settings and produces a [`ScaffoldConfig`].
    ///
    /// # Errors
    /// - `Error::Config` if no repository was set, the API base is not an
    ///   absolute URL, or the timeout is zero.
    /// - `Error::MalformedReference` if the repository cannot be parsed.
    pub fn build(self) -> Result<ScaffoldConfig> {
        let repository = self
            .repository
            .ok_or_else(|| Error::Config("A repository URL is required".to_string()))?;
        let reference = parse_reference(&repository)?;

        if let Some(base) = &self.api_base {
            Url::parse(base)
                .map_err(|e| Error::Config(format!("Invalid API base URL '{}': {}", base, e)))?;
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("Timeout must be greater than zero".to_string()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::Config("User agent must not be empty".to_string()));
        }

        log::debug!("Resolved repository reference: {:?}", reference);
        Ok(ScaffoldConfig {
            reference,
            output_dir: self.output_dir,
            api_base: self.api_base,
            token: self.token,
            user_agent: self.user_agent,
            timeout: Some(Duration::from_secs(self.timeout_secs)),
            parallel: self.parallel,
        })
    }
}
