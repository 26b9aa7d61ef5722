//! Client configuration.
//!
//! [`BoardConfig`] gathers the remote endpoint, owner identity, display
//! defaults and request policy. [`ConfigArgs`] is the command-line surface for
//! it: flags override `TASKBOARD_*` environment variables, which override the
//! built-in defaults.

use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, value_parser};
use reqwest::Url;

use crate::task::domain::OwnerId;

/// Default task resource endpoint.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/tasks";
/// Default accent color preselected in the form.
pub const DEFAULT_COLOR: &str = "#563d7c";
/// Default limit on every remote call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint of the task resource.
pub const ENV_API_URL: &str = "TASKBOARD_API_URL";
/// Owner stamped on created tasks.
pub const ENV_OWNER_ID: &str = "TASKBOARD_OWNER_ID";
/// Whether listings are restricted to the owner.
pub const ENV_FILTER_BY_OWNER: &str = "TASKBOARD_FILTER_BY_OWNER";
/// Whether completed tasks start hidden.
pub const ENV_HIDE_COMPLETED: &str = "TASKBOARD_HIDE_COMPLETED";
/// Request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "TASKBOARD_TIMEOUT_SECS";
/// Bearer token sent with every request.
pub const ENV_AUTH_TOKEN: &str = "TASKBOARD_AUTH_TOKEN";
/// Page size for paginated listings.
pub const ENV_PAGE_SIZE: &str = "TASKBOARD_PAGE_SIZE";
/// Accent color preselected in the form.
pub const ENV_DEFAULT_COLOR: &str = "TASKBOARD_DEFAULT_COLOR";

/// Settings shared by every command.
///
/// Each flag falls back to its `TASKBOARD_*` variable, then to the built-in
/// default. Values are validated while parsing.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Task collection endpoint
    #[arg(long, global = true, env = ENV_API_URL, default_value = DEFAULT_API_URL)]
    api_url: Url,

    /// Owner recorded on new tasks
    #[arg(long, global = true, env = ENV_OWNER_ID)]
    owner: Option<OwnerId>,

    /// Only list tasks belonging to the owner
    #[arg(
        long,
        global = true,
        env = ENV_FILTER_BY_OWNER,
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    filter_by_owner: bool,

    /// Hide completed tasks
    #[arg(
        long,
        global = true,
        env = ENV_HIDE_COMPLETED,
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    hide_completed: bool,

    /// Per-request timeout in seconds
    #[arg(
        long,
        global = true,
        env = ENV_TIMEOUT_SECS,
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs(),
        value_parser = value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    /// Bearer token sent with every request
    #[arg(long, global = true, env = ENV_AUTH_TOKEN, hide_env_values = true)]
    auth_token: Option<String>,

    /// Records per page for paginated listings
    #[arg(long, global = true, env = ENV_PAGE_SIZE, value_parser = value_parser!(u32).range(1..))]
    page_size: Option<u32>,

    /// Accent color preselected in the form
    #[arg(long, global = true, env = ENV_DEFAULT_COLOR, default_value = DEFAULT_COLOR)]
    default_color: String,
}

impl From<ConfigArgs> for BoardConfig {
    fn from(args: ConfigArgs) -> Self {
        let ConfigArgs {
            api_url,
            owner,
            filter_by_owner,
            hide_completed,
            timeout_secs,
            auth_token,
            page_size,
            default_color,
        } = args;
        Self {
            api_url: api_url.into(),
            owner_id: owner.unwrap_or_default(),
            filter_by_owner,
            hide_completed,
            request_timeout: Duration::from_secs(timeout_secs),
            auth_token: auth_token.filter(|token| !token.trim().is_empty()),
            page_size,
            default_color,
        }
    }
}

/// Client configuration.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use taskboard::config::BoardConfig;
///
/// let config = BoardConfig::default()
///     .with_api_url("https://tasks.example.com/api/tasks")
///     .with_request_timeout(Duration::from_secs(3));
/// assert!(!config.filter_by_owner());
/// assert_eq!(config.request_timeout(), Duration::from_secs(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    api_url: String,
    owner_id: OwnerId,
    filter_by_owner: bool,
    hide_completed: bool,
    request_timeout: Duration,
    auth_token: Option<String>,
    page_size: Option<u32>,
    default_color: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            owner_id: OwnerId::default(),
            filter_by_owner: false,
            hide_completed: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            auth_token: None,
            page_size: None,
            default_color: DEFAULT_COLOR.to_owned(),
        }
    }
}

impl BoardConfig {
    /// Sets the task resource endpoint.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the owner stamped on created tasks.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: OwnerId) -> Self {
        self.owner_id = owner_id;
        self
    }

    /// Restricts listings to the owner's tasks.
    #[must_use]
    pub const fn with_filter_by_owner(mut self, enabled: bool) -> Self {
        self.filter_by_owner = enabled;
        self
    }

    /// Starts the board with completed tasks hidden.
    #[must_use]
    pub const fn with_hide_completed(mut self, enabled: bool) -> Self {
        self.hide_completed = enabled;
        self
    }

    /// Sets the limit applied to every remote call.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the bearer token sent with every request.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Enables paginated listing with `size` records per page.
    #[must_use]
    pub const fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets the accent color preselected in the form.
    #[must_use]
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    /// Returns the task resource endpoint.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the owner stamped on created tasks.
    #[must_use]
    pub const fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Returns whether listings are restricted to the owner.
    #[must_use]
    pub const fn filter_by_owner(&self) -> bool {
        self.filter_by_owner
    }

    /// Returns whether completed tasks start hidden.
    #[must_use]
    pub const fn hide_completed(&self) -> bool {
        self.hide_completed
    }

    /// Returns the limit applied to every remote call.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the bearer token, if any.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Returns the listing page size, if pagination is enabled.
    #[must_use]
    pub const fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// Returns the accent color preselected in the form.
    #[must_use]
    pub fn default_color(&self) -> &str {
        &self.default_color
    }
}
