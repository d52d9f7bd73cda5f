use std::time::Duration;

/// Default timeout for the form page and the form submission.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Default Gemini REST endpoint, without the model path.
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Structure to configure the scrape run and the AI bridge.
/// <pre>
/// let mut configuration = Configuration::from_env();
/// configuration
///     .with_request_timeout(Some(Duration::from_secs(5)))
///     .with_model(Some("gemini-2.0-flash"));
/// let client = form_spider::client::build_client(&configuration)?;
/// </pre>
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Timeout for the GET of the form page and the POST of the form.
    pub request_timeout: Duration,
    /// User-Agent sent with the form requests.
    pub user_agent: Option<String>,
    /// The generative model to ask. Example: gemini-2.5-flash
    pub model: String,
    /// Base url of the generative API.
    pub api_url: String,
    /// The API key for the generative API.
    pub api_key: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: None,
            model: DEFAULT_GEMINI_MODEL.into(),
            api_url: DEFAULT_GEMINI_API_URL.into(),
            api_key: None,
        }
    }
}

impl Configuration {
    /// Represents the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration from `GEMINI_API_KEY`, `GEMINI_MODEL` and `GEMINI_API_URL`.
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        let var = |key: &str| {
            std::env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut configuration = Self::default();

        configuration
            .with_api_key(var("GEMINI_API_KEY").as_deref())
            .with_model(var("GEMINI_MODEL").as_deref())
            .with_api_url(var("GEMINI_API_URL").as_deref());

        configuration
    }

    /// Set the request timeout. `None` resets to the 10 second default.
    pub fn with_request_timeout(&mut self, request_timeout: Option<Duration>) -> &mut Self {
        self.request_timeout = request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        self
    }

    /// Set the user agent for the form requests.
    pub fn with_user_agent(&mut self, user_agent: Option<&str>) -> &mut Self {
        self.user_agent = user_agent.map(|ua| ua.into());
        self
    }

    /// Set the model. `None` keeps the current one.
    pub fn with_model(&mut self, model: Option<&str>) -> &mut Self {
        if let Some(model) = model {
            self.model = model.into();
        }
        self
    }

    /// Set the base api url. `None` keeps the current one.
    pub fn with_api_url(&mut self, api_url: Option<&str>) -> &mut Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url.trim_end_matches('/').into();
        }
        self
    }

    /// Set the api key.
    pub fn with_api_key(&mut self, api_key: Option<&str>) -> &mut Self {
        self.api_key = api_key.map(|k| k.into());
        self
    }
}

#[test]
fn default_configuration() {
    let configuration = Configuration::new();

    assert_eq!(configuration.request_timeout, Duration::from_secs(10));
    assert_eq!(configuration.model, "gemini-2.5-flash");
    assert_eq!(
        configuration.api_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert!(configuration.api_key.is_none());
    assert!(configuration.user_agent.is_none());
}

#[test]
fn configuration_setters() {
    let mut configuration = Configuration::new();

    configuration
        .with_request_timeout(Some(Duration::from_secs(3)))
        .with_user_agent(Some("form_spider/0.1"))
        .with_model(Some("gemini-2.0-flash"))
        .with_api_url(Some("http://127.0.0.1:8080/v1beta/"))
        .with_api_key(Some("key"));

    assert_eq!(configuration.request_timeout, Duration::from_secs(3));
    assert_eq!(configuration.user_agent.as_deref(), Some("form_spider/0.1"));
    assert_eq!(configuration.model, "gemini-2.0-flash");
    assert_eq!(configuration.api_url, "http://127.0.0.1:8080/v1beta");
    assert_eq!(configuration.api_key.as_deref(), Some("key"));

    configuration.with_model(None).with_request_timeout(None);

    assert_eq!(configuration.model, "gemini-2.0-flash");
    assert_eq!(configuration.request_timeout, Duration::from_secs(10));
}

#[test]
fn configuration_from_env() {
    std::env::set_var("GEMINI_API_KEY", "  ");
    std::env::set_var("GEMINI_MODEL", " gemini-2.0-flash ");
    std::env::set_var("GEMINI_API_URL", "http://127.0.0.1:8080/v1beta/");

    let configuration = Configuration::from_env();

    assert!(configuration.api_key.is_none());
    assert_eq!(configuration.model, "gemini-2.0-flash");
    assert_eq!(configuration.api_url, "http://127.0.0.1:8080/v1beta");

    std::env::set_var("GEMINI_API_KEY", "key");
    std::env::remove_var("GEMINI_MODEL");
    std::env::remove_var("GEMINI_API_URL");

    let configuration = Configuration::from_env();

    assert_eq!(configuration.api_key.as_deref(), Some("key"));
    assert_eq!(configuration.model, DEFAULT_GEMINI_MODEL);
    assert_eq!(configuration.api_url, DEFAULT_GEMINI_API_URL);

    std::env::remove_var("GEMINI_API_KEY");
}
