use crate::configuration::Configuration;
use crate::error::Result;

/// The asynchronous Client to make requests with.
pub type Client = reqwest::Client;
/// The asynchronous Client Builder.
pub type ClientBuilder = reqwest::ClientBuilder;

/// Build the client for the form page and the form submission.
/// Idle connections are not kept, every request opens its own.
pub fn build_client(configuration: &Configuration) -> Result<Client> {
    let mut builder = ClientBuilder::new()
        .timeout(configuration.request_timeout)
        .pool_max_idle_per_host(0);

    if let Some(ref user_agent) = configuration.user_agent {
        builder = builder.user_agent(user_agent);
    }

    Ok(builder.build()?)
}

/// Build the client for the generative API. The model call has no timeout.
pub fn build_llm_client(configuration: &Configuration) -> Result<Client> {
    let mut builder = ClientBuilder::new().pool_max_idle_per_host(0);

    if let Some(ref user_agent) = configuration.user_agent {
        builder = builder.user_agent(user_agent);
    }

    Ok(builder.build()?)
}

#[test]
fn build_clients() {
    let mut configuration = Configuration::new();
    configuration.with_user_agent(Some("form_spider"));

    assert!(build_client(&configuration).is_ok());
    assert!(build_llm_client(&configuration).is_ok());
}
