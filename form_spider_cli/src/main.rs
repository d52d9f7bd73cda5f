extern crate env_logger;
extern crate form_spider;

pub mod options;
mod prompt;
mod session;

use clap::Parser;
use form_spider::client::{build_client, build_llm_client};
use form_spider::llm::GeminiProvider;
use form_spider::Configuration;
use options::Cli;
use session::{Exit, Session};
use std::io::Write;
use std::time::Duration;

const MISSING_KEY: &str = "GEMINI_API_KEY belum diatur (environment atau file .env).";

/// The Gemini provider, or a failed exit when no api key is set.
fn gemini_provider<E: Write>(
    configuration: &Configuration,
    err: &mut E,
) -> Result<GeminiProvider, Exit> {
    GeminiProvider::from_configuration(configuration).map_err(|_| {
        let _ = writeln!(err, "{}", MISSING_KEY);
        Exit::Failure
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        use env_logger::Env;
        let env = Env::default()
            .filter_or("RUST_LOG", "info")
            .write_style_or("RUST_LOG_STYLE", "always");

        env_logger::init_from_env(env);
    }

    // a missing .env is fine, the key may come from the environment
    dotenvy::dotenv().ok();

    let mut configuration = Configuration::from_env();

    configuration
        .with_model(cli.model.as_deref())
        .with_request_timeout(cli.timeout.map(Duration::from_secs))
        .with_user_agent(cli.agent.as_deref());

    let provider = match gemini_provider(&configuration, &mut std::io::stderr()) {
        Ok(provider) => provider,
        Err(exit) => std::process::exit(exit.code()),
    };

    let client = match build_client(&configuration) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let llm_client = match build_llm_client(&configuration) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    let exit = Session::new(
        stdin.lock(),
        stdout.lock(),
        std::io::stderr(),
        &client,
        &llm_client,
        &provider,
    )
    .with_url(cli.url)
    .run()
    .await
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        Exit::Failure
    });

    stdout.flush().ok();
    std::process::exit(exit.code());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_provider_missing_key() {
        let mut err = Vec::new();

        let exit = gemini_provider(&Configuration::new(), &mut err).unwrap_err();

        assert_eq!(exit, Exit::Failure);
        assert_eq!(exit.code(), 1);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "GEMINI_API_KEY belum diatur (environment atau file .env).\n"
        );
    }

    #[test]
    fn test_gemini_provider_empty_key() {
        let mut configuration = Configuration::new();
        configuration.with_api_key(Some(""));
        let mut err = Vec::new();

        assert_eq!(
            gemini_provider(&configuration, &mut err).unwrap_err(),
            Exit::Failure
        );
        assert!(!err.is_empty());
    }

    #[test]
    fn test_gemini_provider_with_key() {
        let mut configuration = Configuration::new();
        configuration.with_api_key(Some("key"));
        let mut err = Vec::new();

        assert!(gemini_provider(&configuration, &mut err).is_ok());
        assert!(err.is_empty());
    }
}
