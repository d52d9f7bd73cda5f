use clap::Parser;

/// program to fill the dropdowns of a web form, read the result table and ask an AI about it.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// The form page URL. Prompted for when missing.
    #[clap(short, long)]
    pub url: Option<String>,
    /// Print requests made on standard error
    #[clap(short, long)]
    pub verbose: bool,
    /// The Gemini model to ask. Defaults to GEMINI_MODEL or gemini-2.5-flash.
    #[clap(short, long)]
    pub model: Option<String>,
    /// Timeout in seconds for loading and submitting the form.
    #[clap(short, long)]
    pub timeout: Option<u64>,
    /// User-Agent
    #[clap(short = 'A', long)]
    pub agent: Option<String>,
}

#[test]
fn parse_no_args() {
    let cli = Cli::parse_from(["form_spider"]);

    assert!(cli.url.is_none());
    assert!(!cli.verbose);
    assert!(cli.timeout.is_none());
}

#[test]
fn parse_all_args() {
    let cli = Cli::parse_from([
        "form_spider",
        "--url",
        "https://example.com/cari",
        "-v",
        "-m",
        "gemini-2.0-flash",
        "-t",
        "30",
        "-A",
        "form_spider/0.1",
    ]);

    assert_eq!(cli.url.as_deref(), Some("https://example.com/cari"));
    assert!(cli.verbose);
    assert_eq!(cli.model.as_deref(), Some("gemini-2.0-flash"));
    assert_eq!(cli.timeout, Some(30));
    assert_eq!(cli.agent.as_deref(), Some("form_spider/0.1"));
}
