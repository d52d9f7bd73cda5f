use crate::prompt::{ask_line, prompt_user_select};
use form_spider::form::{find_submit_button, get_form_selects};
use form_spider::llm::{ask, LLMProvider};
use form_spider::table::parse_table;
use form_spider::utils::{fetch_page_html, log, submit_form};
use form_spider::{Client, FormPayload, Result, ResultRow, ScrapeError};
use std::io::{BufRead, Write};

const URL_PROMPT: &str = "Masukkan URL form: ";
const COMMAND_PROMPT: &str =
    "\nKetik 'commandAI' untuk masuk ke mode AI, atau 'end' untuk keluar: ";
const AI_PROMPT: &str = "AI Prompt > ";
const FAREWELL: &str = "Program selesai.";

/// The steps of a run.
#[derive(Debug, PartialEq)]
pub enum State {
    /// Load the form, fill it and submit it.
    DataForm,
    /// Show the rows of the result table.
    Results(Vec<ResultRow>),
    /// Wait for `commandAI` or `end`.
    AiOrEnd(Vec<ResultRow>),
}

/// How the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Ended by the user or with nothing to show.
    Success,
    /// The page could not be loaded, submitted or has no usable form.
    Failure,
}

impl Exit {
    /// The process exit code.
    pub fn code(self) -> i32 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
        }
    }
}

enum Transition {
    To(State),
    Exit(Exit),
}

/// One interactive run over a reader and writers.
pub struct Session<'a, R, W, E, P: ?Sized> {
    input: R,
    out: W,
    err: E,
    client: &'a Client,
    llm_client: &'a Client,
    provider: &'a P,
    url: Option<String>,
}

impl<'a, R, W, E, P> Session<'a, R, W, E, P>
where
    R: BufRead,
    W: Write,
    E: Write,
    P: LLMProvider + ?Sized,
{
    /// A new session. `client` loads and submits the form, `llm_client` talks to the model.
    pub fn new(
        input: R,
        out: W,
        err: E,
        client: &'a Client,
        llm_client: &'a Client,
        provider: &'a P,
    ) -> Self {
        Self {
            input,
            out,
            err,
            client,
            llm_client,
            provider,
            url: None,
        }
    }

    /// Use this url instead of asking for it.
    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    /// Run every state until the session ends.
    pub async fn run(&mut self) -> Result<Exit> {
        let mut state = State::DataForm;

        loop {
            let transition = match state {
                State::DataForm => self.data_form().await?,
                State::Results(rows) => self.results(rows)?,
                State::AiOrEnd(rows) => Transition::Exit(self.ai_or_end(&rows).await?),
            };

            state = match transition {
                Transition::To(next) => next,
                Transition::Exit(exit) => {
                    self.out.flush()?;
                    return Ok(exit);
                }
            };
        }
    }

    fn fail(&mut self, message: impl std::fmt::Display) -> Result<Transition> {
        writeln!(self.err, "{}", message)?;
        Ok(Transition::Exit(Exit::Failure))
    }

    async fn data_form(&mut self) -> Result<Transition> {
        let url = match self.url.take() {
            Some(url) => url,
            _ => ask_line(&mut self.input, &mut self.out, URL_PROMPT)?
                .ok_or(ScrapeError::InputClosed)?,
        };

        let html = match fetch_page_html(&url, self.client).await {
            Ok(html) => html,
            Err(e) => return self.fail(format!("Error request halaman form: {}", e)),
        };

        let selects = match get_form_selects(&html) {
            Ok(selects) => selects,
            Err(ScrapeError::FormNotFound) => {
                return self.fail("Form tidak ditemukan di halaman tersebut.")
            }
            Err(e) => return Err(e),
        };

        if selects.is_empty() {
            return self.fail("Tidak ditemukan elemen <select> dalam form.");
        }

        let mut payload = FormPayload::new();

        for select in &selects {
            let value = prompt_user_select(&mut self.input, &mut self.out, select)?;
            payload.insert(select.name.clone(), value);
        }

        if let Some((name, value)) = find_submit_button(&html) {
            payload.insert(name, value);
        }

        writeln!(self.out, "\nMengirim data form:")?;
        for (name, value) in &payload {
            writeln!(self.out, "  {}: {}", name, value)?;
        }

        let result_html = match submit_form(&url, &payload, self.client).await {
            Ok(html) => html,
            Err(e) => return self.fail(format!("Error saat submit form: {}", e)),
        };

        let rows = match parse_table(&result_html) {
            Some(rows) => rows,
            _ => {
                writeln!(
                    self.out,
                    "Tabel hasil tidak ditemukan atau pencarian tidak mengembalikan hasil."
                )?;
                Vec::new()
            }
        };

        Ok(Transition::To(State::Results(rows)))
    }

    fn results(&mut self, rows: Vec<ResultRow>) -> Result<Transition> {
        if rows.is_empty() {
            writeln!(self.out, "Tidak ada data hasil pencarian yang ditemukan.")?;
            return Ok(Transition::Exit(Exit::Success));
        }

        writeln!(self.out, "\nHasil pencarian:")?;
        writeln!(self.out, "{}", serde_json::to_string_pretty(&rows)?)?;

        Ok(Transition::To(State::AiOrEnd(rows)))
    }

    async fn ai_or_end(&mut self, rows: &[ResultRow]) -> Result<Exit> {
        loop {
            let command = ask_line(&mut self.input, &mut self.out, COMMAND_PROMPT)?
                .map(|c| c.to_lowercase())
                .unwrap_or_else(|| "end".into());

            match command.as_str() {
                "commandai" => return self.ai_mode(rows).await,
                "end" => {
                    writeln!(self.out, "{}", FAREWELL)?;
                    return Ok(Exit::Success);
                }
                _ => writeln!(
                    self.out,
                    "Perintah tidak dikenal. Ketik 'commandAI' atau 'end'."
                )?,
            }
        }
    }

    /// Ask the model until `end`, which ends the whole session.
    async fn ai_mode(&mut self, rows: &[ResultRow]) -> Result<Exit> {
        log("ai mode", self.provider.provider_name());
        writeln!(self.out, "\nMasuk ke mode AI. Ketik 'end' untuk selesai.")?;

        loop {
            let prompt = match ask_line(&mut self.input, &mut self.out, AI_PROMPT)? {
                Some(prompt) if prompt.to_lowercase() != "end" => prompt,
                _ => {
                    writeln!(self.out, "{}", FAREWELL)?;
                    return Ok(Exit::Success);
                }
            };

            let reply = ask(self.provider, self.llm_client, &prompt, rows).await;

            writeln!(self.out, "AI Response:\n{}\n", reply)?;
        }
    }
}
