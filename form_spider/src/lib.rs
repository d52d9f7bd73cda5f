#![warn(missing_docs)]

//! Form scraping library that fetches a page, reads the dropdowns of
//! its first form, submits the chosen values and extracts the rows of
//! the result table.
//!
//! The extracted rows can be handed to a generative model as context
//! for free form questions.
//!
//! # How to use form_spider
//!
//! - [`fetch_page_html`] gets the page holding the form.
//! - [`get_form_selects`] lists the `<select>` controls of the first form.
//! - [`submit_form`] posts the chosen values back to the page.
//! - [`parse_table`] reads the first table of the response.
//! - [`ask`] sends the rows and a prompt to an [`LLMProvider`].
//!
//! [`fetch_page_html`]: utils/fn.fetch_page_html.html
//! [`get_form_selects`]: form/fn.get_form_selects.html
//! [`submit_form`]: utils/fn.submit_form.html
//! [`parse_table`]: table/fn.parse_table.html
//! [`ask`]: llm/fn.ask.html
//! [`LLMProvider`]: llm/trait.LLMProvider.html

extern crate log;
extern crate reqwest;
extern crate scraper;
pub extern crate indexmap;
#[macro_use]
extern crate lazy_static;

/// The HTTP client used for every request.
pub mod client;
/// Configuration for the client and the AI bridge.
pub mod configuration;
/// Error types.
pub mod error;
/// Form extraction.
pub mod form;
/// Generative model bridge.
pub mod llm;
/// Result table extraction.
pub mod table;
/// Application utils.
pub mod utils;

pub use client::Client;
pub use configuration::Configuration;
pub use error::{Result, ScrapeError};
pub use form::{FormPayload, SelectField, SelectOption};
pub use table::ResultRow;
