use crate::error::{Result, ScrapeError};
use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref FORM_SELECTOR: Selector = Selector::parse("form").unwrap();
    static ref SELECT_SELECTOR: Selector = Selector::parse("select").unwrap();
    static ref OPTION_SELECTOR: Selector = Selector::parse("option").unwrap();
    static ref SUBMIT_SELECTOR: Selector = Selector::parse(r#"input[type="submit"]"#).unwrap();
}

/// Value posted for a submit button without a `value` attribute.
pub const DEFAULT_SUBMIT_VALUE: &str = "Submit";

/// Field name to chosen value, in the order the fields were found.
/// Inserting an existing name replaces the value in place.
pub type FormPayload = IndexMap<String, String>;

/// A single `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SelectOption {
    /// The visible text, trimmed.
    pub label: String,
    /// The `value` attribute, trimmed. Empty when missing.
    pub value: String,
}

/// A named `<select>` control and its options in document order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SelectField {
    /// The `name` attribute used as the payload key.
    pub name: String,
    /// The options to choose from.
    pub options: Vec<SelectOption>,
}

impl SelectOption {
    fn from_element(option: ElementRef) -> Self {
        Self {
            label: option.text().collect::<String>().trim().to_string(),
            value: option
                .value()
                .attr("value")
                .unwrap_or_default()
                .trim()
                .to_string(),
        }
    }
}

/// Get the named select controls of the first form on the page.
/// Controls without a name are skipped. An empty list means the form has no usable select.
pub fn get_form_selects(html: &str) -> Result<Vec<SelectField>> {
    let document = Html::parse_document(html);

    let form = document
        .select(&FORM_SELECTOR)
        .next()
        .ok_or(ScrapeError::FormNotFound)?;

    let mut selects: Vec<ElementRef> = form.select(&SELECT_SELECTOR).collect();

    if selects.is_empty() {
        selects = table_form_selects(form);
    }

    let selects = selects
        .into_iter()
        .filter_map(|select| {
            let name = select.value().attr("name").filter(|n| !n.is_empty())?;

            Some(SelectField {
                name: name.to_string(),
                options: select
                    .select(&OPTION_SELECTOR)
                    .map(SelectOption::from_element)
                    .collect(),
            })
        })
        .collect();

    Ok(selects)
}

/// Selects of a form opened directly inside a table.
///
/// The HTML5 tree builder closes such a form right away and leaves its controls
/// in the table after it, so they are taken in document order up to the next form.
fn table_form_selects(form: ElementRef) -> Vec<ElementRef> {
    let in_table = form
        .parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| {
            matches!(
                parent.value().name(),
                "table" | "tbody" | "thead" | "tfoot" | "tr"
            )
        });

    if !in_table {
        return Vec::new();
    }

    let table = match form
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "table")
    {
        Some(table) => table,
        _ => return Vec::new(),
    };

    table
        .descendants()
        .skip_while(|node| node.id() != form.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .take_while(|element| element.value().name() != "form")
        .filter(|element| element.value().name() == "select")
        .collect()
}

/// Name and value of the first submit input on the page.
/// Only the first submit input is checked, `None` when it has no name.
pub fn find_submit_button(html: &str) -> Option<(String, String)> {
    let document = Html::parse_document(html);
    let button = document.select(&SUBMIT_SELECTOR).next()?;
    let name = button.value().attr("name").filter(|n| !n.is_empty())?;
    let value = button.value().attr("value").unwrap_or(DEFAULT_SUBMIT_VALUE);

    Some((name.to_string(), value.to_string()))
}
