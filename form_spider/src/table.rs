use crate::utils::log;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref TABLE_SELECTOR: Selector = Selector::parse("table").unwrap();
    static ref ROW_SELECTOR: Selector = Selector::parse("tr").unwrap();
    static ref CELL_SELECTOR: Selector = Selector::parse("th, td").unwrap();
}

/// The text of every cell of a table row.
pub type ResultRow = Vec<String>;

/// Cell text with every text node trimmed and joined without a separator.
fn cell_text(cell: ElementRef) -> String {
    cell.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Rows of the first table on the page. Header rows are kept like any other row
/// and rows without cells are dropped. `None` when the page has no table.
pub fn parse_table(html: &str) -> Option<Vec<ResultRow>> {
    let document = Html::parse_document(html);

    let table = match document.select(&TABLE_SELECTOR).next() {
        Some(table) => table,
        _ => {
            log("table", "no table found");
            return None;
        }
    };

    let rows: Vec<ResultRow> = table
        .select(&ROW_SELECTOR)
        .map(|row| row.select(&CELL_SELECTOR).map(cell_text).collect::<ResultRow>())
        .filter(|cells| !cells.is_empty())
        .collect();

    log("table rows", rows.len().to_string());

    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        let html = r#"<html><body>
            <table>
                <tr><td>a</td><td>b</td></tr>
                <tr><td>c</td><td>d</td></tr>
            </table>
        </body></html>"#;

        assert_eq!(
            parse_table(html),
            Some(vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string(), "d".to_string()]])
        );
    }

    #[test]
    fn test_parse_table_no_table() {
        assert_eq!(parse_table("<html><body><p>Tidak ada</p></body></html>"), None);
        assert!(parse_table("").unwrap_or_default().is_empty());
    }

    #[test]
    fn test_parse_table_headers_and_sections() {
        let html = r#"<table>
            <thead><tr><th> Nama </th><th>Kota</th></tr></thead>
            <tbody>
                <tr><td>SDN 01</td><td>Bandung</td></tr>
                <tr></tr>
                <tr><td> Sekolah <b>Ñusantara</b> </td><td>Bogor</td></tr>
            </tbody>
        </table>
        <table><tr><td>second table</td></tr></table>"#;

        let rows = parse_table(html).unwrap();

        assert_eq!(
            rows,
            vec![
                vec!["Nama".to_string(), "Kota".to_string()],
                vec!["SDN 01".to_string(), "Bandung".to_string()],
                vec!["SekolahÑusantara".to_string(), "Bogor".to_string()],
            ]
        );
    }

    #[test]
    fn test_parse_table_empty_table() {
        assert_eq!(parse_table("<table></table>"), Some(vec![]));
    }
}
