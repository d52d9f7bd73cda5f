use crate::client::Client;
use crate::error::Result;
use crate::form::FormPayload;
use log::{info, log_enabled, Level};

/// Perform a network request to the form page extracting all content as text.
/// Non-success status codes are returned as errors.
pub async fn fetch_page_html(url: &str, client: &Client) -> Result<String> {
    log("fetch", url);

    let res = client.get(url).send().await?.error_for_status()?;

    Ok(res.text().await?)
}

/// Post the form fields url encoded to the target and return the response body.
/// Non-success status codes are returned as errors.
pub async fn submit_form(url: &str, payload: &FormPayload, client: &Client) -> Result<String> {
    log("submit", url);

    let res = client
        .post(url)
        .form(payload)
        .send()
        .await?
        .error_for_status()?;

    Ok(res.text().await?)
}

/// log to console if configuration verbose.
pub fn log(message: &'static str, data: impl AsRef<str>) {
    if log_enabled!(Level::Info) {
        info!("{message} - {}", data.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_fetch_page_html() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/form")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<form></form>")
            .create_async()
            .await;

        let html = fetch_page_html(&format!("{}/form", server.url()), &Client::new())
            .await
            .unwrap();

        assert_eq!(html, "<form></form>");
    }

    #[tokio::test]
    async fn test_fetch_page_html_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/form")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let result = fetch_page_html(&format!("{}/form", server.url()), &Client::new()).await;

        match result {
            Err(ScrapeError::Http(e)) => assert!(e.to_string().contains("404")),
            other => panic!("expected http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_html_connection_refused() {
        // nothing listens on the discard port
        let client = crate::client::build_client(&crate::Configuration::new()).unwrap();
        let result = fetch_page_html("http://127.0.0.1:9/", &client).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_submit_form_url_encoded() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/form")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("provinsi".into(), "31".into()),
                Matcher::UrlEncoded("kota".into(), "Jakarta Selatan".into()),
            ]))
            .with_status(200)
            .with_body("<table></table>")
            .create_async()
            .await;

        let mut payload = FormPayload::new();
        payload.insert("provinsi".into(), "31".into());
        payload.insert("kota".into(), "Jakarta Selatan".into());

        let html = submit_form(&format!("{}/form", server.url()), &payload, &Client::new())
            .await
            .unwrap();

        assert_eq!(html, "<table></table>");
    }

    #[tokio::test]
    async fn test_submit_form_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/form")
            .with_status(500)
            .create_async()
            .await;

        let result = submit_form(
            &format!("{}/form", server.url()),
            &FormPayload::new(),
            &Client::new(),
        )
        .await;

        assert!(result.unwrap_err().to_string().contains("500"));
    }
}
