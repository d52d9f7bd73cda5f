use form_spider::client::build_client;
use form_spider::form::{find_submit_button, get_form_selects};
use form_spider::table::parse_table;
use form_spider::utils::{fetch_page_html, submit_form};
use form_spider::{Configuration, FormPayload};
use mockito::Matcher;

const FORM_PAGE: &str = r#"<!doctype html>
<html>
  <body>
    <form method="post">
      <select name="wilayah">
        <option value="01">Aceh</option>
        <option value="02">Sumatera Utara</option>
      </select>
      <select name="tahun">
        <option value="2023">2023</option>
        <option value="2024">2024</option>
      </select>
      <input type="submit" name="tampilkan" value="Tampilkan">
    </form>
  </body>
</html>"#;

const RESULT_PAGE: &str = r#"<!doctype html>
<html>
  <body>
    <table class="hasil">
      <thead><tr><th>Kabupaten</th><th>Jumlah</th></tr></thead>
      <tbody>
        <tr><td>Medan</td><td>1.204</td></tr>
        <tr><td>Binjai</td><td>318</td></tr>
      </tbody>
    </table>
  </body>
</html>"#;

#[tokio::test]
async fn scrape_form_submit_and_parse_table() {
    let mut server = mockito::Server::new_async().await;

    let get = server
        .mock("GET", "/cari")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(FORM_PAGE)
        .expect(1)
        .create_async()
        .await;

    let post = server
        .mock("POST", "/cari")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("wilayah".into(), "02".into()),
            Matcher::UrlEncoded("tahun".into(), "2024".into()),
            Matcher::UrlEncoded("tampilkan".into(), "Tampilkan".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(RESULT_PAGE)
        .expect(1)
        .create_async()
        .await;

    let url = format!("{}/cari", server.url());
    let client = build_client(&Configuration::new()).unwrap();

    let html = fetch_page_html(&url, &client).await.unwrap();
    let selects = get_form_selects(&html).unwrap();

    assert_eq!(selects.len(), 2);

    let mut payload = FormPayload::new();
    // pick the last option of every select
    for select in &selects {
        let choice = select.options.last().unwrap();
        payload.insert(select.name.clone(), choice.value.clone());
    }
    if let Some((name, value)) = find_submit_button(&html) {
        payload.insert(name, value);
    }

    assert_eq!(
        payload.keys().collect::<Vec<_>>(),
        vec!["wilayah", "tahun", "tampilkan"]
    );

    let result = submit_form(&url, &payload, &client).await.unwrap();
    let rows = parse_table(&result).unwrap_or_default();

    assert_eq!(
        rows,
        vec![
            vec!["Kabupaten", "Jumlah"],
            vec!["Medan", "1.204"],
            vec!["Binjai", "318"],
        ]
    );

    get.assert_async().await;
    post.assert_async().await;
}

#[tokio::test]
async fn submit_without_table_is_not_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/cari")
        .with_status(200)
        .with_body("<p>Data tidak ditemukan</p>")
        .create_async()
        .await;

    let client = build_client(&Configuration::new()).unwrap();
    let result = submit_form(&format!("{}/cari", server.url()), &FormPayload::new(), &client)
        .await
        .unwrap();

    assert!(parse_table(&result).is_none());
}
