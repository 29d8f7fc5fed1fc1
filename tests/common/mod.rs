#![allow(dead_code)]

use std::path::Path;

use catalogue_scraper::config::AppConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn book(title: &str, price: &str, rating_class: &str) -> String {
    format!(
        r#"<li><article class="product_pod">
            <p class="star-rating {rating_class}"></p>
            <h3><a href="book/index.html" title="{title}">{title}</a></h3>
            <div class="product_price"><p class="price_color">{price}</p></div>
        </article></li>"#
    )
}

pub fn catalogue_page(books: &[String], next: Option<&str>) -> String {
    let pager = next
        .map(|href| format!(r#"<ul class="pager"><li class="next"><a href="{href}">next</a></li></ul>"#))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html><html><body><ol class=\"row\">{}</ol>{}</body></html>",
        books.concat(),
        pager
    )
}

pub fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

pub async fn mount_page(server: &MockServer, page: &str, response: ResponseTemplate, hits: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/catalogue/{page}")))
        .respond_with(response)
        .expect(hits)
        .mount(server)
        .await;
}

pub fn config_for(server: &MockServer, output: &Path) -> AppConfig {
    let mut config = AppConfig::new();
    config.scraper.base_url = format!("{}/catalogue/", server.uri());
    config.scraper.rate_limit_ms = 0;
    config.output.file = output.to_path_buf();
    config
}

/// Page 1: Foo (Three), Bar (unrecognized) and a next link; page 2: Baz (Five)
pub async fn mount_two_page_catalogue(server: &MockServer) {
    let first = catalogue_page(
        &[
            book("Foo", "£10.00", "Three"),
            book("Bar", "£5.50", "One-unrecognized"),
        ],
        Some("page-2.html"),
    );
    let second = catalogue_page(&[book("Baz", "£3.00", "Five")], None);

    mount_page(server, "page-1.html", html(first), 1).await;
    mount_page(server, "page-2.html", html(second), 1).await;
}
