use scraper::{Html, Selector};

/// Collects product detail links off a category listing page, keeping only
/// absolute http(s) URLs.
pub fn extract_product_links(html_content: &str) -> Vec<String> {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse("li.prod_item .prod_main_info a.thumb_link").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| href.starts_with("http"))
        .map(|href| href.to_string())
        .collect()
}
