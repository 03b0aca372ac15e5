use htmlentity::entity::{decode, ICodedDataTrait};
use scraper::{Html, Selector};

/// Reads the product title off a detail page.
pub fn extract_title(html_content: &str) -> Option<String> {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse("span.title").unwrap();

    document.select(&selector).next().map(|element| {
        let text = element.text().collect::<Vec<_>>().join("");

        // Titles occasionally come through double-encoded
        match decode(text.as_bytes()).to_string() {
            Ok(decoded) => decoded.trim().to_string(),
            Err(_) => text.trim().to_string(),
        }
    })
}
