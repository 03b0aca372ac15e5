use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};

use crate::extractors::{extract_capacity, extract_pcode, extract_title, extract_unit_price};
use crate::extractors::extract_unit_price::UnitPrice;

/// One product option as it will appear in the output file.
#[derive(Debug)]
pub struct PriceRecord {
    pub product_title: String,
    pub capacity: Option<Vec<String>>,
    pub option_spec: String,
    pub price: i64,
    pub unit_price: Option<UnitPrice>,
    pub pcode: Option<u64>,
    pub detail_url: String,
}

/// Parses a rendered detail page into one record per option row. A page
/// without option rows yields an empty list; a row missing a required field
/// is an error for the whole page.
pub fn extract_data(html_content: &str, detail_url: &str) -> Result<Vec<PriceRecord>> {
    let document = Html::parse_document(html_content);
    let row_selector = Selector::parse("ul.list__variant-selector > li").unwrap();

    let title = extract_title::extract_title(html_content)
        .with_context(|| format!("No product title on {}", detail_url))?;
    let capacity = extract_capacity::extract_capacity(&title);

    let mut records = Vec::new();

    for row in document.select(&row_selector) {
        let price_raw = select_text(&row, ".text__num")
            .with_context(|| format!("Option row without price on {}", detail_url))?;
        let price = price_raw
            .replace(',', "")
            .parse::<i64>()
            .with_context(|| format!("Unparseable price '{}' on {}", price_raw, detail_url))?;

        let unit_price = select_text(&row, ".text__unit-price")
            .filter(|text| !text.is_empty())
            .and_then(|text| extract_unit_price::extract_unit_price(&text));

        let option_spec = select_text(&row, ".text__spec")
            .with_context(|| format!("Option row without spec on {}", detail_url))?;

        let pcode = select_href(&row, "a.link__full")
            .and_then(|href| extract_pcode::extract_pcode(&href));

        records.push(PriceRecord {
            product_title: title.clone(),
            capacity: capacity.clone(),
            option_spec,
            price,
            unit_price,
            pcode,
            detail_url: detail_url.to_string(),
        });
    }

    Ok(records)
}

fn select_text(row: &ElementRef, css: &str) -> Option<String> {
    let selector = Selector::parse(css).unwrap();

    row.select(&selector)
        .next()
        .map(|element| element.text().collect::<Vec<_>>().join("").trim().to_string())
}

fn select_href(row: &ElementRef, css: &str) -> Option<String> {
    let selector = Selector::parse(css).unwrap();

    row.select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.to_string())
}

#[cfg(test)]
mod tests {
    use super::extract_data;

    const DETAIL_URL: &str = "https://prod.danawa.com/info/?pcode=1234567";

    fn detail_page(rows: &str) -> String {
        format!(
            r#"<html><body>
                 <span class="title">코멧 물티슈 캡형 300g</span>
                 <ul class="list__variant-selector">{}</ul>
               </body></html>"#,
            rows
        )
    }

    #[test]
    fn one_record_per_option_row() {
        let html = detail_page(
            r#"<li>
                 <span class="text__num">12,900</span>
                 <span class="text__unit-price">1,000원/100g</span>
                 <span class="text__spec">캡형 300g x 10팩</span>
                 <a class="link__full" href="https://prod.danawa.com/info/?pcode=1234567"></a>
               </li>
               <li>
                 <span class="text__num">6,900</span>
                 <span class="text__unit-price"></span>
                 <span class="text__spec">캡형 300g x 5팩</span>
                 <a class="link__full" href="/info/no-code"></a>
               </li>"#,
        );

        let records = extract_data(&html, DETAIL_URL).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.product_title, "코멧 물티슈 캡형 300g");
        assert_eq!(first.capacity, Some(vec!["300".to_string(), "g".to_string()]));
        assert_eq!(first.option_spec, "캡형 300g x 10팩");
        assert_eq!(first.price, 12900);
        assert_eq!(first.unit_price.as_ref().unwrap().unit_price, 1000);
        assert_eq!(first.pcode, Some(1234567));
        assert_eq!(first.detail_url, DETAIL_URL);

        let second = &records[1];
        assert_eq!(second.price, 6900);
        assert_eq!(second.unit_price, None);
        assert_eq!(second.pcode, None);
    }

    #[test]
    fn page_without_option_rows_yields_no_records() {
        let html = detail_page("");
        let records = extract_data(&html, DETAIL_URL).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn row_without_price_is_an_error() {
        let html = detail_page(
            r#"<li><span class="text__spec">캡형</span></li>"#,
        );
        assert!(extract_data(&html, DETAIL_URL).is_err());
    }

    #[test]
    fn page_without_title_is_an_error() {
        let html = r#"<html><body><ul class="list__variant-selector"></ul></body></html>"#;
        assert!(extract_data(html, DETAIL_URL).is_err());
    }
}
