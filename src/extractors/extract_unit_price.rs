use regex::Regex;
use serde::Serialize;

/// Price normalized per a reference quantity, e.g. 1000원 per 100g.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitPrice {
    pub unit_price: i64,
    pub unit_value: i64,
    pub unit_type: String,
}

pub fn extract_unit_price(text: &str) -> Option<UnitPrice> {
    let text = text.replace(',', "");
    let regex = Regex::new(r"(\d+)\s?원/\s?(\d+)(g|ml|매|개)").unwrap();

    regex.captures(&text).and_then(|caps| {
        let unit_price = caps.get(1)?.as_str().parse::<i64>().ok()?;
        let unit_value = caps.get(2)?.as_str().parse::<i64>().ok()?;
        let unit_type = caps.get(3)?.as_str().to_string();

        Some(UnitPrice {
            unit_price,
            unit_value,
            unit_type,
        })
    })
}
