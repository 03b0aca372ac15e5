use regex::Regex;

/// Detects a capacity pattern inside a product title: 300g, 800ml, 70매,
/// 1개, 70매 x 10개. Returns the captured groups of the first pattern that
/// matches against the lower-cased title.
///
/// Pattern order is the tie-break: mass/volume, then simple count, then
/// compound count. A title matching both count forms returns the simple
/// match first.
pub fn extract_capacity(title: &str) -> Option<Vec<String>> {
    let patterns = [
        r"(\d+)\s?(g|ml)",
        r"(\d+)\s?(매|개|입|팩)",
        r"(\d+)\s?x\s?(\d+)\s?(매|개|입|팩)",
    ];

    let title = title.to_lowercase();

    for pattern in patterns {
        let regex = Regex::new(pattern).unwrap();
        if let Some(caps) = regex.captures(&title) {
            let groups = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().to_string())
                .collect();
            return Some(groups);
        }
    }

    None
}
