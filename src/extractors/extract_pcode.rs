use std::borrow::Cow;

use regex::Regex;
use urlencoding::decode;

/// Extracts the numeric product code from a detail link's query string.
pub fn extract_pcode(url: &str) -> Option<u64> {
    let decoded = decode(url).unwrap_or(Cow::Borrowed(url));
    let regex = Regex::new(r"pcode=(\d+)").unwrap();

    regex
        .captures(&decoded)
        .and_then(|caps| caps.get(1).and_then(|m| m.as_str().parse::<u64>().ok()))
}

#[cfg(test)]
mod tests {
    use super::extract_pcode;

    #[test]
    fn pcode_from_query_string() {
        let pcode = extract_pcode("https://prod.danawa.com/info/?pcode=1234567&cate=16249098");
        assert_eq!(pcode, Some(1234567));
    }

    #[test]
    fn pcode_from_percent_encoded_link() {
        let pcode = extract_pcode("/bridge/loadingBridge.php?url=info%2F%3Fpcode%3D7654321");
        assert_eq!(pcode, Some(7654321));
    }

    #[test]
    fn link_without_pcode() {
        assert_eq!(extract_pcode("https://prod.danawa.com/list/?cate=16249098"), None);
    }
}
