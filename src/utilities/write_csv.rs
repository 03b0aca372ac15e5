use anyhow::{Context, Result};
use csv_async::AsyncWriterBuilder;
use tokio::fs::File as AsyncFile;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::extract_data::PriceRecord;

const HEADER: [&str; 7] = [
    "product_title",
    "capacity",
    "option_spec",
    "price",
    "unit_price",
    "pcode",
    "detail_url",
];

/// Writes every collected record in one pass: UTF-8 with a byte-order mark,
/// comma-delimited, fixed seven-column header. Structured cells (capacity,
/// unit_price) are serialized as JSON; absent values become empty cells.
pub async fn write_csv(records: &[PriceRecord], output_path: &str) -> Result<()> {
    let mut file = AsyncFile::create(output_path)
        .await
        .with_context(|| format!("Failed to create output file {}", output_path))?;

    // Byte-order mark so spreadsheet tools pick the file up as UTF-8
    file.write_all(b"\xEF\xBB\xBF")
        .await
        .context("Failed to write byte-order mark")?;

    let writer = BufWriter::new(file);
    let mut csv_writer = AsyncWriterBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .create_writer(writer);

    csv_writer
        .write_record(&HEADER)
        .await
        .context("Failed to write CSV header")?;

    for record in records {
        let capacity = match &record.capacity {
            Some(groups) => serde_json::to_string(groups)?,
            None => String::new(),
        };
        let unit_price = match &record.unit_price {
            Some(unit_price) => serde_json::to_string(unit_price)?,
            None => String::new(),
        };
        let price = record.price.to_string();
        let pcode = record.pcode.map(|p| p.to_string()).unwrap_or_default();

        csv_writer
            .write_record(&[
                record.product_title.as_str(),
                capacity.as_str(),
                record.option_spec.as_str(),
                price.as_str(),
                unit_price.as_str(),
                pcode.as_str(),
                record.detail_url.as_str(),
            ])
            .await
            .with_context(|| format!("Failed to write CSV row for {}", record.detail_url))?;
    }

    csv_writer.flush().await.context("Failed to flush CSV output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_csv;
    use crate::extract_data::PriceRecord;
    use crate::extractors::extract_unit_price::UnitPrice;

    fn sample_records() -> Vec<PriceRecord> {
        vec![
            PriceRecord {
                product_title: "코멧 물티슈 캡형 300g".to_string(),
                capacity: Some(vec!["300".to_string(), "g".to_string()]),
                option_spec: "캡형 300g x 10팩".to_string(),
                price: 12900,
                unit_price: Some(UnitPrice {
                    unit_price: 1000,
                    unit_value: 100,
                    unit_type: "g".to_string(),
                }),
                pcode: Some(1234567),
                detail_url: "https://prod.danawa.com/info/?pcode=1234567".to_string(),
            },
            PriceRecord {
                product_title: "마스크 1개".to_string(),
                capacity: Some(vec!["1".to_string(), "개".to_string()]),
                option_spec: "단품".to_string(),
                price: 900,
                unit_price: None,
                pcode: None,
                detail_url: "https://prod.danawa.com/info/?pcode=999".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn output_starts_with_bom_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let path = path.to_str().unwrap();

        write_csv(&sample_records(), path).await.unwrap();

        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");

        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert!(text.starts_with(
            "product_title,capacity,option_spec,price,unit_price,pcode,detail_url"
        ));
    }

    #[tokio::test]
    async fn rows_round_trip_through_a_csv_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let path = path.to_str().unwrap();

        write_csv(&sample_records(), path).await.unwrap();

        let bytes = std::fs::read(path).unwrap();
        let mut reader = csv::Reader::from_reader(&bytes[3..]);
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();

        assert_eq!(rows.len(), 2);

        assert_eq!(&rows[0][0], "코멧 물티슈 캡형 300g");
        assert_eq!(&rows[0][1], r#"["300","g"]"#);
        assert_eq!(&rows[0][3], "12900");
        assert_eq!(
            &rows[0][4],
            r#"{"unit_price":1000,"unit_value":100,"unit_type":"g"}"#
        );
        assert_eq!(&rows[0][5], "1234567");

        // Absent structured fields become empty cells
        assert_eq!(&rows[1][4], "");
        assert_eq!(&rows[1][5], "");
    }
}
