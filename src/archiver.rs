use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};

use crate::models::ProductRecord;

/// Write the scraped records as a pretty-printed JSON array, overwriting
/// any existing file at that path.
pub fn save_to_file(records: &[ProductRecord], filename: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    let mut file =
        File::create(filename).with_context(|| format!("failed to create {filename}"))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("failed to write to {filename}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn record(url: &str, title: &str) -> ProductRecord {
        ProductRecord {
            url: url.to_string(),
            title: title.to_string(),
            price: "10.00 €".to_string(),
            description: None,
            seller: None,
            condition: None,
            img_href: None,
        }
    }

    #[test]
    fn no_records_write_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        save_to_file(&[], path.to_str().unwrap()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn records_round_trip_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        let records = vec![
            record("https://www.osta.ee/item/1", "First"),
            record("https://www.osta.ee/item/2", "Second"),
        ];

        save_to_file(&records, path.to_str().unwrap()).unwrap();

        let read_back: Vec<ProductRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read_back, records);
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        fs::write(&path, "stale contents").unwrap();

        save_to_file(&[record("https://www.osta.ee/item/1", "Only")], path.to_str().unwrap())
            .unwrap();

        let read_back: Vec<ProductRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read_back.len(), 1);
    }
}
