use anyhow::{Context, Result};
use csv_async::{AsyncReader, AsyncReaderBuilder};
use futures::StreamExt;
use tokio::fs::File as AsyncFile;
use tokio::io::BufReader;

/// Opens a CSV file of product URLs. The first row is a header row.
pub async fn setup_csv_reader(source_path: &str) -> Result<AsyncReader<BufReader<AsyncFile>>> {
    let file = AsyncFile::open(source_path)
        .await
        .with_context(|| format!("Failed to open source file {}", source_path))?;
    let reader = BufReader::new(file);
    let csv_reader = AsyncReaderBuilder::new().has_headers(true).create_reader(reader);

    Ok(csv_reader)
}

/// Reads the product URLs listed in the first column of a CSV file.
/// Blank cells are skipped; unreadable rows are logged and skipped.
pub async fn read_urls(source_path: &str) -> Result<Vec<String>> {
    let mut csv_reader = setup_csv_reader(source_path).await?;
    let mut records = csv_reader.records();
    let mut urls = Vec::new();

    while let Some(record) = records.next().await {
        match record {
            Ok(record) => {
                let url = record.get(0).unwrap_or_default().trim();
                if !url.is_empty() {
                    urls.push(url.to_string());
                }
            }
            Err(e) => tracing::warn!("Failed to read CSV record: {}", e),
        }
    }

    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::read_urls;
    use std::io::Write;

    #[tokio::test]
    async fn reads_first_column_and_skips_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url,recipient").unwrap();
        writeln!(file, "https://www.target.com/p/-/A-1,Mom").unwrap();
        writeln!(file, ",Dad").unwrap();
        writeln!(file, " https://www.amazon.com/dp/B0 ,Sam").unwrap();

        let urls = read_urls(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(
            urls,
            vec![
                "https://www.target.com/p/-/A-1".to_string(),
                "https://www.amazon.com/dp/B0".to_string()
            ]
        );
    }
}
