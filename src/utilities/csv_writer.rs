use anyhow::{Context, Result};
use csv_async::AsyncWriterBuilder;
use tokio::fs::File as AsyncFile;
use tokio::io::BufWriter;

use crate::wishlist_entry::WishlistEntry;

/// Writes the entries as a `|`-delimited CSV file with a header row.
pub async fn write_entries(path: &str, entries: &[WishlistEntry]) -> Result<()> {
    let file_out = AsyncFile::create(path)
        .await
        .with_context(|| format!("Failed to create output file {}", path))?;
    let writer = BufWriter::new(file_out);
    let mut csv_writer = AsyncWriterBuilder::new()
        .delimiter(b'|')
        .quote(b'"')
        .double_quote(true)
        .create_writer(writer);

    csv_writer.write_record(WishlistEntry::headers()).await?;
    for entry in entries {
        csv_writer.write_record(entry.to_record()).await?;
    }
    csv_writer.flush().await.context("Failed to flush output file")?;

    Ok(())
}
