use anyhow::{Context, Result};
use common::{AssetRecord, ASSET_CLASSES};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, trace};

/// Builds the synthetic dataset: `count` records cycling through the asset
/// universe. Record `i` (zero-based) gets `id = i + 1`, the category at
/// `i % class_count` and that class's instrument at `i % instrument_count`.
pub fn build_records(count: usize) -> Vec<AssetRecord> {
    trace!("Building {} asset records", count);

    (0..count)
        .map(|i| {
            let class = &ASSET_CLASSES[i % ASSET_CLASSES.len()];
            AssetRecord {
                id: (i + 1) as u32,
                category: class.name.to_string(),
                asset_name: class.instruments[i % class.instruments.len()].to_string(),
            }
        })
        .collect()
}

/// Writes the dataset file the frontend fetches at runtime.
pub fn generate_assets(output: &Path, count: usize, pretty: bool) -> Result<()> {
    info!("Generating {} asset records", count);
    debug!("Output file: {}", output.display());

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let records = build_records(count);

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &records)
    } else {
        serde_json::to_writer(&mut writer, &records)
    }
    .with_context(|| format!("Failed to write {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Wrote {} records to {}", records.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_records_count_and_ids() {
        let records = build_records(10);

        assert_eq!(records.len(), 10);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id, (i + 1) as u32);
        }
    }

    #[test]
    fn test_build_records_cycles_through_classes() {
        let records = build_records(20);

        for (i, record) in records.iter().enumerate() {
            let class = &ASSET_CLASSES[i % ASSET_CLASSES.len()];
            assert_eq!(record.category, class.name);
            assert_eq!(
                record.asset_name,
                class.instruments[i % class.instruments.len()]
            );
        }

        // One full cycle later the category repeats, but the instrument index
        // keeps advancing independently.
        assert_eq!(records[0].category, records[7].category);
        assert_ne!(records[0].asset_name, records[7].asset_name);
    }

    #[test]
    fn test_build_records_is_deterministic() {
        assert_eq!(build_records(50), build_records(50));
    }

    #[test]
    fn test_build_records_empty() {
        assert!(build_records(0).is_empty());
    }
}
