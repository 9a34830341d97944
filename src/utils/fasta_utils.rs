use anyhow::{Context, Result};
use bio::io::fasta;
use std::path::Path;

/// FASTA records in file order.
pub type FastaRecords = Vec<(String, Vec<u8>)>;

pub fn load_fasta(file_path: &Path) -> Result<FastaRecords> {
    let reader = fasta::Reader::from_file(file_path)
        .with_context(|| format!("Could not open FASTA file {:?}", file_path))?;
    let mut records = FastaRecords::new();

    for result in reader.records() {
        let record =
            result.with_context(|| format!("Failed to parse a record in {:?}", file_path))?;
        records.push((record.id().to_string(), record.seq().to_vec()));
    }

    Ok(records)
}

/// Reads one fragment per line. Blank lines are skipped and surrounding whitespace is trimmed.
pub fn load_fragment_lines(file_path: &Path) -> Result<Vec<Vec<u8>>> {
    let contents = std::fs::read_to_string(file_path)
        .with_context(|| format!("Could not read fragment file {:?}", file_path))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.as_bytes().to_vec())
        .collect())
}

pub fn write_fasta_sequence(output_file: &Path, seq_id: &str, seq: &[u8]) -> Result<()> {
    let mut writer = fasta::Writer::to_file(output_file)
        .with_context(|| format!("Trying to write to file {:?}", output_file))?;

    writer.write(seq_id, None, seq)?;
    writer.flush()?;

    Ok(())
}
