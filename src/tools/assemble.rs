use crate::assembly::{Assembler, AssemblyOptions};
use crate::utils::fasta_utils::{load_fasta, load_fragment_lines, write_fasta_sequence};
use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use log::LevelFilter;
use std::path::{Path, PathBuf};

const VERSION: &str = "0.1.0";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentFormat {
    /// FASTA records, one fragment per record
    Fasta,
    /// Plain text, one fragment per line
    Lines,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub input_fragments: usize,
    pub merges: usize,
    pub consensus: Vec<u8>,
    pub remaining_fragments: usize,
    pub unmatched_fragments: usize,
    pub min_overlap: usize,
}

impl AssemblyReport {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "input_fragments": self.input_fragments,
            "merges": self.merges,
            "consensus_length": self.consensus.len(),
            "remaining_fragments": self.remaining_fragments,
            "unmatched_fragments": self.unmatched_fragments,
            "min_overlap": self.min_overlap,
        })
    }
}

fn load_fragments(input_file: &Path, format: FragmentFormat) -> Result<Vec<Vec<u8>>> {
    match format {
        FragmentFormat::Fasta => Ok(load_fasta(input_file)?
            .into_iter()
            .map(|(_, seq)| seq)
            .collect()),
        FragmentFormat::Lines => load_fragment_lines(input_file),
    }
}

/// Reads the fragments, assembles them greedily and reports what happened. Does not touch the
/// logger, so it can be driven directly.
pub fn assemble_file(
    input_file: &Path,
    input_format: FragmentFormat,
    options: AssemblyOptions,
) -> Result<AssemblyReport> {
    log::info!("Reading fragments from {:?}", input_file);
    let fragments = load_fragments(input_file, input_format)?;
    let input_fragments = fragments.len();
    log::info!("Successfully read {} fragments into memory.", input_fragments);

    let mut assembler = Assembler::new(fragments, options)
        .with_context(|| format!("Could not start an assembly from {:?}", input_file))?;

    log::info!(
        "Assembling with a minimum overlap of {}.",
        assembler.min_overlap()
    );
    let merges = assembler.assemble()?;
    log::info!(
        "Merged {} fragments, consensus is {} long.",
        merges,
        assembler.consensus().len()
    );

    let remaining_fragments = assembler.remaining_fragments().len();
    let unmatched_fragments = assembler.reconcile_remaining().len();

    Ok(AssemblyReport {
        input_fragments,
        merges,
        consensus: assembler.into_consensus(),
        remaining_fragments,
        unmatched_fragments,
        min_overlap: options.min_overlap,
    })
}

pub fn run(
    input_file: &PathBuf,
    input_format: FragmentFormat,
    output_file: &PathBuf,
    consensus_name: &String,
    report_file: Option<&PathBuf>,
    options: AssemblyOptions,
) -> Result<()> {
    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .env()
        .init()?;

    log::info!(
        "{}",
        format!("This is {} version {}", "assemble".italic(), VERSION)
            .bold()
            .bright_green()
    );

    let report = assemble_file(input_file, input_format, options)?;

    log::info!("Writing consensus to {:?}", output_file);
    write_fasta_sequence(output_file, consensus_name, &report.consensus)?;

    if let Some(report_file) = report_file {
        log::info!("Writing assembly report to {:?}", report_file);
        std::fs::write(report_file, serde_json::to_string_pretty(&report.to_json())?)
            .with_context(|| format!("Trying to write to file {:?}", report_file))?;
    }

    log::info!("Done. Exiting.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::AssemblyError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn options(min_overlap: usize) -> AssemblyOptions {
        AssemblyOptions {
            min_overlap,
            verbose: false,
        }
    }

    #[test]
    fn test_assemble_fasta_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.fa");
        fs::write(&path, ">a\nCDEFG\n>b\nABC\n>c\nGHIJK\n").unwrap();

        let report = assemble_file(&path, FragmentFormat::Fasta, options(1)).unwrap();

        assert_eq!(
            report,
            AssemblyReport {
                input_fragments: 3,
                merges: 2,
                consensus: b"ABCDEFGHIJK".to_vec(),
                remaining_fragments: 0,
                unmatched_fragments: 0,
                min_overlap: 1,
            }
        );
    }

    #[test]
    fn test_assemble_lines_with_leftovers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.txt");
        fs::write(&path, "ACGTTGCA\nTGCAAGGC\nGTTG\nCCCC\n").unwrap();

        let report = assemble_file(&path, FragmentFormat::Lines, options(4)).unwrap();

        assert_eq!(report.consensus, b"ACGTTGCAAGGC".to_vec());
        assert_eq!(report.merges, 1);
        assert_eq!(report.remaining_fragments, 2);
        // "GTTG" is inside the consensus, "CCCC" is not.
        assert_eq!(report.unmatched_fragments, 1);

        let json = report.to_json();
        assert_eq!(json["consensus_length"], 12);
        assert_eq!(json["unmatched_fragments"], 1);
    }

    #[test]
    fn test_assemble_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.txt");
        fs::write(&path, "\n\n").unwrap();

        let err = assemble_file(&path, FragmentFormat::Lines, options(4)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AssemblyError>(),
            Some(&AssemblyError::EmptyInput)
        );
    }
}
