use anyhow::Result;
use clap::{Parser, Subcommand};
use shotgun_assembly::assembly::{AssemblyOptions, DEFAULT_MIN_OVERLAP};
use shotgun_assembly::tools;
use shotgun_assembly::tools::assemble::FragmentFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shotgun-utils")]
#[command(about = "CLI utilities for reconstructing sequences from shotgun fragments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Greedily assemble overlapping fragments into a single consensus sequence
    Assemble {
        /// Path to the file containing the fragments
        #[arg(short = 'i', long)]
        input_file: PathBuf,

        /// How the fragments are stored in the input file
        #[arg(short = 'f', long, value_enum, default_value_t = FragmentFormat::Fasta)]
        input_format: FragmentFormat,

        /// Where to write the consensus sequence as a FASTA file
        #[arg(short = 'o', long)]
        output_file: PathBuf,

        /// What to name the consensus sequence in the FASTA file
        #[arg(short = 'n', long, default_value_t = String::from("consensus"))]
        consensus_name: String,

        /// The smallest overlap, in characters, that is allowed to merge a fragment. Assembly
        /// stops once no remaining fragment overlaps the consensus by at least this much.
        #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_OVERLAP)]
        min_overlap: usize,

        /// Optionally write a JSON summary of the assembly to this file
        #[arg(short = 'r', long)]
        report_file: Option<PathBuf>,

        /// Log every merge step
        #[arg(short = 'v', long, default_value_t = false)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Assemble {
            input_file,
            input_format,
            output_file,
            consensus_name,
            min_overlap,
            report_file,
            verbose,
        } => {
            tools::assemble::run(
                input_file,
                *input_format,
                output_file,
                consensus_name,
                report_file.as_ref(),
                AssemblyOptions {
                    min_overlap: *min_overlap,
                    verbose: *verbose,
                },
            )?;
        }
    }
    Ok(())
}
