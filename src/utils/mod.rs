pub mod fasta_utils;
