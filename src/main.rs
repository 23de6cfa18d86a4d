//! GffTally CLI entry point
//!
//! Streams or loads GFF feature tables and reports coverage statistics.

use clap::{Parser, Subcommand};
use gff_tally::core::{FeatureReader, FeatureRecord, FeatureSet, LoadFilter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gff-tally")]
#[command(about = "GFF feature-table statistics and filtering")]
#[command(version)]
#[command(author = "GffTally Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize record counts and base coverage
    Stats {
        /// Input GFF file
        input: PathBuf,
        /// Keep only these sequence ids (repeatable)
        #[arg(long = "seqid", value_name = "SEQID")]
        seqids: Vec<String>,
        /// Keep only these feature types (repeatable)
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<String>,
    },
    /// Filter records and write them back out
    Filter {
        /// Input GFF file
        input: PathBuf,
        /// Output file (stdout if not specified)
        output: Option<PathBuf>,
        /// Keep only these sequence ids (repeatable)
        #[arg(long = "seqid", value_name = "SEQID")]
        seqids: Vec<String>,
        /// Keep only these feature types (repeatable)
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<String>,
        /// Minimum interval length
        #[arg(long = "min-length")]
        min_length: Option<i64>,
        /// Maximum interval length
        #[arg(long = "max-length")]
        max_length: Option<i64>,
    },
    /// Print one attribute value per record
    Attrs {
        /// Input GFF file
        input: PathBuf,
        /// Attribute key to extract
        #[arg(short, long)]
        key: String,
        /// Value printed when the key is absent
        #[arg(long, default_value = ".")]
        missing: String,
    },
}

fn keep_record(
    record: &FeatureRecord,
    filter: &LoadFilter,
    min_length: Option<i64>,
    max_length: Option<i64>,
) -> bool {
    if !filter.matches(record) {
        return false;
    }
    let span = record.span();
    if min_length.is_some_and(|min| span < min) {
        return false;
    }
    if max_length.is_some_and(|max| span > max) {
        return false;
    }
    true
}

fn build_filter(seqids: Vec<String>, types: Vec<String>) -> LoadFilter {
    LoadFilter::new().with_seqids(seqids).with_types(types)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Commands::Stats {
            input,
            seqids,
            types,
        } => {
            let filter = build_filter(seqids, types);
            let set = FeatureSet::load_filtered(&input, &filter)?;
            let stats = set.coverage();

            println!("records:      {}", stats.records);
            println!("total bases:  {}", stats.total_bases);
            println!("unique bases: {}", stats.unique_bases);
            if !stats.per_type.is_empty() {
                println!();
                println!("{:<20} {:>10} {:>14}", "feature type", "records", "bases");
                for row in &stats.per_type {
                    println!(
                        "{:<20} {:>10} {:>14}",
                        row.feature_type, row.records, row.total_bases
                    );
                }
            }
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Filter {
            input,
            output,
            seqids,
            types,
            min_length,
            max_length,
        } => {
            let filter = build_filter(seqids, types);
            let stream = FeatureReader::from_path(&input)?;

            let stdout = std::io::stdout();
            let mut writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(BufWriter::new(stdout.lock())),
            };

            let mut total = 0usize;
            let mut kept = 0usize;
            for record in stream {
                let record = record?;
                total += 1;
                if keep_record(&record, &filter, min_length, max_length) {
                    writeln!(writer, "{}", record)?;
                    kept += 1;
                }
            }
            writer.flush()?;

            eprintln!("\n=== Filter Statistics ===");
            eprintln!("Total records:   {}", total);
            eprintln!("Kept:            {}", kept);
            eprintln!("Dropped:         {}", total - kept);
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Attrs {
            input,
            key,
            missing,
        } => {
            let stream = FeatureReader::from_path(&input)?;
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());

            for record in stream {
                let record = record?;
                writeln!(
                    writer,
                    "{}:{}-{}\t{}",
                    record.seqid,
                    record.start,
                    record.stop,
                    record.attribute_or(&key, &missing)
                )?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}
