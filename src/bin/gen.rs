//! dlc-gen: CLI tool for compiling domain lists into a GeoSite container.

use clap::{Parser, Subcommand};
use dlc::binary::ContainerReader;
use dlc::{BuildConfig, CompiledContainer};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dlc-gen")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Compile domain lists into a binary GeoSite container", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a data directory into a container file
    Build {
        /// Source data directory (default: searched in $GOPATH)
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Output container file
        #[arg(short, long, default_value = "dlc.dat")]
        output: PathBuf,

        /// Also write <output>.sha256sum
        #[arg(long)]
        checksum: bool,

        /// Gzip the output
        #[arg(long)]
        gzip: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a container file as JSON
    Dump {
        /// Container file
        #[arg(short, long, default_value = "dlc.dat")]
        input: PathBuf,
    },

    /// List the groups a host belongs to
    Lookup {
        /// Container file
        #[arg(short, long, default_value = "dlc.dat")]
        input: PathBuf,

        /// Host name to classify
        host: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            data_dir,
            output,
            checksum,
            gzip,
            verbose,
        } => build(
            BuildConfig {
                data_dir,
                output,
                checksum,
                gzip,
            },
            verbose,
        ),
        Commands::Dump { input } => dump(&input),
        Commands::Lookup { input, host } => lookup(&input, &host),
    };

    if let Err(e) = result {
        eprintln!("Failed: {}", e);
        std::process::exit(1);
    }
}

fn build(config: BuildConfig, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        println!("Building with {:?}", config);
    }

    let summary = dlc::run(&config)?;

    if verbose {
        println!(
            "Compiled {} groups, {} matchers",
            summary.group_count, summary.matcher_count
        );
        if let Some(digest) = &summary.checksum {
            println!("SHA-256: {}", digest);
        }
    }

    println!(
        "Generated {:?} ({} bytes)",
        summary.output, summary.bytes_written
    );
    Ok(())
}

fn dump(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let reader = ContainerReader::open(input)?;
    let json = serde_json::to_string_pretty(reader.container())?;
    println!("{}", json);
    Ok(())
}

fn lookup(input: &Path, host: &str) -> Result<(), Box<dyn std::error::Error>> {
    let reader = ContainerReader::open(input)?;
    let compiled = CompiledContainer::compile(reader.container())?;

    let groups = compiled.lookup(host);
    if groups.is_empty() {
        println!("{}: no matching group", host);
    } else {
        for name in groups {
            println!("{}", name);
        }
    }
    Ok(())
}
