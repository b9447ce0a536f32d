//! Merkledrop CLI - Merkle proofs for token distributions
//!
//! This tool provides commands for:
//! - Generating a proof manifest from a recipient CSV
//! - Computing just the distribution root
//! - Verifying manifest records against the embedded root
//! - Inspecting manifest contents
//! - Generating sample recipient files
//! - Benchmarking tree construction and proof derivation

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use merkledrop_codec::{
    leaf_set_for_recipients, read_recipients, ProofManifest, DEFAULT_IDENTIFIER_COLUMN,
};
use merkledrop_primitives::{keccak256, Digest};
use merkledrop_tree::{DistributionTree, LeafSet};

/// Merkledrop - Merkle roots and inclusion proofs for token distributions
#[derive(Parser)]
#[command(name = "merkledrop")]
#[command(author = "Merkledrop Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate and verify Merkle proofs for token distributions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the proof manifest for a distribution
    Generate {
        /// Path to the recipient CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the manifest (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the identifier column
        #[arg(short, long, default_value = DEFAULT_IDENTIFIER_COLUMN)]
        column: String,
    },

    /// Compute only the distribution root
    Root {
        /// Path to the recipient CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Name of the identifier column
        #[arg(short, long, default_value = DEFAULT_IDENTIFIER_COLUMN)]
        column: String,
    },

    /// Verify manifest records against the embedded root
    Verify {
        /// Path to the manifest file
        #[arg(short, long)]
        manifest: PathBuf,

        /// Verify a single identifier (default: every record)
        #[arg(short, long)]
        identifier: Option<String>,
    },

    /// Inspect manifest metadata
    Inspect {
        /// Path to the manifest file
        #[arg(short, long)]
        manifest: PathBuf,
    },

    /// Generate a sample recipient CSV for testing
    #[command(name = "gen-recipients")]
    GenRecipients {
        /// Number of recipients to generate
        #[arg(short = 'n', long, default_value = "16")]
        count: usize,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a benchmark over synthetic leaves
    Benchmark {
        /// Number of leaves
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            column,
        } => generate(input, output, column),
        Commands::Root { input, column } => root(input, column),
        Commands::Verify {
            manifest,
            identifier,
        } => verify(manifest, identifier),
        Commands::Inspect { manifest } => inspect(manifest),
        Commands::GenRecipients { count, output } => gen_recipients(count, output),
        Commands::Benchmark { count } => benchmark(count),
    }
}

fn generate(input: PathBuf, output: Option<PathBuf>, column: String) -> Result<()> {
    let identifiers = load_recipients(&input, &column)?;
    eprintln!(
        "Read {} recipients from {}",
        identifiers.len(),
        input.display()
    );

    eprintln!("Building distribution tree...");
    let start = Instant::now();
    let manifest = ProofManifest::for_recipients(&identifiers)?;
    let elapsed = start.elapsed();

    eprintln!("Manifest built in {:?}", elapsed);
    eprintln!("  Records: {}", manifest.len());
    eprintln!("  Root: {}", manifest.root().to_hex());

    let json = manifest.to_json_pretty()?;
    match output {
        Some(path) => {
            fs::write(&path, &json)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!("Manifest written to: {}", path.display());
            println!("{}", manifest.root().to_hex());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

fn root(input: PathBuf, column: String) -> Result<()> {
    let identifiers = load_recipients(&input, &column)?;
    eprintln!("Read {} recipients", identifiers.len());

    let leaves = leaf_set_for_recipients(&identifiers)?;
    let tree = DistributionTree::build(&leaves)?;
    println!("{}", tree.root().to_hex());

    Ok(())
}

fn verify(manifest_path: PathBuf, identifier: Option<String>) -> Result<()> {
    let manifest = load_manifest(&manifest_path)?;
    eprintln!("Loaded manifest:");
    eprintln!("  Records: {}", manifest.len());
    eprintln!("  Root: {}", manifest.root().to_hex());

    let root = manifest.root();

    match identifier {
        Some(identifier) => {
            let record = manifest
                .record(&identifier)
                .ok_or_else(|| anyhow!("No record for identifier '{}'", identifier))?;

            if DistributionTree::verify_proof(&root, &record.leaf, &record.proof) {
                println!("VALID");
            } else {
                println!("INVALID: {}", identifier);
                std::process::exit(1);
            }
        }
        None => {
            let start = Instant::now();
            let mut failures = 0usize;
            for (identifier, record) in manifest.records() {
                if !DistributionTree::verify_proof(&root, &record.leaf, &record.proof) {
                    eprintln!("  Record failed: {}", identifier);
                    failures += 1;
                }
            }
            let elapsed = start.elapsed();

            if failures == 0 {
                eprintln!("All {} records verified in {:?}", manifest.len(), elapsed);
                println!("VALID");
            } else {
                println!("INVALID: {} of {} records failed", failures, manifest.len());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn inspect(manifest_path: PathBuf) -> Result<()> {
    let manifest = load_manifest(&manifest_path)?;

    let mut min_proof = usize::MAX;
    let mut max_proof = 0usize;
    for (_, record) in manifest.records() {
        min_proof = min_proof.min(record.proof.len());
        max_proof = max_proof.max(record.proof.len());
    }

    println!("Manifest Inspection:");
    println!("  File: {}", manifest_path.display());
    println!("  Records: {}", manifest.len());
    println!("  Root: {}", manifest.root().to_hex());
    if !manifest.is_empty() {
        println!("  Proof length: {} - {} siblings", min_proof, max_proof);
    }

    Ok(())
}

fn gen_recipients(count: usize, output: Option<PathBuf>) -> Result<()> {
    let mut rng = SampleRng::from_time();
    let mut csv = String::with_capacity(count * 44 + 16);
    csv.push_str(DEFAULT_IDENTIFIER_COLUMN);
    csv.push('\n');

    for _ in 0..count {
        let mut address = [0u8; 20];
        for chunk in address.chunks_mut(8) {
            let word = rng.next_u64().to_be_bytes();
            let len = chunk.len();
            chunk.copy_from_slice(&word[..len]);
        }
        csv.push_str("0x");
        csv.push_str(&hex::encode(address));
        csv.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(&path, &csv)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!("{} recipients written to: {}", count, path.display());
        }
        None => {
            print!("{}", csv);
        }
    }

    Ok(())
}

fn benchmark(count: usize) -> Result<()> {
    if count == 0 {
        bail!("Benchmark needs at least one leaf");
    }

    println!("Merkledrop Benchmark");
    println!("====================");
    println!("  Leaves: {}", count);
    println!();

    let mut rng = SampleRng::from_time();
    let digests: Vec<Digest> = (0..count)
        .map(|_| keccak256(&rng.next_u64().to_be_bytes()))
        .collect();
    let leaves = LeafSet::from_digests(digests);

    eprintln!("Building tree...");
    let start = Instant::now();
    let tree = DistributionTree::build(&leaves)?;
    let build_time = start.elapsed();
    println!("Tree built in {:?}", build_time);
    println!("  Depth: {}", tree.depth());
    println!("  Root: {}", tree.root().to_hex());
    println!();

    eprintln!("Deriving and verifying {} proofs...", count);
    let root = tree.root();
    let mut proof_times = Vec::with_capacity(count);
    let mut verify_times = Vec::with_capacity(count);
    let mut proof_lengths = Vec::with_capacity(count);

    for index in 0..count {
        let start = Instant::now();
        let proof = tree.proof(index)?;
        proof_times.push(start.elapsed());
        proof_lengths.push(proof.siblings.len());

        let leaf = leaves.as_slice()[index];
        let start = Instant::now();
        let valid = DistributionTree::verify_proof(&root, &leaf, &proof.siblings);
        verify_times.push(start.elapsed());

        if !valid {
            bail!("Proof {} failed verification", index);
        }
    }

    let avg_proof = proof_times.iter().sum::<Duration>() / count as u32;
    let avg_verify = verify_times.iter().sum::<Duration>() / count as u32;

    println!("Results:");
    println!("--------");
    println!("Proof derivation:");
    println!("  Average: {:?}", avg_proof);
    println!(
        "  Min: {:?}",
        proof_times.iter().min().copied().unwrap_or_default()
    );
    println!(
        "  Max: {:?}",
        proof_times.iter().max().copied().unwrap_or_default()
    );
    println!();
    println!("Verification:");
    println!("  Average: {:?}", avg_verify);
    println!(
        "  Min: {:?}",
        verify_times.iter().min().copied().unwrap_or_default()
    );
    println!(
        "  Max: {:?}",
        verify_times.iter().max().copied().unwrap_or_default()
    );
    println!();
    println!(
        "Proof length: {} - {} siblings",
        proof_lengths.iter().min().copied().unwrap_or(0),
        proof_lengths.iter().max().copied().unwrap_or(0)
    );

    Ok(())
}

fn load_recipients(input: &Path, column: &str) -> Result<Vec<String>> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let identifiers = read_recipients(file, column)
        .with_context(|| format!("Failed to read recipients from {}", input.display()))?;
    Ok(identifiers)
}

fn load_manifest(path: &Path) -> Result<ProofManifest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;
    let manifest = ProofManifest::from_json(&json)
        .with_context(|| format!("Failed to parse manifest JSON from {}", path.display()))?;
    Ok(manifest)
}

// Simple xorshift generator (not cryptographically secure, just for
// sample data and benchmarks)
struct SampleRng(u64);

impl SampleRng {
    fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5DEECE66D);
        Self(seed | 1)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}
