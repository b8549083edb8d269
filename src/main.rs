use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::Parser;
use lexprep::index::TreeBuilder;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser)]
#[command(name = "prepare_data")]
#[command(about = "Build dictionary index files (prefix trie, BK-tree) for text recovery")]
struct Cli {
    /// Input file with the list of words
    #[arg(short = 'w', long, value_name = "PATH")]
    wordlist: PathBuf,

    /// Output file for the serialized trie
    #[arg(short = 't', long = "build-trie", value_name = "PATH")]
    build_trie: Option<PathBuf>,

    /// Output file for the serialized BK-tree
    #[arg(short = 'b', long = "build-bktree", value_name = "PATH")]
    build_bktree: Option<PathBuf>,

    /// Seed for the BK-tree insertion shuffle (default: OS entropy)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

/// Parse the command line, keeping the documented exit-code contract:
/// usage text goes to stderr and exits 0, any argument error exits 1.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                eprint!("{err}");
                exit(0);
            }
            _ => {
                eprint!("{err}");
                exit(1);
            }
        },
    }
}

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.build_trie.is_none() && cli.build_bktree.is_none() {
        bail!("nothing to build: pass --build-trie and/or --build-bktree");
    }

    let mut builder = TreeBuilder::new();
    builder.read_wordlist(&cli.wordlist)?;
    println!(
        "Read {} words from {}",
        builder.words().len(),
        cli.wordlist.display()
    );

    if let Some(path) = &cli.build_trie {
        builder.build_trie(path)?;
        println!("Trie written to {}", path.display());
    }

    if let Some(path) = &cli.build_bktree {
        builder.build_bktree(path, cli.seed)?;
        println!("BK-tree written to {}", path.display());
    }

    Ok(())
}
