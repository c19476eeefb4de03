// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and delegates all
// work to Layer 2 (application). Only this layer prints.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DecodeArgs, EncodeArgs, PrepareArgs, VocabArgs};

use crate::application::{
    inspect_use_case::InspectUseCase,
    prepare_use_case::PrepareUseCase,
};

#[derive(Parser, Debug)]
#[command(
    name = "chatbot-prep",
    version,
    about = "Build a chatbot vocabulary and encode Q/A corpora into fixed-length index arrays."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Vocab(args)   => run_vocab(args),
            Commands::Prepare(args) => run_prepare(args),
            Commands::Encode(args)  => run_encode(args),
            Commands::Decode(args)  => run_decode(args),
        }
    }
}

fn run_vocab(args: VocabArgs) -> Result<()> {
    let vocab_path = args.vocab.clone();
    let vocab = PrepareUseCase::new(args.into()).vocabulary()?;
    println!("Vocabulary '{}': {} entries", vocab_path, vocab.len());
    Ok(())
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    tracing::info!("Preparing corpus '{}'", args.corpus);
    let out_dir = args.out_dir.clone();
    let report  = PrepareUseCase::new(args.into()).execute()?;
    println!(
        "Encoded {} samples (vocabulary size {}) into '{}'",
        report.samples, report.vocab_size, out_dir
    );
    Ok(())
}

fn run_encode(args: EncodeArgs) -> Result<()> {
    let use_case = InspectUseCase::new(&args.vocab, args.max_sequences, &args.morph.morph_command)?;
    let out      = use_case.encode(args.kind.into(), &args.texts)?;

    for (i, row) in out.ids.rows().into_iter().enumerate() {
        let ids = row.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
        match &out.lengths {
            Some(lengths) => println!("{ids}\t(length {})", lengths[i]),
            None          => println!("{ids}"),
        }
    }
    Ok(())
}

fn run_decode(args: DecodeArgs) -> Result<()> {
    let use_case = InspectUseCase::new(&args.vocab, 1, &[])?;
    println!("{}", use_case.decode(&args.ids));
    Ok(())
}
