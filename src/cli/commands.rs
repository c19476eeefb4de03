// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags:
//
//   vocab    — build or load the vocabulary, print its size
//   prepare  — corpus → vocabulary → encoded .npy arrays
//   encode   — encode ad-hoc texts with an existing vocabulary
//   decode   — turn index rows back into words

use clap::{Args, Subcommand, ValueEnum};

use crate::application::inspect_use_case::SequenceKind;
use crate::application::prepare_use_case::PrepareConfig;
use crate::domain::config::DEFAULT_MAX_SEQUENCES;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary from the corpus, or load the saved one
    Vocab(VocabArgs),

    /// Encode the whole corpus into model-ready .npy arrays
    Prepare(PrepareArgs),

    /// Encode texts with an existing vocabulary and print the rows
    Encode(EncodeArgs),

    /// Decode index sequences back into text
    Decode(DecodeArgs),
}

/// Flags shared by every command that may tokenize text.
#[derive(Args, Debug, Clone)]
pub struct MorphArgs {
    /// External morpheme analyzer: program then its arguments.
    /// Reads a text on stdin and prints whitespace-separated morphemes.
    /// Consumes every following argument, so pass it last.
    #[arg(long, num_args = 1.., allow_hyphen_values = true, value_name = "PROGRAM")]
    pub morph_command: Vec<String>,
}

#[derive(Args, Debug)]
pub struct VocabArgs {
    /// CSV corpus with `Q` and `A` columns
    #[arg(long, default_value = "data/ChatBotData.csv")]
    pub corpus: String,

    /// Vocabulary file, one word per line
    #[arg(long, default_value = "data/vocabulary.txt")]
    pub vocab: String,

    #[command(flatten)]
    pub morph: MorphArgs,
}

impl From<VocabArgs> for PrepareConfig {
    fn from(a: VocabArgs) -> Self {
        PrepareConfig {
            corpus_path:   a.corpus,
            vocab_path:    a.vocab,
            morph_command: a.morph.morph_command,
            ..PrepareConfig::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// CSV corpus with `Q` and `A` columns
    #[arg(long, default_value = "data/ChatBotData.csv")]
    pub corpus: String,

    /// Vocabulary file; built from the corpus if it does not exist
    #[arg(long, default_value = "data/vocabulary.txt")]
    pub vocab: String,

    /// Directory for the .npy arrays and prepare_config.json
    #[arg(long, default_value = "data/encoded")]
    pub out_dir: String,

    /// Length of every encoded row
    #[arg(long, default_value_t = DEFAULT_MAX_SEQUENCES)]
    pub max_sequences: usize,

    #[command(flatten)]
    pub morph: MorphArgs,
}

/// Convert CLI PrepareArgs into the application-layer PrepareConfig.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            corpus_path:   a.corpus,
            vocab_path:    a.vocab,
            output_dir:    a.out_dir,
            max_sequences: a.max_sequences,
            morph_command: a.morph.morph_command,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum KindArg {
    Input,
    DecoderInput,
    DecoderTarget,
}

impl From<KindArg> for SequenceKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Input         => SequenceKind::EncoderInput,
            KindArg::DecoderInput  => SequenceKind::DecoderInput,
            KindArg::DecoderTarget => SequenceKind::DecoderTarget,
        }
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Texts to encode
    #[arg(required = true)]
    pub texts: Vec<String>,

    /// Existing vocabulary file
    #[arg(long, default_value = "data/vocabulary.txt")]
    pub vocab: String,

    /// Which encoder to run
    #[arg(long, value_enum, default_value_t = KindArg::Input)]
    pub kind: KindArg,

    #[arg(long, default_value_t = DEFAULT_MAX_SEQUENCES)]
    pub max_sequences: usize,

    #[command(flatten)]
    pub morph: MorphArgs,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Indices of one encoded row
    #[arg(required = true)]
    pub ids: Vec<u32>,

    /// Existing vocabulary file
    #[arg(long, default_value = "data/vocabulary.txt")]
    pub vocab: String,
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use super::*;
    use clap::Parser;

    #[test]
    fn test_prepare_defaults() {
        let cli = Cli::try_parse_from(["chatbot-prep", "prepare"]).unwrap();
        let Commands::Prepare(args) = cli.command else { panic!("expected prepare") };
        let cfg: PrepareConfig = args.into();
        assert_eq!(cfg, PrepareConfig::default());
    }

    #[test]
    fn test_morph_command_collects_arguments() {
        let cli = Cli::try_parse_from([
            "chatbot-prep", "vocab", "--morph-command", "python3", "okt.py",
        ])
        .unwrap();
        let Commands::Vocab(args) = cli.command else { panic!("expected vocab") };
        assert_eq!(args.morph.morph_command, vec!["python3", "okt.py"]);
    }

    #[test]
    fn test_encode_kind() {
        let cli = Cli::try_parse_from([
            "chatbot-prep", "encode", "--kind", "decoder-target", "hi there",
        ])
        .unwrap();
        let Commands::Encode(args) = cli.command else { panic!("expected encode") };
        assert_eq!(SequenceKind::from(args.kind), SequenceKind::DecoderTarget);
        assert_eq!(args.texts, vec!["hi there"]);
    }

    #[test]
    fn test_decode_requires_ids() {
        assert!(Cli::try_parse_from(["chatbot-prep", "decode"]).is_err());
    }
}
