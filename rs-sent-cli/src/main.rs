use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_sent_core::io::read_corpus;
use rs_sent_core::model::generation_input::DEFAULT_MAX_STEPS;
use rs_sent_core::{GenerationInput, Generator, LanguageModel, OutputMode, Sentence};

/// Generate random sentences from a text corpus using Markov chains.
#[derive(Parser, Debug)]
#[command(name = "rs-sent", version, about, long_about = None)]
struct Args {
    /// Text file to use as a corpus
    filename: PathBuf,

    /// Number of words to look back as context when generating new words
    #[arg(short, long, default_value_t = 2)]
    chain_length: usize,

    /// Number of sentences to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Maximum number of tokens sampled per sentence
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Print the token list instead of the stitched sentence
    #[arg(long)]
    as_list: bool,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Sentences of lowercase tokens, quotes and punctuation split off
    let corpus = read_corpus(&args.filename)?;
    let model = LanguageModel::new(&corpus, args.chain_length)?;
    info!(
        "trained on {} sentences ({} distinct tokens, chain length {})",
        corpus.len(),
        model.vocabulary_len(),
        model.chain_length()
    );

    let output = if args.as_list { OutputMode::Tokens } else { OutputMode::Text };
    let input = GenerationInput::new(output).with_max_steps(args.max_steps)?;
    let generator = Generator::new(&model, input);

    // Seeded runs are reproducible, otherwise seed from the OS
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for _ in 0..args.count {
        match generator.generate_with(&mut rng) {
            Ok(Sentence::Text(text)) => println!("{text}"),
            Ok(Sentence::Tokens(tokens)) => println!("{tokens:?}"),
            Err(e) => {
                error!("{e}");
                return Err(e.into());
            }
        }
    }

    Ok(())
}
