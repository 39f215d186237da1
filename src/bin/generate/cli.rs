//! Command-line flags of the `generate` binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Download the GPT-J checkpoint, verify it and generate text from a prompt.
#[derive(Debug, Parser)]
#[command(name = "generate", version)]
#[command(about = "Fetch a verified GPT-J checkpoint and run sampled text generation", long_about = None)]
pub struct Args {
    /// Directory the generated text is written to.
    #[arg(long, default_value = "./")]
    pub output_dir: PathBuf,

    /// Prompt text.
    #[arg(long, default_value = "Why AutoGluon is great?")]
    pub input: String,

    /// Maximum length of the generated sequence.
    #[arg(long, default_value_t = 800)]
    pub max_length: u32,

    /// Top-p value in the sampler.
    #[arg(long, default_value_t = 0.9)]
    pub top_p: f32,

    /// Top-k value in the sampler.
    #[arg(long, default_value_t = 0)]
    pub top_k: u32,

    /// Directory to store the downloaded files in, default in current dir.
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// Precision the model runs in.
    #[arg(long, value_enum)]
    pub dtype: Option<Dtype>,

    /// Seed for generating the samples.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Download the checkpoint again even if the local copy is valid.
    #[arg(long)]
    pub overwrite: bool,

    /// Retries of transient network failures per file.
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Program that loads the model directory and prints the generated text.
    ///
    /// Without it, the run stops once the checkpoint is verified.
    #[arg(long, value_name = "PROGRAM")]
    pub generator: Option<PathBuf>,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dtype {
    Float16,
    Bfloat16,
}

impl Dtype {
    pub fn as_str(self) -> &'static str {
        match self {
            Dtype::Float16 => "float16",
            Dtype::Bfloat16 => "bfloat16",
        }
    }
}
