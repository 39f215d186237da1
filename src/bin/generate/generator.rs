//! Hands the verified checkpoint to an external generation program.
//!
//! The program is called as
//!
//! ```text
//! PROGRAM --model-dir DIR --input TEXT --max-length N --top-p P --top-k K [--dtype D] [--seed S]
//! ```
//!
//! and whatever it prints on stdout is taken as the generated text.

use crate::cli::{Args, Dtype};

use color_eyre::eyre::{bail, Result, WrapErr};
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Sampling parameters forwarded to the generator.
#[derive(Debug, Clone)]
pub struct Params {
    pub input: String,
    pub max_length: u32,
    pub top_p: f32,
    pub top_k: u32,
    pub dtype: Option<Dtype>,
    pub seed: Option<u64>,
}

impl From<&Args> for Params {
    fn from(args: &Args) -> Self {
        Self {
            input: args.input.clone(),
            max_length: args.max_length,
            top_p: args.top_p,
            top_k: args.top_k,
            dtype: args.dtype,
            seed: args.seed,
        }
    }
}

impl Params {
    fn to_args(&self, model_dir: &Path) -> Vec<String> {
        let mut args = vec![
            "--model-dir".to_string(),
            model_dir.display().to_string(),
            "--input".to_string(),
            self.input.clone(),
            "--max-length".to_string(),
            self.max_length.to_string(),
            "--top-p".to_string(),
            self.top_p.to_string(),
            "--top-k".to_string(),
            self.top_k.to_string(),
        ];
        if let Some(dtype) = self.dtype {
            args.extend(["--dtype".to_string(), dtype.as_str().to_string()]);
        }
        if let Some(seed) = self.seed {
            args.extend(["--seed".to_string(), seed.to_string()]);
        }
        args
    }
}

/// Runs `program` on `model_dir` and returns its stdout.
pub async fn generate(program: &Path, model_dir: &Path, params: &Params) -> Result<String> {
    let args = params.to_args(model_dir);
    debug!("Running {:?} {:?}", program, args);

    let output = Command::new(program)
        .args(&args)
        .kill_on_drop(true)
        .output()
        .await
        .wrap_err_with(|| format!("failed to start generator {}", program.display()))?;

    if !output.status.success() {
        bail!(
            "generator {} exited with {}: {}",
            program.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    String::from_utf8(output.stdout).wrap_err("generator output is not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Params {
        Params {
            input: "Why AutoGluon is great?".into(),
            max_length: 800,
            top_p: 0.9,
            top_k: 0,
            dtype: Some(Dtype::Float16),
            seed: None,
        }
    }

    #[test]
    fn test_forwards_sampling_parameters() {
        let args = params().to_args(Path::new("gpt-j-hf"));
        assert_eq!(
            args,
            [
                "--model-dir",
                "gpt-j-hf",
                "--input",
                "Why AutoGluon is great?",
                "--max-length",
                "800",
                "--top-p",
                "0.9",
                "--top-k",
                "0",
                "--dtype",
                "float16",
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_generator_stdout() {
        let text = generate(Path::new("echo"), Path::new("gpt-j-hf"), &params())
            .await
            .unwrap();
        assert!(text.starts_with("--model-dir gpt-j-hf --input"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_generator_aborts() {
        let err = generate(Path::new("false"), Path::new("gpt-j-hf"), &params())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }
}
