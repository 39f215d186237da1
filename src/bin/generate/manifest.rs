//! The files making up the GPT-J checkpoint.

use modelfetch::{FetchRequest, Result};
use std::convert::TryFrom;
use std::path::Path;

/// A remote file and its SHA-1 digest.
#[derive(Debug, Clone, Copy)]
pub struct Artifact {
    pub url: &'static str,
    pub sha1: &'static str,
}

/// Model configuration first, weights second.
pub const GPT_J: [Artifact; 2] = [
    Artifact {
        url: "https://zhisu-nlp.s3.us-west-2.amazonaws.com/gpt-j-hf/config.json",
        sha1: "a0af27bcff3c0fa17ec9718ffb6060b8db5e54e4",
    },
    Artifact {
        url: "https://zhisu-nlp.s3.us-west-2.amazonaws.com/gpt-j-hf/pytorch_model.bin",
        sha1: "bab870fc9b82f0bfb3f6cbf4bd6bec3f3add05a6",
    },
];

/// One request per artifact, all landing in the same model directory.
pub fn requests(
    artifacts: &[Artifact],
    download_dir: Option<&Path>,
    overwrite: bool,
) -> Result<Vec<FetchRequest>> {
    artifacts
        .iter()
        .map(|artifact| {
            let mut request = FetchRequest::try_from(artifact.url)?
                .with_hash(artifact.sha1)
                .overwrite(overwrite);
            if let Some(dir) = download_dir {
                request = request.with_destination(dir);
            }
            Ok(request)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_gpt_j_files_share_a_model_directory() {
        let requests = requests(&GPT_J, None, false).unwrap();
        let paths: Vec<PathBuf> = requests.iter().map(|r| r.resolve().unwrap()).collect();
        assert_eq!(paths[0], Path::new("gpt-j-hf").join("config.json"));
        assert_eq!(paths[1], Path::new("gpt-j-hf").join("pytorch_model.bin"));
        assert!(requests.iter().all(|r| r.hash.is_some() && !r.overwrite));
    }

    #[test]
    fn test_download_dir_prefixes_every_path() {
        let dir = tempfile::tempdir().unwrap();
        let requests = requests(&GPT_J, Some(dir.path()), true).unwrap();
        for request in &requests {
            assert!(request.overwrite);
            assert!(request
                .resolve()
                .unwrap()
                .starts_with(dir.path().join("gpt-j-hf")));
        }
    }
}
