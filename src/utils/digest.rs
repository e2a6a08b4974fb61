use md5::Md5;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Hash function applied to each response body.
///
/// MD5 is the default and yields a 16-byte digest; SHA-256 yields 32 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Sha256,
}

impl DigestAlgorithm {
    /// Number of bytes in a digest produced by this algorithm.
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha256 => 32,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgorithm::Md5 => f.write_str("md5"),
            DigestAlgorithm::Sha256 => f.write_str("sha256"),
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            other => Err(format!("unsupported digest algorithm: {}", other)),
        }
    }
}

/// Computes the digest of a response body.
///
/// The whole body is hashed in one pass over its raw bytes, so identical
/// content always yields the identical digest.
///
/// # Arguments
///
/// * `algorithm` - The hash function to apply.
/// * `raw_content` - The raw bytes of the response body.
///
/// # Returns
///
/// The digest bytes (`algorithm.output_len()` of them).
pub fn compute_digest(algorithm: DigestAlgorithm, raw_content: &[u8]) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Md5 => {
            let mut hasher = Md5::new();
            hasher.update(raw_content);
            hasher.finalize().to_vec()
        }
        DigestAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(raw_content);
            hasher.finalize().to_vec()
        }
    }
}

/// Computes a digest and renders it as a lowercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use url_hasher::utils::{compute_digest_hex, DigestAlgorithm};
///
/// assert_eq!(
///     compute_digest_hex(DigestAlgorithm::Md5, b"abc"),
///     "900150983cd24fb0d6963f7d28e17f72"
/// );
/// ```
pub fn compute_digest_hex(algorithm: DigestAlgorithm, raw_content: &[u8]) -> String {
    hex::encode(compute_digest(algorithm, raw_content))
}
