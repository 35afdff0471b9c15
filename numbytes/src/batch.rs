//! Parsing many independent buffers
//!
//! One table is shared by every worker; tables are immutable so no locking
//! is involved.

use numbytes_core::{parse_f64, FormattingData, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch parsing configuration
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Batches shorter than this are parsed on the calling thread
    pub min_parallel_len: usize,
    /// Offset of the number within every buffer
    pub index: usize,
}

impl BatchConfig {
    /// Set the smallest batch handed to the thread pool
    pub fn with_min_parallel_len(mut self, min_parallel_len: usize) -> Self {
        self.min_parallel_len = min_parallel_len;
        self
    }

    /// Set the offset parsed in every buffer
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Whether a batch of `len` buffers would use the thread pool
    pub fn is_parallel(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && len >= self.min_parallel_len
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            min_parallel_len: 256,
            index: 0,
        }
    }
}

/// Parse one number from each buffer, keeping input order
pub fn parse_all<B>(data: &FormattingData, inputs: &[B], config: &BatchConfig) -> Vec<Result<(f64, usize)>>
where
    B: AsRef<[u8]> + Sync,
{
    let parse = |input: &B| parse_f64(data, input.as_ref(), config.index);

    #[cfg(feature = "parallel")]
    if config.is_parallel(inputs.len()) {
        log::debug!(
            "parsing {} buffers on {} threads",
            inputs.len(),
            rayon::current_num_threads()
        );
        return inputs.par_iter().map(parse).collect();
    }

    inputs.iter().map(parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use numbytes_core::CodecError;

    #[test]
    fn test_order_and_errors_preserved() {
        let inputs = ["1", "x", "-2.5", "", "1e3"];
        let results = parse_all(defaults::invariant_utf8(), &inputs, &BatchConfig::default());
        assert_eq!(
            results,
            vec![
                Ok((1.0, 1)),
                Err(CodecError::InvalidInput),
                Ok((-2.5, 4)),
                Err(CodecError::InvalidInput),
                Ok((1000.0, 3)),
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let inputs: Vec<String> = (0..2000).map(|i| format!("{}.{}e{}", i, i % 7, i % 40 - 20)).collect();
        let data = defaults::invariant_utf8();
        let sequential = parse_all(data, &inputs, &BatchConfig::default().with_min_parallel_len(usize::MAX));
        let parallel = parse_all(data, &inputs, &BatchConfig::default().with_min_parallel_len(1));
        assert_eq!(sequential, parallel);
        assert!(sequential.iter().all(Result::is_ok));
    }

    #[test]
    fn test_index_offset() {
        let inputs: [&[u8]; 3] = [b"a=1", b"b=-7", b"c="];
        let config = BatchConfig::default().with_index(2).with_min_parallel_len(0);
        let results = parse_all(defaults::invariant_utf8(), &inputs, &config);
        assert_eq!(results, vec![Ok((1.0, 1)), Ok((-7.0, 2)), Err(CodecError::InvalidInput)]);
    }

    #[test]
    fn test_is_parallel() {
        let config = BatchConfig::default().with_min_parallel_len(10);
        assert!(!config.is_parallel(9));
        assert_eq!(config.is_parallel(10), cfg!(feature = "parallel"));
    }
}
