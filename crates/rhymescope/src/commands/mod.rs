//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use rhymescope_core::phonetics::PhoneticDictionary;
use rhymescope_core::phonetics::builtin::BuiltinDictionary;
use rhymescope_core::phonetics::cmu::CmuDictionary;

pub mod analyze;
pub mod info;
pub mod phones;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Open the configured phonetic dictionary.
///
/// Loads the CMU-format file when a path is configured, the built-in
/// table otherwise.
pub fn open_dictionary(
    path: Option<&Utf8Path>,
) -> anyhow::Result<Box<dyn PhoneticDictionary>> {
    match path {
        Some(path) => {
            let dict = CmuDictionary::from_path(path)
                .with_context(|| format!("failed to load dictionary {path}"))?;
            tracing::debug!(path = %path, words = dict.len(), "loaded dictionary file");
            Ok(Box::new(dict))
        }
        None => Ok(Box::new(BuiltinDictionary)),
    }
}
