//! Run label derivation from path-like identifiers.
//!
//! Simulator output folders look like `parsec_blackscholes+hotPotato+4`; the
//! plotted label is the tail of the part before the first delimiter. This is
//! a plain string transform, so distinct folders can map to the same label.

use crate::utils::config::{LABEL_DELIMITER, LABEL_WIDTH};
use std::path::Path;

/// Last `width` characters of the text before the first `delimiter`
pub fn label_from_identifier(identifier: &str, delimiter: char, width: usize) -> String {
    let head = identifier.split(delimiter).next().unwrap_or(identifier);
    let skip = head.chars().count().saturating_sub(width);
    head.chars().skip(skip).collect()
}

/// Label for a run folder, using its last path component
pub fn label_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    label_from_identifier(&name, LABEL_DELIMITER, LABEL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_identifier() {
        assert_eq!(label_from_identifier("parsec_canneal+hotPotato+4", '+', 6), "anneal");
        assert_eq!(label_from_identifier("short+x", '+', 6), "short");
        assert_eq!(label_from_identifier("no_delimiter_here", '+', 4), "here");
        assert_eq!(label_from_identifier("", '+', 6), "");
    }

    #[test]
    fn test_label_counts_characters() {
        assert_eq!(label_from_identifier("temp_°C±", '+', 3), "°C±");
    }

    #[test]
    fn test_label_from_path_uses_last_component() {
        assert_eq!(label_from_path(Path::new("results/2024/gcc_ondemand+1+a/")), "demand");
    }
}
