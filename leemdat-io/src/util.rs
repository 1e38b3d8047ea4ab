//! Small path helpers shared by the format-specific decoders.

use std::path::Path;

/// Case-insensitive extension match against a candidate list.
pub(crate) fn has_extension(path: &Path, candidates: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            candidates
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        let candidates = &["png", "tif", "tiff"];
        assert!(has_extension(Path::new("a.png"), candidates));
        assert!(has_extension(Path::new("a.TIFF"), candidates));
        assert!(!has_extension(Path::new("a.dat"), candidates));
        assert!(!has_extension(Path::new("no_extension"), candidates));
    }
}
