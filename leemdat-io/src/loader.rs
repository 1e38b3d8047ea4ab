//! Directory scanning and stack loading.
//!
//! An energy/time series arrives as one file per plane. Files are decoded
//! independently (read-only inputs, freshly allocated outputs), so the
//! per-file decodes run in parallel; the assembled stack preserves the
//! caller's ordering exactly. Any single failed decode aborts the whole
//! load; partial stacks are never returned.

use crate::error::Result;
use crate::image::decode_image;
use crate::raw::{decode_raw, RawParams, RAW_EXTENSION};
use crate::util::has_extension;
use leemdat_core::{ImagePlane, ImageStack};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Lists the data files in a directory, sorted lexicographically by file
/// name.
///
/// Non-recursive. Hidden dot-files are skipped, extensions match
/// case-insensitively. The lexicographic sort is what gives the depth
/// axis its physical (energy or time) ordering for instrument-named
/// file series.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn scan_data_dir<P: AsRef<Path>>(dir: P, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if has_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Decodes an ordered list of raw files and stacks them along the depth
/// axis.
///
/// # Errors
/// Propagates the first per-file decode failure, or a core assembly
/// error for inconsistent shapes or an empty list.
pub fn decode_raw_stack(paths: &[PathBuf], params: &RawParams) -> Result<ImageStack> {
    let planes: Vec<ImagePlane> = paths
        .par_iter()
        .map(|path| decode_raw(path, params))
        .collect::<Result<_>>()?;
    Ok(ImageStack::assemble(&planes)?)
}

/// Decodes an ordered list of image container files and stacks them along
/// the depth axis.
///
/// # Errors
/// Propagates the first per-file decode failure, or a core assembly
/// error for inconsistent shapes or an empty list.
pub fn decode_image_stack(paths: &[PathBuf]) -> Result<ImageStack> {
    let planes: Vec<ImagePlane> = paths.par_iter().map(decode_image).collect::<Result<_>>()?;
    Ok(ImageStack::assemble(&planes)?)
}

/// Scans a directory for raw `.dat` files and loads them as a stack.
///
/// # Errors
/// See [`scan_data_dir`] and [`decode_raw_stack`].
pub fn load_raw_dir<P: AsRef<Path>>(dir: P, params: &RawParams) -> Result<ImageStack> {
    let paths = scan_data_dir(dir, &[RAW_EXTENSION])?;
    decode_raw_stack(&paths, params)
}

/// Scans a directory for PNG/TIFF files and loads them as a stack.
///
/// # Errors
/// See [`scan_data_dir`] and [`decode_image_stack`].
pub fn load_image_dir<P: AsRef<Path>>(dir: P) -> Result<ImageStack> {
    let paths = scan_data_dir(dir, crate::image::IMAGE_EXTENSIONS)?;
    decode_image_stack(&paths)
}
