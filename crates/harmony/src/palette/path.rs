use std::path::{Path, PathBuf};

use crate::order::Algorithm;

/// Determine the path of the sorted palette.
///
/// The sorted palette is written next to the input palette. Its name combines
/// the input's file stem, an underscore, the algorithm's name, and the suffix,
/// followed by the input's extension, if any.
///
/// ```
/// # use std::path::Path;
/// # use harmony::order::Algorithm;
/// # use harmony::palette::sorted_path;
/// assert_eq!(
///     sorted_path(Path::new("palettes/colors.txt"), Algorithm::Hillbert, ""),
///     Path::new("palettes/colors_hillbert.txt")
/// );
/// assert_eq!(
///     sorted_path(Path::new("colors"), Algorithm::Step, "-v2"),
///     Path::new("colors_step-v2")
/// );
/// ```
pub fn sorted_path(input: &Path, algorithm: Algorithm, suffix: &str) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push("_");
    name.push(algorithm.name());
    name.push(suffix);
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }

    input.with_file_name(name)
}

/// Determine the path of the converted palette.
///
/// The converted palette is written next to the input palette. It has the same
/// file stem but the given extension.
///
/// ```
/// # use std::path::Path;
/// # use harmony::palette::{converted_path, ASE_EXTENSION};
/// assert_eq!(
///     converted_path(Path::new("palettes/colors.txt"), ASE_EXTENSION),
///     Path::new("palettes/colors.ase")
/// );
/// ```
pub fn converted_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

// ====================================================================================================================
