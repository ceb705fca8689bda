//! Output path derivation for batch conversions.
//!
//! The output tree mirrors the input tree: `data/a/b.las` converted from root
//! `data` into root `result_data` becomes `result_data/a/b.txt`.
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub fn derive_output_path(
    input: &Path,
    input_root: &Path,
    output_root: &Path,
    output_extension: &str,
) -> Result<PathBuf> {
    let relative = input
        .strip_prefix(input_root)
        .map_err(|_| Error::OutsideInputRoot {
            input: input.to_path_buf(),
            root: input_root.to_path_buf(),
        })?;

    if relative.as_os_str().is_empty() {
        return Err(Error::OutsideInputRoot {
            input: input.to_path_buf(),
            root: input_root.to_path_buf(),
        });
    }

    let extension = output_extension
        .strip_prefix('.')
        .unwrap_or(output_extension);
    Ok(output_root.join(relative).with_extension(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_relative_layout() {
        let out = derive_output_path(
            Path::new("data/tile_001.las"),
            Path::new("data"),
            Path::new("result_data"),
            "txt",
        )
        .unwrap();
        assert_eq!(out, PathBuf::from("result_data/tile_001.txt"));

        let nested = derive_output_path(
            Path::new("/srv/in/2019/north/a.b.las"),
            Path::new("/srv/in"),
            Path::new("/srv/out"),
            ".txt",
        )
        .unwrap();
        assert_eq!(nested, PathBuf::from("/srv/out/2019/north/a.b.txt"));
    }

    #[test]
    fn independent_of_name_length() {
        for name in ["x.las", "a_much_longer_tile_name.las"] {
            let input = Path::new("data").join(name);
            let out = derive_output_path(&input, Path::new("data"), Path::new("out"), "txt").unwrap();
            assert_eq!(out.parent(), Some(Path::new("out")));
            assert_eq!(out.extension().unwrap(), "txt");
        }
    }

    #[test]
    fn rejects_inputs_outside_root() {
        assert!(matches!(
            derive_output_path(Path::new("other/a.las"), Path::new("data"), Path::new("out"), "txt"),
            Err(Error::OutsideInputRoot { .. })
        ));
        assert!(matches!(
            derive_output_path(Path::new("data"), Path::new("data"), Path::new("out"), "txt"),
            Err(Error::OutsideInputRoot { .. })
        ));
    }
}
