use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse an export path that resolves to the scan document being read.
pub fn ensure_export_not_input(export: &Path, document: &Path) -> Result<()> {
    let export_norm = normalize_for_compare(export)
        .with_context(|| format!("failed to normalize export path {}", export.display()))?;
    let document_norm = normalize_for_compare(document)
        .with_context(|| format!("failed to normalize input path {}", document.display()))?;

    if export_norm == document_norm {
        bail!(
            "refusing to overwrite scan document: export path {} matches input {}",
            export.display(),
            document.display()
        );
    }
    Ok(())
}

fn normalize_for_compare(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Not-yet-created paths are joined onto cwd; `..` segments stay unresolved.
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().context("current_dir")?
    };

    Ok(base.join(path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::ensure_export_not_input;

    #[test]
    fn rejects_export_over_input() {
        let dir = tempdir().expect("tempdir");
        let input = dir.path().join("scan.json");
        fs::write(&input, "[]").expect("write");

        assert!(ensure_export_not_input(&input, &input).is_err());
        assert!(ensure_export_not_input(&dir.path().join("out.csv"), &input).is_ok());
    }
}
