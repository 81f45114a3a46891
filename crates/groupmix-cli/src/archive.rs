/// Zip packaging of the per-branch and per-group CSV folders.
use anyhow::{Context, Result};
use groupmix_core::io::csv_files;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path};
use tracing::info;

/// Zip every CSV in `dirs` into `archive_path`. Entry names are relative to
/// `base_dir` (e.g. `group_uniform_mix/g1.csv`). Returns the entry count.
pub fn bundle_archive(archive_path: &Path, base_dir: &Path, dirs: &[&Path]) -> Result<usize> {
    let file = File::create(archive_path)
        .with_context(|| format!("failed to create archive {}", archive_path.display()))?;
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    let mut entries = 0usize;
    for dir in dirs {
        for path in csv_files(dir)? {
            zip.start_file(entry_name(base_dir, &path), options)?;
            let contents =
                fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
            zip.write_all(&contents)?;
            entries += 1;
        }
    }
    zip.finish()?;

    info!(path = %archive_path.display(), entries, "Wrote archive");
    Ok(entries)
}

/// Forward-slash path of `path` relative to `base`. Paths outside `base`
/// keep only their parent folder and file name.
fn entry_name(base: &Path, path: &Path) -> String {
    let relative = match path.strip_prefix(base) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path
            .components()
            .rev()
            .take(2)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect(),
    };
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn entry_names_are_relative_with_forward_slashes() {
        let base = Path::new("/out");
        assert_eq!(
            entry_name(base, Path::new("/out/group_uniform_mix/g1.csv")),
            "group_uniform_mix/g1.csv"
        );
        assert_eq!(
            entry_name(base, Path::new("/elsewhere/mix/g2.csv")),
            "mix/g2.csv"
        );
    }

    #[test]
    fn archive_holds_every_csv() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::write(a.join("CS.csv"), "Roll\n").unwrap();
        fs::write(b.join("g1.csv"), "Roll\n").unwrap();
        fs::write(b.join("g2.csv"), "Roll\n").unwrap();
        fs::write(b.join("readme.txt"), "skip").unwrap();

        let zip_path = tmp.path().join("bundle.zip");
        let count = bundle_archive(&zip_path, tmp.path(), &[a.as_path(), b.as_path()]).unwrap();
        assert_eq!(count, 3);

        let archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort_unstable();
        assert_eq!(names, ["a/CS.csv", "b/g1.csv", "b/g2.csv"]);
    }
}
