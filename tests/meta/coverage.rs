//! Enforces that `src/` and `tests/unit/` mirror each other file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files carry no logic of their own
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn relative_paths(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_stripped| io::Error::other("path outside base directory"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.extend(relative_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(paths)
    }

    fn mirrored_sets() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = relative_paths(Path::new(SRC_DIR), Path::new(SRC_DIR)).unwrap_or_default();
        let unit = relative_paths(Path::new(UNIT_DIR), Path::new(UNIT_DIR)).unwrap_or_default();
        assert!(!src.is_empty(), "no sources found under {SRC_DIR}");
        (src, unit)
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let (src, unit) = mirrored_sets();
        let missing: Vec<_> = src
            .iter()
            .filter(|path| !is_organizational(path) && !unit.contains(*path))
            .map(|path| format!("  - {SRC_DIR}/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source() {
        let (src, unit) = mirrored_sets();
        let orphaned: Vec<_> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no {SRC_DIR}/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_unit_file_contains_tests() {
        let unit = relative_paths(Path::new(UNIT_DIR), Path::new(UNIT_DIR)).unwrap_or_default();
        let empty: Vec<_> = unit
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new(UNIT_DIR).join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Unit test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
