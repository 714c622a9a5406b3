//! Keeps `tests/unit` in step with `src`: one test file per source file,
//! every file reachable from its module root, every test file holding tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";
    const TESTS: &str = "tests";

    /// Rust files under `root`, relative to it
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path.strip_prefix(root).map_err(io::Error::other)?;
                    found.insert(relative.to_path_buf());
                }
            }
        }

        Ok(found)
    }

    fn file_name(path: &Path) -> &str {
        path.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// Crate roots and `mod.rs` files only organize modules
    fn is_module_file(path: &Path) -> bool {
        matches!(file_name(path), "lib.rs" | "main.rs" | "mod.rs")
    }

    /// Source and unit test files that hold code of their own
    fn leaf_files(root: &str) -> io::Result<BTreeSet<PathBuf>> {
        Ok(rust_files(Path::new(root))?
            .into_iter()
            .filter(|path| !is_module_file(path))
            .collect())
    }

    /// Module name a file introduces and the file expected to declare it
    ///
    /// `a/b.rs` is declared by `a/mod.rs`, `a/mod.rs` by the parent of `a`.
    fn declaration(path: &Path, root_module: &str) -> Option<(String, PathBuf)> {
        let (name, dir) = if file_name(path) == "mod.rs" {
            let module_dir = path.parent()?;
            (module_dir.file_name()?, module_dir.parent()?)
        } else {
            (path.file_stem()?, path.parent()?)
        };
        let declaring = if dir.as_os_str().is_empty() {
            PathBuf::from(root_module)
        } else {
            dir.join("mod.rs")
        };
        Some((name.to_string_lossy().into_owned(), declaring))
    }

    fn listing(paths: &[String]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {path}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source file has a unit test file at the mirrored path
    #[test]
    fn test_every_source_file_has_unit_tests() -> io::Result<()> {
        let tests = leaf_files(UNIT)?;

        let untested: Vec<String> = leaf_files(SRC)?
            .difference(&tests)
            .map(|path| format!("src/{0} -> tests/unit/{0}", path.display()))
            .collect();

        assert!(
            untested.is_empty(),
            "source files without unit tests:\n{}",
            listing(&untested)
        );
        Ok(())
    }

    // Tests no unit test file outlives the source file it covers
    #[test]
    fn test_every_unit_test_has_a_source_file() -> io::Result<()> {
        let sources = leaf_files(SRC)?;

        let orphaned: Vec<String> = leaf_files(UNIT)?
            .difference(&sources)
            .map(|path| format!("tests/unit/{}", path.display()))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files with no source counterpart:\n{}",
            listing(&orphaned)
        );
        Ok(())
    }

    // Tests each file is declared by its parent module, so none is silently skipped
    #[test]
    fn test_every_file_is_declared() -> io::Result<()> {
        let mut undeclared = Vec::new();

        for (root, root_module) in [(SRC, "lib.rs"), (UNIT, "mod.rs")] {
            let base = Path::new(root);
            for path in rust_files(base)? {
                if matches!(file_name(&path), "lib.rs" | "main.rs") || path == Path::new("mod.rs")
                {
                    continue;
                }
                let Some((name, declaring)) = declaration(&path, root_module) else {
                    continue;
                };
                let parent = fs::read_to_string(base.join(&declaring)).unwrap_or_default();
                if !parent.contains(&format!("mod {name};")) {
                    undeclared.push(format!(
                        "{root}/{} is not declared in {root}/{}",
                        path.display(),
                        declaring.display()
                    ));
                }
            }
        }

        assert!(
            undeclared.is_empty(),
            "files outside the module tree:\n{}",
            listing(&undeclared)
        );
        Ok(())
    }

    // Tests every test file defines at least one test
    #[test]
    fn test_every_test_file_has_tests() -> io::Result<()> {
        let mut empty = Vec::new();

        for path in rust_files(Path::new(TESTS))? {
            if is_module_file(&path) {
                continue;
            }
            let content = fs::read_to_string(Path::new(TESTS).join(&path))?;
            if !content.contains("#[test]") {
                empty.push(format!("tests/{}", path.display()));
            }
        }

        assert!(
            empty.is_empty(),
            "test files without a #[test] function:\n{}",
            listing(&empty)
        );
        Ok(())
    }

    // Tests unit tests exercise the crate rather than local copies of its code
    #[test]
    fn test_unit_tests_import_the_crate() -> io::Result<()> {
        let mut detached = Vec::new();

        for path in leaf_files(UNIT)? {
            let content = fs::read_to_string(Path::new(UNIT).join(&path))?;
            if !content.contains("use drawsmith::") {
                detached.push(format!("tests/unit/{}", path.display()));
            }
        }

        assert!(
            detached.is_empty(),
            "unit test files that never import drawsmith:\n{}",
            listing(&detached)
        );
        Ok(())
    }
}
