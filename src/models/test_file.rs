//! Test file models
//!
//! Classifies input files and derives per-invocation output names.

use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of test file, decided by extension
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TestKind {
    /// Plain Python script (`.py`)
    Script,
    /// Jupyter notebook (`.ipynb`)
    Notebook,
}

impl TestKind {
    /// Classify a path by its file-name suffix.
    ///
    /// Bare `.py` and `.ipynb` names count, unlike with `Path::extension`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        if name.ends_with(".py") {
            Some(TestKind::Script)
        } else if name.ends_with(".ipynb") {
            Some(TestKind::Notebook)
        } else {
            None
        }
    }

    pub fn is_notebook(self) -> bool {
        matches!(self, TestKind::Notebook)
    }
}

/// A single attempted test: the input path and its 1-based run index
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestInvocation {
    pub path: PathBuf,
    pub index: u32,
}

impl TestInvocation {
    pub fn new(path: impl Into<PathBuf>, index: u32) -> Self {
        Self {
            path: path.into(),
            index,
        }
    }

    /// Kind of the input file, if recognized
    pub fn kind(&self) -> Option<TestKind> {
        TestKind::from_path(&self.path)
    }

    /// Final path component of the input file
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Output basename, `test_<index>__<file name>`
    pub fn output_basename(&self) -> String {
        format!("test_{}__{}", self.index, self.file_name())
    }

    /// Directory the test runs from. Bare file names run from the current directory.
    pub fn working_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Path of the captured standard output
    pub fn stdout_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.out", self.output_basename()))
    }

    /// Path of the captured standard error
    pub fn stderr_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.err", self.output_basename()))
    }

    /// Path the notebook tool writes the executed notebook to
    pub fn notebook_output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.output_basename())
    }
}

impl fmt::Display for TestInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test {}: {}", self.index, self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(TestKind::from_path(Path::new("a.py")), Some(TestKind::Script));
        assert_eq!(
            TestKind::from_path(Path::new("dir/nb.ipynb")),
            Some(TestKind::Notebook)
        );
        assert_eq!(TestKind::from_path(Path::new("README.md")), None);
        assert_eq!(TestKind::from_path(Path::new("script")), None);
        assert_eq!(TestKind::from_path(Path::new("a.PY")), None);
        assert_eq!(TestKind::from_path(Path::new("py")), None);
    }

    #[test]
    fn test_kind_from_bare_suffix() {
        assert_eq!(TestKind::from_path(Path::new(".py")), Some(TestKind::Script));
        assert_eq!(
            TestKind::from_path(Path::new("x/.ipynb")),
            Some(TestKind::Notebook)
        );
    }

    #[test]
    fn test_output_basename() {
        let invocation = TestInvocation::new("docs/examples/1_Intro.ipynb", 3);
        assert_eq!(invocation.output_basename(), "test_3__1_Intro.ipynb");

        let out = invocation.stdout_path(Path::new("/tmp/results"));
        assert_eq!(out, PathBuf::from("/tmp/results/test_3__1_Intro.ipynb.out"));
        let err = invocation.stderr_path(Path::new("/tmp/results"));
        assert_eq!(err, PathBuf::from("/tmp/results/test_3__1_Intro.ipynb.err"));
        let nb = invocation.notebook_output_path(Path::new("/tmp/results"));
        assert_eq!(nb, PathBuf::from("/tmp/results/test_3__1_Intro.ipynb"));
    }

    #[test]
    fn test_working_dir() {
        assert_eq!(
            TestInvocation::new("tests/a.py", 1).working_dir(),
            Path::new("tests")
        );
        assert_eq!(TestInvocation::new("a.py", 1).working_dir(), Path::new("."));
    }
}
