//! Auxiliary output files.
//!
//! For an input `src/prog.asm` and output root `output`, the following
//! files are created (and truncated):
//!
//! ```text
//! output/prog/logs.txt
//! output/prog/tabsim.txt
//! output/prog/prog.lst
//! output/prog/prog.o
//! ```
//!
//! Only the logs file is written by the scanner. The others are placeholders
//! for the symbol table, listing and object code of later passes.
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_ROOT: &str = "output";

#[derive(Debug)]
pub struct OutputSinks {
    dir:    PathBuf,
    logs:   File,
    tabsim: File,
    lst:    File,
    obj:    File,
}

impl OutputSinks {
    /// Creates `<root>/<basename>/` and the auxiliary files inside it.
    pub fn create(root: &Path, input: &Path) -> io::Result<Self> {
        let base = base_name(input);
        let dir = root.join(&base);
        fs::create_dir_all(&dir)?;

        let logs   = create_file(&dir.join("logs.txt"))?;
        let tabsim = create_file(&dir.join("tabsim.txt"))?;
        let lst    = create_file(&dir.join(format!("{}.lst", base)))?;
        let obj    = create_file(&dir.join(format!("{}.o", base)))?;

        Ok(OutputSinks { dir, logs, tabsim, lst, obj })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn logs(&mut self) -> &mut File {
        &mut self.logs
    }

    /// Flushes every sink. The files themselves are closed on drop.
    pub fn flush(&mut self) -> io::Result<()> {
        self.logs.flush()?;
        self.tabsim.flush()?;
        self.lst.flush()?;
        self.obj.flush()
    }
}

fn create_file(path: &Path) -> io::Result<File> {
    let file = File::create(path)?;
    info!("Created {} file", path.display());
    Ok(file)
}

/// The input file name with its directory and every extension removed.
pub fn base_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.find('.') {
        Some(0) | None => name,
        Some(idx) => name[..idx].to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("prog.asm")), "prog");
        assert_eq!(base_name(Path::new("dir/sub/prog.asm")), "prog");
        assert_eq!(base_name(Path::new("./dir.d/prog.test.asm")), "prog");
        assert_eq!(base_name(Path::new("prog")), "prog");
        assert_eq!(base_name(Path::new(".hidden")), ".hidden");
    }

    #[test]
    fn test_create_sinks() {
        let root = tempfile::tempdir().unwrap();
        let mut sinks = OutputSinks::create(root.path(), Path::new("src/prog.asm")).unwrap();

        let dir = root.path().join("prog");
        assert_eq!(sinks.dir(), dir.as_path());
        for name in &["logs.txt", "tabsim.txt", "prog.lst", "prog.o"] {
            assert!(dir.join(name).is_file(), "missing {}", name);
        }

        writeln!(sinks.logs(), "hello").unwrap();
        sinks.flush().unwrap();
        drop(sinks);
        assert_eq!(fs::read_to_string(dir.join("logs.txt")).unwrap(), "hello\n");
    }

    #[test]
    fn test_create_sinks_truncates() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("prog");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("logs.txt"), "stale").unwrap();

        OutputSinks::create(root.path(), Path::new("prog.asm")).unwrap();
        assert_eq!(fs::read_to_string(dir.join("logs.txt")).unwrap(), "");
    }

    #[test]
    fn test_create_sinks_fails_on_file_root() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert!(OutputSinks::create(&blocker, Path::new("prog.asm")).is_err());
    }
}
