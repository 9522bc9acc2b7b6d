//! Output sink shared by exporters.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

/// Cheap-clone handle to the writer exporters emit lines to.
///
/// Every exporter built for one run holds a clone of the same sink, so lines
/// land in registration order.
#[derive(Clone)]
pub struct OutputSink {
    writer: Rc<RefCell<Box<dyn Write>>>,
}

impl OutputSink {
    pub fn new(writer: impl Write + 'static) -> Self {
        let writer: Box<dyn Write> = Box::new(writer);
        Self { writer: Rc::new(RefCell::new(writer)) }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Create (or truncate) `path`, creating parent directories as needed.
    pub fn file(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed creating directory: {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed creating output file: {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// In-memory sink plus a handle for reading back what was written.
    pub fn buffer() -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Self::new(buffer.clone()), buffer)
    }

    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.borrow_mut();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")
    }

    pub fn flush(&self) -> io::Result<()> {
        self.writer.borrow_mut().flush()
    }
}

#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
