use std::fmt;

/// Source location of a print call.
///
/// Built by the `hlog*!` macros from `file!()`, `line!()` and
/// `module_path!()`, or by the `log` bridge from the record metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
    pub module: &'a str,
}

impl<'a> CallSite<'a> {
    pub fn new(file: &'a str, line: u32, module: &'a str) -> Self {
        Self { file, line, module }
    }

    /// File name without its directories.
    pub fn file_name(&self) -> &'a str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }
}

impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}:{}]", self.file_name(), self.line, self.module)
    }
}
