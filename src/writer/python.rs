//! Assemble and write the generated Python program.

use crate::model::{Record, Translation};
use crate::processor::codegen::{CLS_HELPER, comment_text};
use std::fs;
use std::io;
use std::path::Path;

/// Append-only output buffer. `new` seeds it with the preamble, `push` adds
/// records in order, `finish` hands the text over and ends its life.
pub struct Assembler {
    buf: String,
}

impl Assembler {
    pub fn new(source: &str) -> Self {
        let mut buf = String::new();
        buf.push_str(&format!(
            "# Converted from {source} using {} V{}\n\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        buf.push_str("# Required for CLS equivalent\nimport os\n\n\n");
        buf.push_str(&format!(
            "def {CLS_HELPER}():\n    os.system('cls' if os.name == 'nt' else 'clear')\n\n\n"
        ));
        Self { buf }
    }

    pub fn push(&mut self, record: &Record) {
        self.buf.push_str("# ");
        self.buf.push_str(&comment_text(&record.comment));
        self.buf.push('\n');
        for line in &record.code {
            self.buf.push_str(line);
            self.buf.push('\n');
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Full program text for `translation`.
pub fn render(translation: &Translation, source: &str) -> String {
    let mut asm = Assembler::new(source);
    for record in &translation.records {
        asm.push(record);
    }
    asm.finish()
}

/// Render and write to `out_path`; returns what was written.
pub fn emit(translation: &Translation, source: &str, out_path: &Path) -> io::Result<String> {
    let program = render(translation, source);
    fs::write(out_path, &program)?;
    Ok(program)
}
