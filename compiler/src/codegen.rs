use crate::binder::{attach_to_memory, SymbolTable};
use crate::element::Located;
use crate::error::CompilerError;
use crate::labels::{extract_labels, replace_labels, LabelTable};
use mach_parser::Lexer;
use tracing::debug;
use vm::Program;

/// Compilation driver.
///
/// Runs the passes in order (lex, label extraction, label replacement, memory
/// binding, flattening) and keeps the label and symbol tables of the last
/// successful compile for inspection.
#[derive(Debug, Default)]
pub struct Compiler {
    pub labels: LabelTable,
    pub symbols: SymbolTable,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compile(&mut self, source: &str) -> Result<Program, CompilerError> {
        let flat = extract_labels(Lexer::new(source))?;
        debug!(
            elements = flat.stream.len(),
            labels = flat.labels.len(),
            "labels extracted"
        );

        let stream = replace_labels(flat.stream, &flat.labels)?;
        let bound = attach_to_memory(stream)?;
        debug!(
            slots = bound.memory.len(),
            symbols = bound.symbols.len(),
            "memory bound"
        );

        let code = flatten(&bound.stream)?;
        debug!(code_len = code.len(), "compiled");

        self.labels = flat.labels;
        self.symbols = bound.symbols;
        Ok(Program::new(code, bound.memory))
    }

    /// Variable names indexed by slot; literal slots are `None`.
    pub fn slot_names(&self, slot_count: usize) -> Vec<Option<&str>> {
        let mut names = vec![None; slot_count];
        for (name, &slot) in &self.symbols {
            if let Some(entry) = names.get_mut(slot) {
                *entry = Some(name.as_str());
            }
        }
        names
    }
}

/// Compile source text into a program, discarding the symbol tables.
pub fn compile(source: &str) -> Result<Program, CompilerError> {
    Compiler::new().compile(source)
}

fn flatten(stream: &[Located]) -> Result<Vec<u32>, CompilerError> {
    stream
        .iter()
        .map(|item| {
            item.element
                .code_word()
                .ok_or_else(|| CompilerError::UnrecognizedOperand {
                    found: item.element.to_string(),
                    line: item.line,
                })
        })
        .collect()
}
