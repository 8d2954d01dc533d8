use thiserror::Error;

/// Compile-time faults. Any of these aborts compilation before execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilerError {
    #[error("line {line}: unknown label `{label}`")]
    UnknownLabel { label: String, line: usize },
    #[error("line {line}: `exec` takes 3 or 4 operands, got {got}")]
    ExecArity { got: usize, line: usize },
    #[error("line {line}: unknown command `{name}`")]
    UnknownCommand { name: String, line: usize },
    #[error("line {line}: `{command}` takes {expected} operands, got {got}")]
    OperandCount {
        command: &'static str,
        expected: usize,
        got: usize,
        line: usize,
    },
    #[error("line {line}: `label` must be followed by exactly one name")]
    MalformedLabel { line: usize },
    #[error("line {line}: jump target must be a label name, found `{found}`")]
    InvalidTarget { found: String, line: usize },
    #[error("line {line}: unknown {arity} operator `{name}`")]
    UnknownOperator {
        name: String,
        arity: &'static str,
        line: usize,
    },
    #[error("line {line}: unrecognized operand `{found}`")]
    UnrecognizedOperand { found: String, line: usize },
}
