//! Label resolution.
//!
//! Two passes over the tokenized lines:
//! 1. [`extract_labels`] flattens lines into one element stream, records each
//!    `label` at the offset of the instruction that follows it, and expands
//!    `exec` into `exec_1` / `exec_2` by operand count.
//! 2. [`replace_labels`] rewrites `jump` / `branchif` targets into offsets.

use crate::element::{Element, Located};
use crate::error::CompilerError;
use mach_parser::{Line, Token};
use std::collections::HashMap;
use tracing::warn;
use vm::OpCode;

pub type LabelTable = HashMap<String, usize>;

#[derive(Debug, Clone, Default)]
pub struct Flattened {
    pub stream: Vec<Located>,
    pub labels: LabelTable,
}

pub fn extract_labels<I>(lines: I) -> Result<Flattened, CompilerError>
where
    I: IntoIterator<Item = Line>,
{
    let mut out = Flattened::default();

    for line in lines {
        let number = line.number;
        let Some(head) = line.head().map(str::to_string) else {
            let name = line.tokens.first().map(Token::to_string).unwrap_or_default();
            return Err(CompilerError::UnknownCommand { name, line: number });
        };

        let op = match head.as_str() {
            "label" => {
                let name = match line.tokens.as_slice() {
                    [_, Token::Symbol(name)] => name.clone(),
                    _ => return Err(CompilerError::MalformedLabel { line: number }),
                };
                let offset = out.stream.len();
                if let Some(prev) = out.labels.insert(name.clone(), offset) {
                    warn!(label = %name, prev, offset, line = number, "label redefined");
                }
                continue;
            }
            "exec" => match line.tokens.len() {
                4 => OpCode::Exec1,
                5 => OpCode::Exec2,
                n => {
                    return Err(CompilerError::ExecArity {
                        got: n - 1,
                        line: number,
                    })
                }
            },
            name => {
                let op = OpCode::from_name(name).ok_or_else(|| CompilerError::UnknownCommand {
                    name: name.to_string(),
                    line: number,
                })?;
                if line.tokens.len() != op.width() {
                    return Err(CompilerError::OperandCount {
                        command: op.name(),
                        expected: op.width() - 1,
                        got: line.tokens.len() - 1,
                        line: number,
                    });
                }
                op
            }
        };

        out.stream.push(Located::new(Element::Command(op), number));
        out.stream.extend(
            line.tokens
                .into_iter()
                .skip(1)
                .map(|tok| Located::new(Element::Token(tok), number)),
        );
    }

    Ok(out)
}

pub fn replace_labels(
    stream: Vec<Located>,
    labels: &LabelTable,
) -> Result<Vec<Located>, CompilerError> {
    let mut out = Vec::with_capacity(stream.len());
    let mut target_at = None;
    let mut remaining = 0usize;

    for (pos, item) in stream.into_iter().enumerate() {
        if remaining == 0 {
            let Element::Command(op) = item.element else {
                return Err(CompilerError::UnrecognizedOperand {
                    found: item.element.to_string(),
                    line: item.line,
                });
            };
            remaining = op.width();
            target_at = op.target_operand().map(|i| pos + i);
        } else if target_at == Some(pos) {
            out.push(resolve_target(item, labels)?);
            remaining -= 1;
            continue;
        }
        out.push(item);
        remaining -= 1;
    }

    Ok(out)
}

fn resolve_target(item: Located, labels: &LabelTable) -> Result<Located, CompilerError> {
    match &item.element {
        Element::Token(Token::Symbol(name)) => match labels.get(name) {
            Some(&offset) => Ok(Located::new(Element::LineOffset(offset), item.line)),
            None => Err(CompilerError::UnknownLabel {
                label: name.clone(),
                line: item.line,
            }),
        },
        other => Err(CompilerError::InvalidTarget {
            found: other.to_string(),
            line: item.line,
        }),
    }
}
