//! Memory binding.
//!
//! Walks the label-resolved stream and turns every operand into a memory slot
//! index. Each distinct symbol gets one slot, shared by all its occurrences.
//! Each literal occurrence gets its own slot holding the literal's value;
//! literals are not interned. The operator name inside `exec_1` / `exec_2` is
//! looked up in the operator tables instead.

use crate::element::{Element, Located};
use crate::error::CompilerError;
use mach_parser::Token;
use memory::{Memory, Value};
use std::collections::HashMap;
use vm::{BinaryOp, OpCode, UnaryOp};

pub type SymbolTable = HashMap<String, usize>;

#[derive(Debug, Clone, Default)]
pub struct Bound {
    pub stream: Vec<Located>,
    pub memory: Memory,
    pub symbols: SymbolTable,
}

pub fn attach_to_memory(stream: Vec<Located>) -> Result<Bound, CompilerError> {
    let mut bound = Bound {
        stream: Vec::with_capacity(stream.len()),
        ..Bound::default()
    };
    let mut current = OpCode::End;
    let mut index = 0usize;

    for item in stream {
        if index == current.width() {
            index = 0;
        }
        let Located { element, line } = item;

        let element = if index == 0 {
            match element {
                Element::Command(op) => {
                    current = op;
                    Element::Command(op)
                }
                other => {
                    return Err(CompilerError::UnrecognizedOperand {
                        found: other.to_string(),
                        line,
                    })
                }
            }
        } else if current.target_operand() == Some(index) {
            match element {
                Element::LineOffset(offset) => Element::LineOffset(offset),
                other => {
                    return Err(CompilerError::InvalidTarget {
                        found: other.to_string(),
                        line,
                    })
                }
            }
        } else if current.operator_operand() == Some(index) {
            bind_operator(current, element, line)?
        } else {
            bind_operand(&mut bound, element, line)?
        };

        bound.stream.push(Located::new(element, line));
        index += 1;
    }

    Ok(bound)
}

fn bind_operator(op: OpCode, element: Element, line: usize) -> Result<Element, CompilerError> {
    let (id, arity) = match (&element, op) {
        (Element::Token(Token::Symbol(name)), OpCode::Exec1) => {
            (UnaryOp::from_name(name).map(UnaryOp::as_u32), "unary")
        }
        (Element::Token(Token::Symbol(name)), _) => {
            (BinaryOp::from_name(name).map(BinaryOp::as_u32), "binary")
        }
        (_, OpCode::Exec1) => (None, "unary"),
        _ => (None, "binary"),
    };
    id.map(Element::Operator)
        .ok_or_else(|| CompilerError::UnknownOperator {
            name: element.to_string(),
            arity,
            line,
        })
}

fn bind_operand(bound: &mut Bound, element: Element, line: usize) -> Result<Element, CompilerError> {
    let slot = match element {
        Element::Token(Token::Symbol(name)) => match bound.symbols.get(&name) {
            Some(&slot) => slot,
            None => {
                let slot = bound.memory.alloc(None);
                bound.symbols.insert(name, slot);
                slot
            }
        },
        Element::Token(Token::Integer(n)) => bound.memory.alloc(Some(Value::int(n))),
        Element::Token(Token::Float(x)) => bound.memory.alloc(Some(Value::float(x))),
        Element::Token(Token::Str(s)) => bound.memory.alloc(Some(Value::Str(s))),
        other => {
            return Err(CompilerError::UnrecognizedOperand {
                found: other.to_string(),
                line,
            })
        }
    };
    Ok(Element::Slot(slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{extract_labels, replace_labels};
    use mach_parser::Lexer;

    fn bind(source: &str) -> Result<Bound, CompilerError> {
        let flat = extract_labels(Lexer::new(source))?;
        let stream = replace_labels(flat.stream, &flat.labels)?;
        attach_to_memory(stream)
    }

    fn elements(bound: &Bound) -> Vec<Element> {
        bound.stream.iter().map(|l| l.element.clone()).collect()
    }

    #[test]
    fn test_symbols_share_a_slot() {
        let bound = bind("set x y\nset y x").unwrap();
        assert_eq!(bound.memory.len(), 2);
        assert_eq!(bound.symbols["x"], 0);
        assert_eq!(bound.symbols["y"], 1);
        assert_eq!(
            elements(&bound),
            vec![
                Element::Command(OpCode::Set),
                Element::Slot(0),
                Element::Slot(1),
                Element::Command(OpCode::Set),
                Element::Slot(1),
                Element::Slot(0),
            ]
        );
        assert_eq!(bound.memory.slot(0), Some(&None));
    }

    #[test]
    fn test_literals_are_not_interned() {
        let bound = bind("set a 5\nset b 5").unwrap();
        assert_eq!(bound.memory.len(), 4);
        assert_eq!(bound.memory.slot(1), Some(&Some(Value::int(5))));
        assert_eq!(bound.memory.slot(3), Some(&Some(Value::int(5))));
    }

    #[test]
    fn test_literal_kinds() {
        let bound = bind("display 2.5\ndisplay \"hi\"\ndisplay -4").unwrap();
        assert_eq!(
            bound.memory.slots(),
            &[
                Some(Value::float(2.5)),
                Some(Value::string("hi")),
                Some(Value::int(-4)),
            ]
        );
    }

    #[test]
    fn test_operator_binding() {
        let bound = bind("exec d hypot a b\nexec e int d").unwrap();
        let elems = elements(&bound);
        assert_eq!(elems[2], Element::Operator(BinaryOp::Hypot.as_u32()));
        assert_eq!(elems[7], Element::Operator(UnaryOp::Int.as_u32()));
        // d, a, b then e; `d` is reused by the second exec
        assert_eq!(bound.memory.len(), 4);
        assert_eq!(elems[8], Element::Slot(0));
    }

    #[test]
    fn test_operator_arity_is_checked() {
        assert_eq!(
            bind("exec d int a b").unwrap_err(),
            CompilerError::UnknownOperator {
                name: "int".into(),
                arity: "binary",
                line: 1
            }
        );
        assert!(matches!(
            bind("exec d add a"),
            Err(CompilerError::UnknownOperator { arity: "unary", .. })
        ));
        assert!(matches!(
            bind("exec d 3 a"),
            Err(CompilerError::UnknownOperator { .. })
        ));
    }

    #[test]
    fn test_jump_targets_are_left_alone() {
        let bound = bind("label top\njump top").unwrap();
        assert_eq!(elements(&bound)[1], Element::LineOffset(0));
        assert!(bound.memory.is_empty());
    }

    #[test]
    fn test_labels_do_not_become_variables() {
        let bound = bind("label loop\nbranchif loop loop").unwrap();
        // only the condition operand allocates
        assert_eq!(bound.memory.len(), 1);
        assert_eq!(bound.symbols.len(), 1);
    }
}
