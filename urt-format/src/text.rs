//! Textual assembly format.
//!
//! One item per line: `.name` defines a label at the next instruction, any
//! other non-blank line is a mnemonic followed by its operands. A `;` starts
//! a comment outside string literals. Lines of a disassembly listing carry a
//! leading slot number, which the parser skips.

use core::fmt;

use urt_error::{codes, Error};
use urt_foundation::Value;
use urt_instructions::{
    ControlOp, Instruction, Label, Opcode, StackOp, VariableOp,
};

use crate::program::{Program, ProgramBuilder};

/// A parse failure with its 1-based source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// Line the failure was detected on
    pub line:  usize,
    /// The underlying fault
    pub error: Error,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        err.error
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Str(String),
}

const fn fault(code: u16, message: &'static str) -> Error {
    Error::parse_error(code, message)
}

fn tokenize(line: &str) -> Result<Vec<Token<'_>>, Error> {
    let mut tokens = Vec::new();
    let mut rest = line;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() || rest.starts_with(';') {
            return Ok(tokens);
        }
        if let Some(body) = rest.strip_prefix('"') {
            let mut literal = String::new();
            let mut chars = body.char_indices();
            let end = loop {
                match chars.next() {
                    None => return Err(fault(codes::UNTERMINATED_STRING, "String literal is not terminated")),
                    Some((i, '"')) => break i + 1,
                    Some((_, '\\')) => match chars.next() {
                        Some((_, 'n')) => literal.push('\n'),
                        Some((_, 't')) => literal.push('\t'),
                        Some((_, c @ ('"' | '\\'))) => literal.push(c),
                        Some(_) => return Err(fault(codes::INVALID_OPERAND, "Unknown escape sequence")),
                        None => return Err(fault(codes::UNTERMINATED_STRING, "String literal is not terminated")),
                    },
                    Some((_, c)) => literal.push(c),
                }
            };
            tokens.push(Token::Str(literal));
            rest = &body[end..];
        } else {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == ';' || c == '"')
                .unwrap_or(rest.len());
            tokens.push(Token::Word(&rest[..end]));
            rest = &rest[end..];
        }
    }
}

fn label_operand(token: &Token<'_>) -> Result<Label, Error> {
    match token {
        Token::Word(name) => Ok(Label::new(name)),
        Token::Str(_) => Err(fault(codes::INVALID_OPERAND, "Expected a label operand")),
    }
}

fn slot_operand(token: &Token<'_>) -> Result<u32, Error> {
    match token {
        Token::Word(word) => word
            .parse()
            .map_err(|_| fault(codes::INVALID_OPERAND, "Expected a local slot index")),
        Token::Str(_) => Err(fault(codes::INVALID_OPERAND, "Expected a local slot index")),
    }
}

fn literal_operand(token: &Token<'_>) -> Result<Value, Error> {
    match token {
        Token::Str(s) => Ok(Value::string(s)),
        Token::Word("true") => Ok(Value::Bool(true)),
        Token::Word("false") => Ok(Value::Bool(false)),
        Token::Word("null") => Ok(Value::Null),
        Token::Word(word) => word
            .parse()
            .map(Value::Number)
            .map_err(|_| fault(codes::INVALID_OPERAND, "Expected a number or string literal")),
    }
}

fn decode(opcode: Opcode, operands: &[Token<'_>]) -> Result<Instruction, Error> {
    let expected = opcode.operand_count();
    if operands.len() < expected {
        return Err(fault(codes::MISSING_OPERAND, "Instruction is missing an operand"));
    }
    if operands.len() > expected {
        return Err(fault(codes::UNEXPECTED_OPERAND, "Instruction has too many operands"));
    }
    if let Some(instruction) = Instruction::nullary(opcode) {
        return Ok(instruction);
    }
    let instruction = match (opcode, operands) {
        (Opcode::Load, [value]) => StackOp::Load(literal_operand(value)?).into(),
        (Opcode::Jmp, [target]) => ControlOp::Jump(label_operand(target)?).into(),
        (Opcode::JmpIf, [target]) => ControlOp::JumpIf(label_operand(target)?).into(),
        (Opcode::Call, [target]) => ControlOp::Call(label_operand(target)?).into(),
        (Opcode::WriteLocal, [slot]) => VariableOp::LocalSet(slot_operand(slot)?).into(),
        (Opcode::LoadLocal, [slot]) => VariableOp::LocalGet(slot_operand(slot)?).into(),
        (Opcode::SetupCatch, [handler, resume]) => ControlOp::SetupCatch {
            handler: label_operand(handler)?,
            resume:  label_operand(resume)?,
        }
        .into(),
        (Opcode::SetupDefer, [handler, resume]) => ControlOp::SetupDefer {
            handler: label_operand(handler)?,
            resume:  label_operand(resume)?,
        }
        .into(),
        _ => return Err(fault(codes::INVALID_OPERAND, "Operands do not match instruction")),
    };
    Ok(instruction)
}

fn parse_line(builder: &mut ProgramBuilder, line: &str) -> Result<(), Error> {
    let tokens = tokenize(line)?;
    let mut tokens = tokens.as_slice();

    // Disassembly listings prefix each instruction with its slot number
    if let [Token::Word(word), rest @ ..] = tokens {
        if !rest.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
            tokens = rest;
        }
    }

    match tokens {
        [] => Ok(()),
        [Token::Word(word), rest @ ..] if word.starts_with('.') => {
            if !rest.is_empty() {
                return Err(fault(codes::UNEXPECTED_OPERAND, "Unexpected text after label"));
            }
            builder.label(&word[1..])?;
            Ok(())
        }
        [Token::Word(mnemonic), operands @ ..] => {
            let opcode = Opcode::from_mnemonic(mnemonic)
                .ok_or(fault(codes::UNKNOWN_MNEMONIC, "Unknown instruction mnemonic"))?;
            builder.push(decode(opcode, operands)?);
            Ok(())
        }
        [Token::Str(_), ..] => Err(fault(codes::UNKNOWN_MNEMONIC, "Expected an instruction mnemonic")),
    }
}

/// Parse a `.urt` assembly source into a [`Program`]
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    let mut builder = ProgramBuilder::new();
    for (index, line) in source.lines().enumerate() {
        parse_line(&mut builder, line).map_err(|error| ParseError {
            line: index + 1,
            error,
        })?;
    }
    let program = builder.build();
    tracing::debug!(instructions = program.len(), "parsed program");
    Ok(program)
}
