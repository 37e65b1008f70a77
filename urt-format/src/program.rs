//! Program store.

use std::collections::HashMap;
use core::fmt;

use urt_error::{codes, Error, Result};
use urt_instructions::{Instruction, Label};

/// Name of the label where execution starts, if defined
pub const ENTRY_LABEL: &str = "main";

/// An addressable, immutable sequence of instructions with named positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    labels:       HashMap<Label, usize>,
}

impl Program {
    /// Start building a program
    pub fn builder() -> ProgramBuilder {
        ProgramBuilder::new()
    }

    /// Number of instruction slots
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All instructions in slot order
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Read the instruction at `ip`.
    ///
    /// Running off the end of the program is a fatal fault.
    pub fn fetch(&self, ip: usize) -> Result<&Instruction> {
        self.instructions.get(ip).ok_or(Error::instruction_out_of_bounds(
            "Instruction pointer outside program",
        ))
    }

    /// Map a label to its instruction offset
    pub fn resolve(&self, label: &Label) -> Result<usize> {
        self.offset_of(label.name())
            .ok_or(Error::unresolved_label("Label is not defined"))
    }

    /// Offset of a label by name
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    /// Offset where execution starts: the `main` label, or slot 0
    pub fn entry(&self) -> usize {
        self.offset_of(ENTRY_LABEL).unwrap_or(0)
    }

    /// Labels sorted by offset, then by name
    pub fn labels(&self) -> Vec<(&Label, usize)> {
        let mut labels: Vec<_> = self.labels.iter().map(|(l, o)| (l, *o)).collect();
        labels.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        labels
    }

    /// Resolve every label operand eagerly.
    ///
    /// Returns the offset of the first instruction referencing an undefined
    /// label together with the fault.
    pub fn verify(&self) -> core::result::Result<(), (usize, Error)> {
        for (offset, instruction) in self.instructions.iter().enumerate() {
            for label in instruction.labels() {
                if let Err(error) = self.resolve(label) {
                    tracing::warn!(offset, label = %label, "unresolved label");
                    return Err((offset, error));
                }
            }
        }
        tracing::debug!(
            instructions = self.instructions.len(),
            labels = self.labels.len(),
            "program verified"
        );
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        let mut pending = labels.iter().peekable();
        for (offset, instruction) in self.instructions.iter().enumerate() {
            while let Some((label, _)) = pending.next_if(|(_, at)| *at <= offset) {
                writeln!(f, ".{label}")?;
            }
            writeln!(f, "{offset:04}  {instruction}")?;
        }
        for (label, _) in pending {
            writeln!(f, ".{label}")?;
        }
        Ok(())
    }
}

/// Incremental [`Program`] construction
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    program: Program,
}

impl ProgramBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a label at the next instruction slot
    pub fn label(&mut self, name: impl AsRef<str>) -> Result<&mut Self> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(Error::parse_error(codes::EMPTY_LABEL, "Label name is empty"));
        }
        if self.program.labels.contains_key(name) {
            return Err(urt_error::duplicate_label_error("Label defined more than once"));
        }
        let offset = self.program.instructions.len();
        self.program.labels.insert(Label::new(name), offset);
        Ok(self)
    }

    /// Append one instruction
    pub fn push(&mut self, instruction: impl Into<Instruction>) -> &mut Self {
        self.program.instructions.push(instruction.into());
        self
    }

    /// Finish the program
    pub fn build(&mut self) -> Program {
        core::mem::take(&mut self.program)
    }
}
