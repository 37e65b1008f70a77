//! Opcode numbering and mnemonics.

use crate::prelude::*;

/// Numeric opcode of every instruction, in encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Opcode {
    /// `load <literal>`
    Load          = 1,
    /// `add`
    Add           = 2,
    /// `print`
    Print         = 3,
    /// `jmp <label>`
    Jmp           = 4,
    /// `jmpif <label>`
    JmpIf         = 5,
    /// `cmp`
    Cmp           = 6,
    /// `setupcatch <handler> <resume>`
    SetupCatch    = 7,
    /// `setupdefer <handler> <resume>`
    SetupDefer    = 8,
    /// `unwind`
    Unwind        = 9,
    /// `defercontinue`
    DeferContinue = 10,
    /// `throw`
    Throw         = 11,
    /// `call <label>`
    Call          = 12,
    /// `ret`
    Ret           = 13,
    /// `writelocal <slot>`
    WriteLocal    = 14,
    /// `loadlocal <slot>`
    LoadLocal     = 15,
    /// `getnumber`
    GetNumber     = 16,
    /// `exit`
    Exit          = 17,
    /// `abort`
    Abort         = 18,
    /// `dup`
    Dup           = 19,
}

impl Opcode {
    /// Every opcode in numeric order
    pub const ALL: [Self; 19] = [
        Self::Load,
        Self::Add,
        Self::Print,
        Self::Jmp,
        Self::JmpIf,
        Self::Cmp,
        Self::SetupCatch,
        Self::SetupDefer,
        Self::Unwind,
        Self::DeferContinue,
        Self::Throw,
        Self::Call,
        Self::Ret,
        Self::WriteLocal,
        Self::LoadLocal,
        Self::GetNumber,
        Self::Exit,
        Self::Abort,
        Self::Dup,
    ];

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Add => "add",
            Self::Print => "print",
            Self::Jmp => "jmp",
            Self::JmpIf => "jmpif",
            Self::Cmp => "cmp",
            Self::SetupCatch => "setupcatch",
            Self::SetupDefer => "setupdefer",
            Self::Unwind => "unwind",
            Self::DeferContinue => "defercontinue",
            Self::Throw => "throw",
            Self::Call => "call",
            Self::Ret => "ret",
            Self::WriteLocal => "writelocal",
            Self::LoadLocal => "loadlocal",
            Self::GetNumber => "getnumber",
            Self::Exit => "exit",
            Self::Abort => "abort",
            Self::Dup => "dup",
        }
    }

    /// Number of inline operands
    pub const fn operand_count(self) -> usize {
        match self {
            Self::SetupCatch | Self::SetupDefer => 2,
            Self::Load | Self::Jmp | Self::JmpIf | Self::Call | Self::WriteLocal | Self::LoadLocal => 1,
            _ => 0,
        }
    }

    /// Look up an opcode by mnemonic, ignoring ASCII case
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(mnemonic))
    }
}

impl TryFrom<u8> for Opcode {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| *op as u8 == byte)
            .ok_or(Error::parse_error(codes::UNKNOWN_MNEMONIC, "Unknown opcode"))
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_is_dense() {
        for (i, op) in Opcode::ALL.iter().enumerate() {
            assert_eq!(*op as usize, i + 1);
            assert_eq!(Opcode::try_from(*op as u8).unwrap(), *op);
        }
        assert!(Opcode::try_from(0).is_err());
        assert!(Opcode::try_from(20).is_err());
    }

    #[test]
    fn test_mnemonic_lookup_is_case_insensitive() {
        assert_eq!(Opcode::from_mnemonic("SetupCatch"), Some(Opcode::SetupCatch));
        assert_eq!(Opcode::from_mnemonic("DEFERCONTINUE"), Some(Opcode::DeferContinue));
        assert_eq!(Opcode::from_mnemonic("nop"), None);
    }

    #[test]
    fn test_operand_counts() {
        assert_eq!(Opcode::SetupDefer.operand_count(), 2);
        assert_eq!(Opcode::Call.operand_count(), 1);
        assert_eq!(Opcode::Ret.operand_count(), 0);
    }
}
