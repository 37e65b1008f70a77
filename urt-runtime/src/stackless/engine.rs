//! Execution loop
//!
//! [`Engine`] fetches one instruction at a time from the program, executes
//! data operations against its own operand stack and the current frame, and
//! hands every control transfer to the [`UnwindEngine`]. Labels are resolved
//! when an instruction needs them; an undefined label is a fatal fault.

use tracing::trace;
use urt_format::Program;
use urt_host::HostIo;
use urt_instructions::{ControlContext, HostContext, PureExecutionContext, VariableContext};

use super::unwind::UnwindEngine;
use crate::prelude::*;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The program executed `exit` with this code
    Exited(i64),
}

/// Fetch-decode-execute driver for one program
#[derive(Debug)]
pub struct Engine<'p, H> {
    program:   &'p Program,
    host:      H,
    config:    EngineConfig,
    operands:  OperandStack,
    unwinder:  UnwindEngine,
    ip:        usize,
    next_ip:   Option<usize>,
    exit_code: Option<i64>,
    stats:     ExecutionStats,
}

impl<'p, H: HostIo> Engine<'p, H> {
    /// Create an engine positioned at the program's entry point
    pub fn new(program: &'p Program, host: H, config: EngineConfig) -> Self {
        Self {
            program,
            host,
            config,
            operands: OperandStack::new(config.max_operand_stack),
            unwinder: UnwindEngine::new(&config),
            ip: program.entry(),
            next_ip: None,
            exit_code: None,
            stats: ExecutionStats::default(),
        }
    }

    /// Run until the program exits or faults.
    ///
    /// On a fault the machine state is left as it was when the failing
    /// instruction started, apart from what that instruction already changed.
    pub fn run(&mut self) -> Result<ExecutionOutcome> {
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Execute one instruction
    pub fn step(&mut self) -> Result<Option<ExecutionOutcome>> {
        if let Some(code) = self.exit_code {
            return Ok(Some(ExecutionOutcome::Exited(code)));
        }
        self.consume_fuel()?;

        let program = self.program;
        let instruction = program.fetch(self.ip)?;
        trace!(ip = self.ip, op = instruction.mnemonic(), "dispatch");

        self.next_ip = None;
        if let Err(error) = instruction.execute(self) {
            tracing::warn!(ip = self.ip, op = instruction.mnemonic(), %error, "fault");
            return Err(error);
        }
        self.stats.instructions += 1;

        if let Some(code) = self.exit_code {
            return Ok(Some(ExecutionOutcome::Exited(code)));
        }
        self.ip = self.next_ip.take().unwrap_or(self.ip + 1);
        Ok(None)
    }

    fn consume_fuel(&mut self) -> Result<()> {
        if let Some(limit) = self.config.fuel {
            if self.stats.fuel_consumed >= limit {
                tracing::warn!(limit, "fuel exhausted");
                return Err(Error::FUEL_EXHAUSTED);
            }
        }
        self.stats.fuel_consumed += 1;
        Ok(())
    }

    fn transfer(&mut self, target: usize) {
        self.next_ip = Some(target);
    }

    /// Current instruction pointer
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// The operand stack
    pub fn operands(&self) -> &OperandStack {
        &self.operands
    }

    /// Call stack, block stack and unwind state
    pub fn unwinder(&self) -> &UnwindEngine {
        &self.unwinder
    }

    /// The host collaborator
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Consume the engine and give back the host
    pub fn into_host(self) -> H {
        self.host
    }

    /// Statistics for the run so far
    pub fn stats(&self) -> ExecutionStats {
        ExecutionStats {
            catches_taken: self.unwinder.catches_taken(),
            defers_entered: self.unwinder.defers_entered(),
            returns: self.unwinder.returns(),
            peak_call_depth: self.unwinder.call_stack().peak_depth(),
            peak_block_depth: self.unwinder.blocks().peak_depth(),
            ..self.stats
        }
    }
}

impl<H: HostIo> PureExecutionContext for Engine<'_, H> {
    fn push_value(&mut self, value: Value) -> Result<()> {
        self.operands.push(value)
    }

    fn pop_value(&mut self) -> Result<Value> {
        self.operands.pop()
    }

    fn dup_value(&mut self) -> Result<()> {
        self.operands.dup()
    }
}

impl<H: HostIo> VariableContext for Engine<'_, H> {
    fn get_local(&self, index: u32) -> Result<Value> {
        self.unwinder.current_frame()?.get_local(index)
    }

    fn set_local(&mut self, index: u32, value: Value) -> Result<()> {
        self.unwinder.current_frame_mut()?.set_local(index, value)
    }
}

impl<H: HostIo> ControlContext for Engine<'_, H> {
    fn jump(&mut self, target: &Label) -> Result<()> {
        let target = self.program.resolve(target)?;
        self.transfer(target);
        Ok(())
    }

    fn setup_block(&mut self, kind: BlockKind, handler: &Label, resume: &Label) -> Result<()> {
        let handler = self.program.resolve(handler)?;
        let resume = self.program.resolve(resume)?;
        self.unwinder.setup_block(kind, handler, resume)
    }

    fn scope_exit(&mut self) -> Result<()> {
        let target = self.unwinder.scope_exit()?;
        self.transfer(target);
        Ok(())
    }

    fn defer_continue(&mut self) -> Result<()> {
        let target = self.unwinder.defer_continue()?;
        self.transfer(target);
        Ok(())
    }

    fn throw_exception(&mut self) -> Result<()> {
        self.stats.exceptions_thrown += 1;
        let target = self.unwinder.throw()?;
        self.transfer(target);
        Ok(())
    }

    fn call_function(&mut self, target: &Label) -> Result<()> {
        let entry = self.program.resolve(target)?;
        let target = self.unwinder.call(entry, self.ip + 1)?;
        self.stats.calls += 1;
        self.transfer(target);
        Ok(())
    }

    fn return_function(&mut self) -> Result<()> {
        let target = self.unwinder.ret()?;
        self.transfer(target);
        Ok(())
    }
}

impl<H: HostIo> HostContext for Engine<'_, H> {
    fn print(&mut self, value: &Value) -> Result<()> {
        self.host.print(value)
    }

    fn read_number(&mut self) -> Result<i64> {
        self.host.read_number()
    }

    fn exit(&mut self, code: i64) -> Result<()> {
        tracing::debug!(code, "exit requested");
        self.exit_code = Some(code);
        Ok(())
    }

    fn abort(&mut self) -> Result<()> {
        Err(Error::ABORTED)
    }
}
