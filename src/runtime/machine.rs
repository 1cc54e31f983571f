use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, trace, warn};

use super::cursor::Cursor;
use super::io::{read_character, read_integer, write_character, write_integer};
use super::storage::{Storage, StorageBank, StorageId};
use crate::error::{Error, Result};
use crate::lexer::{Cell, Lead, Syllable, Tail, Value};
use crate::parser::{Codespace, CodespaceBuilder};

/// What the cursor does after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Keep the vowel's velocity
    Next,
    /// Reverse the velocity: operand underflow or a taken branch
    Bounce,
    /// Stop without moving
    Halt,
}

/// Aheui virtual machine
///
/// Owns the storage bank and the cursor, reads the codespace, and talks to
/// the outside world only through `input` and `output`:
/// - `step()` executes one cell
/// - `run()` steps until a `ㅎ` instruction terminates the program
pub struct Machine<I = StdinLock<'static>, O = Stdout> {
    codespace: Codespace,
    storages: StorageBank,
    /// Storage the operations implicitly act on
    active: StorageId,
    cursor: Cursor,
    terminated: bool,
    exit_value: Value,
    steps: u64,
    input: I,
    output: O,
}

impl Machine {
    /// Creates a machine wired to the process's standard streams
    pub fn new(codespace: Codespace) -> Self {
        Machine::with_io(codespace, io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> Machine<I, O> {
    /// Creates a machine with custom input and output
    pub fn with_io(codespace: Codespace, input: I, output: O) -> Self {
        Machine {
            codespace,
            storages: StorageBank::new(),
            active: StorageId::default(),
            cursor: Cursor::default(),
            terminated: false,
            exit_value: 0,
            steps: 0,
            input,
            output,
        }
    }

    /// Builds the codespace from `source` with default options
    pub fn from_source(source: &str, input: I, output: O) -> Self {
        Machine::with_io(CodespaceBuilder::new().build(source), input, output)
    }

    /// Steps until the program terminates and returns its exit value.
    ///
    /// A program that never reaches `ㅎ` never returns.
    pub fn run(&mut self) -> Result<Value> {
        while !self.terminated {
            self.step()?;
        }
        debug!(
            steps = self.steps,
            exit_value = self.exit_value,
            "program terminated"
        );
        Ok(self.exit_value)
    }

    /// Executes the cell under the cursor and moves on.
    ///
    /// Does nothing once the machine has terminated.
    pub fn step(&mut self) -> Result<()> {
        if self.terminated {
            return Ok(());
        }
        self.steps += 1;

        let (x, y) = self.cursor.position();
        let syllable = match self.codespace.get(x, y) {
            Cell::Syllable(syllable) => syllable,
            Cell::Blank => {
                self.advance();
                return Ok(());
            }
        };

        self.cursor.steer(syllable.vowel.heading());
        trace!(x, y, instruction = %syllable, active = %self.active, "step");

        match self.execute(syllable)? {
            Flow::Next => {}
            Flow::Bounce => self.cursor.reverse(),
            Flow::Halt => return Ok(()),
        }
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.cursor
            .advance(self.codespace.width(), self.codespace.height());
    }

    fn active_mut(&mut self) -> &mut Storage {
        self.storages.get_mut(self.active)
    }

    fn execute(&mut self, syllable: Syllable) -> Result<Flow> {
        let tail = syllable.tail;
        let flow = match syllable.lead {
            Lead::Ieung | Lead::Giyeok | Lead::SsangGiyeok | Lead::SsangJieut | Lead::Kieuk => {
                Flow::Next
            }
            Lead::Hieut => {
                self.terminated = true;
                self.exit_value = self.active_mut().pop().unwrap_or(0);
                Flow::Halt
            }
            Lead::Digeut => self.binary(|a, b| Ok(b.wrapping_add(a)))?,
            Lead::SsangDigeut => self.binary(|a, b| Ok(b.wrapping_mul(a)))?,
            Lead::Tieut => self.binary(|a, b| Ok(b.wrapping_sub(a)))?,
            Lead::Nieun => {
                let (x, y) = self.cursor.position();
                self.binary(|a, b| checked(b, a, x, y).map(|_| b.wrapping_div(a)))?
            }
            Lead::Rieul => {
                let (x, y) = self.cursor.position();
                self.binary(|a, b| checked(b, a, x, y).map(|_| b.wrapping_rem(a)))?
            }
            Lead::Jieut => self.binary(|a, b| Ok(Value::from(b > a)))?,
            Lead::Mieum => match self.active_mut().pop() {
                Some(value) => {
                    match tail {
                        Tail::Ieung => write_integer(&mut self.output, value)?,
                        Tail::Hieut => write_character(&mut self.output, value)?,
                        _ => {}
                    }
                    Flow::Next
                }
                None => Flow::Bounce,
            },
            Lead::Bieup => {
                let value = match tail {
                    Tail::Ieung => read_integer(&mut self.input)?,
                    Tail::Hieut => read_character(&mut self.input)?,
                    _ => tail.stroke_count(),
                };
                self.active_mut().push(value);
                Flow::Next
            }
            Lead::SsangBieup => {
                let storage = self.active_mut();
                match storage.peek() {
                    Some(value) => {
                        storage.push(value);
                        Flow::Next
                    }
                    None => Flow::Bounce,
                }
            }
            Lead::Pieup => {
                let storage = self.active_mut();
                match storage.pop_pair() {
                    Some((a, b)) => {
                        storage.push(a);
                        storage.push(b);
                        Flow::Next
                    }
                    None => Flow::Bounce,
                }
            }
            Lead::Siot => {
                self.active = StorageId::from_tail(tail);
                Flow::Next
            }
            Lead::SsangSiot => match self.active_mut().pop() {
                Some(value) => {
                    self.storages.get_mut(StorageId::from_tail(tail)).push(value);
                    Flow::Next
                }
                None => Flow::Bounce,
            },
            Lead::Chieut => match self.active_mut().pop() {
                Some(0) => Flow::Bounce,
                Some(_) => Flow::Next,
                None => Flow::Bounce,
            },
        };
        Ok(flow)
    }

    /// Pops `a` then `b` and pushes `op(a, b)`; bounces when either is missing
    fn binary(&mut self, op: impl FnOnce(Value, Value) -> Result<Value>) -> Result<Flow> {
        let storage = self.active_mut();
        let Some((a, b)) = storage.pop_pair() else {
            return Ok(Flow::Bounce);
        };
        storage.push(op(a, b)?);
        Ok(Flow::Next)
    }

    /// True once a `ㅎ` instruction has executed
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Value captured by `ㅎ`; 0 before termination
    pub fn exit_value(&self) -> Value {
        self.exit_value
    }

    /// Number of steps executed, blank cells included
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Instruction pointer
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Storage bank
    pub fn storages(&self) -> &StorageBank {
        &self.storages
    }

    /// Currently selected storage
    pub fn active_storage(&self) -> StorageId {
        self.active
    }

    /// Program grid
    pub fn codespace(&self) -> &Codespace {
        &self.codespace
    }

    /// Consumes the machine, handing back its streams
    pub fn into_io(self) -> (I, O) {
        (self.input, self.output)
    }
}

fn checked(dividend: Value, divisor: Value, x: Value, y: Value) -> Result<()> {
    if divisor == 0 {
        warn!(x, y, dividend, "division by zero");
        return Err(Error::DivisionByZero { x, y });
    }
    Ok(())
}
