use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

use crate::lexer::{Tail, Value};

/// Number of stacks in a bank
pub const STACK_COUNT: usize = 26;

/// Total number of storages in a bank: the stacks, the queue and the pipe
pub const STORAGE_COUNT: usize = STACK_COUNT + 2;

/// Discipline of a storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StorageKind {
    /// Last in, first out
    Stack,
    /// First in, first out
    Queue,
    /// Last in, first out; addressed separately from the stacks
    Pipe,
}

/// A single stack, queue or pipe of integers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Storage {
    kind: StorageKind,
    /// Values in insertion order; the back is always the most recent push
    values: VecDeque<Value>,
}

impl Storage {
    /// Creates an empty storage of the given kind
    pub fn new(kind: StorageKind) -> Self {
        Storage {
            kind,
            values: VecDeque::new(),
        }
    }

    /// Discipline of this storage
    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    /// Inserts a value
    pub fn push(&mut self, value: Value) {
        self.values.push_back(value);
    }

    /// Removes the next value: the newest for stacks and the pipe, the oldest for the queue
    pub fn pop(&mut self) -> Option<Value> {
        match self.kind {
            StorageKind::Stack | StorageKind::Pipe => self.values.pop_back(),
            StorageKind::Queue => self.values.pop_front(),
        }
    }

    /// The value [`Storage::pop`] would return, without removing it
    pub fn peek(&self) -> Option<Value> {
        match self.kind {
            StorageKind::Stack | StorageKind::Pipe => self.values.back().copied(),
            StorageKind::Queue => self.values.front().copied(),
        }
    }

    /// Pops two values `(a, b)`, or nothing at all when fewer than two are held
    pub fn pop_pair(&mut self) -> Option<(Value, Value)> {
        if self.values.len() < 2 {
            return None;
        }
        let a = self.pop()?;
        let b = self.pop()?;
        Some((a, b))
    }

    /// Number of values held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is held
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Held values in the order successive pops would return them
    pub fn pop_order(&self) -> Vec<Value> {
        match self.kind {
            StorageKind::Stack | StorageKind::Pipe => self.values.iter().rev().copied().collect(),
            StorageKind::Queue => self.values.iter().copied().collect(),
        }
    }
}

/// Address of one storage inside a [`StorageBank`]
///
/// Only 26 stack ids exist, so an id always designates a real bank entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StorageId(u8);

impl StorageId {
    /// The queue, selected by ㅇ
    pub const QUEUE: StorageId = StorageId(STACK_COUNT as u8);
    /// The pipe, selected by ㅎ
    pub const PIPE: StorageId = StorageId(STACK_COUNT as u8 + 1);

    /// Stack number `n`, if it exists
    pub fn stack(n: usize) -> Option<Self> {
        (n < STACK_COUNT).then_some(StorageId(n as u8))
    }

    /// Storage addressed by a tail consonant
    pub fn from_tail(tail: Tail) -> Self {
        let stack = match tail {
            Tail::Ieung => return StorageId::QUEUE,
            Tail::Hieut => return StorageId::PIPE,
            Tail::None => 0,
            Tail::Giyeok => 1,
            Tail::Nieun => 2,
            Tail::Digeut => 3,
            Tail::Rieul => 4,
            Tail::Mieum => 5,
            Tail::Bieup => 6,
            Tail::Siot => 7,
            Tail::Jieut => 8,
            Tail::Chieut => 9,
            Tail::Kieuk => 10,
            Tail::Tieut => 11,
            Tail::Pieup => 12,
            Tail::SsangGiyeok => 13,
            Tail::GiyeokSiot => 14,
            Tail::NieunJieut => 15,
            Tail::NieunHieut => 16,
            Tail::RieulGiyeok => 17,
            Tail::RieulMieum => 18,
            Tail::RieulBieup => 19,
            Tail::RieulSiot => 20,
            Tail::RieulTieut => 21,
            Tail::RieulPieup => 22,
            Tail::RieulHieut => 23,
            Tail::BieupSiot => 24,
            Tail::SsangSiot => 25,
        };
        StorageId(stack)
    }

    /// Position within the bank
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Discipline of the addressed storage
    pub fn kind(self) -> StorageKind {
        match self {
            StorageId::QUEUE => StorageKind::Queue,
            StorageId::PIPE => StorageKind::Pipe,
            _ => StorageKind::Stack,
        }
    }
}

impl Default for StorageId {
    fn default() -> Self {
        StorageId(0)
    }
}

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            StorageKind::Stack => write!(f, "stack {}", self.0),
            StorageKind::Queue => write!(f, "queue"),
            StorageKind::Pipe => write!(f, "pipe"),
        }
    }
}

/// Every storage a machine can address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageBank {
    storages: Vec<Storage>,
}

impl StorageBank {
    /// Creates a bank of empty storages
    pub fn new() -> Self {
        let storages = (0..STORAGE_COUNT)
            .map(|i| Storage::new(StorageId(i as u8).kind()))
            .collect();
        StorageBank { storages }
    }

    /// Storage at `id`
    pub fn get(&self, id: StorageId) -> &Storage {
        &self.storages[id.index()]
    }

    /// Mutable storage at `id`
    pub fn get_mut(&mut self, id: StorageId) -> &mut Storage {
        &mut self.storages[id.index()]
    }

    /// Iterates all storages with their ids
    pub fn iter(&self) -> impl Iterator<Item = (StorageId, &Storage)> {
        self.storages
            .iter()
            .enumerate()
            .map(|(i, storage)| (StorageId(i as u8), storage))
    }

    /// Total number of held values across the bank
    pub fn total_len(&self) -> usize {
        self.storages.iter().map(Storage::len).sum()
    }
}

impl Default for StorageBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Storage::new(StorageKind::Stack);
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.peek(), Some(3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = Storage::new(StorageKind::Queue);
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.peek(), Some(1));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_pipe_is_lifo() {
        let mut pipe = Storage::new(StorageKind::Pipe);
        pipe.push(7);
        pipe.push(8);
        assert_eq!(pipe.pop_order(), vec![8, 7]);
    }

    #[test]
    fn test_empty_pop_is_harmless() {
        let mut stack = Storage::new(StorageKind::Stack);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_pair_is_all_or_nothing() {
        let mut stack = Storage::new(StorageKind::Stack);
        stack.push(5);
        assert_eq!(stack.pop_pair(), None);
        assert_eq!(stack.pop_order(), vec![5]);

        stack.push(2);
        assert_eq!(stack.pop_pair(), Some((2, 5)));
        assert!(stack.is_empty());

        let mut queue = Storage::new(StorageKind::Queue);
        queue.push(5);
        queue.push(2);
        assert_eq!(queue.pop_pair(), Some((5, 2)));
    }

    #[test]
    fn test_tail_addressing() {
        assert_eq!(StorageId::from_tail(Tail::None), StorageId::stack(0).unwrap());
        assert_eq!(StorageId::from_tail(Tail::Giyeok).index(), 1);
        assert_eq!(StorageId::from_tail(Tail::Pieup).index(), 12);
        assert_eq!(StorageId::from_tail(Tail::SsangGiyeok).index(), 13);
        assert_eq!(StorageId::from_tail(Tail::SsangSiot).index(), 25);
        assert_eq!(StorageId::from_tail(Tail::Ieung), StorageId::QUEUE);
        assert_eq!(StorageId::from_tail(Tail::Hieut), StorageId::PIPE);
        assert_eq!(StorageId::stack(26), None);
    }

    #[test]
    fn test_every_tail_has_its_own_storage() {
        let mut seen: Vec<usize> = Tail::ALL
            .iter()
            .map(|tail| StorageId::from_tail(*tail).index())
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), STORAGE_COUNT);
    }

    #[test]
    fn test_bank_layout() {
        let bank = StorageBank::new();
        assert_eq!(bank.iter().count(), STORAGE_COUNT);
        assert_eq!(bank.get(StorageId::QUEUE).kind(), StorageKind::Queue);
        assert_eq!(bank.get(StorageId::PIPE).kind(), StorageKind::Pipe);
        assert_eq!(bank.get(StorageId::default()).kind(), StorageKind::Stack);
        assert_eq!(bank.total_len(), 0);
        assert_eq!(StorageId::PIPE.to_string(), "pipe");
        assert_eq!(StorageId::stack(3).unwrap().to_string(), "stack 3");
    }
}
