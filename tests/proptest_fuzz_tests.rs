//! Property-based tests for the decoder, codespace builder, storages and machine
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Decoding is total and recomposes every syllable exactly
//! 2. Building a codespace never panics and keeps one cell per character
//! 3. Storages honour their discipline and never change on failed pops
//! 4. Stepping arbitrary grids never panics

use aheui::lexer::{decode, SYLLABLE_BASE, SYLLABLE_COUNT};
use aheui::{CodespaceBuilder, Machine, Storage, StorageKind};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Any precomposed Hangul syllable
fn syllable_char() -> impl Strategy<Value = char> {
    (SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).prop_map(|code| char::from_u32(code).unwrap())
}

/// Grid-ish source text: mostly syllables, some noise, some line breaks
fn source_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            8 => syllable_char(),
            1 => Just('\n'),
            1 => prop::char::range(' ', '~'),
        ],
        0..200,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

// =============================================================================
// DECODER PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_decode_recomposes(c in syllable_char()) {
        let syllable = decode(c).syllable();
        prop_assert!(syllable.is_some());
        prop_assert_eq!(syllable.unwrap().to_char(), c);
    }

    #[test]
    fn prop_decode_outside_block_is_blank(c in any::<char>()) {
        let code = c as u32;
        prop_assume!(!(SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).contains(&code));
        prop_assert!(!decode(c).is_complete());
    }
}

// =============================================================================
// CODESPACE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_one_cell_per_character(rows in prop::collection::vec("[가-힣a-z]{1,20}", 1..10)) {
        let source = rows.join("\n");
        let codespace = CodespaceBuilder::new().build(&source);
        prop_assert_eq!(codespace.height(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            prop_assert_eq!(codespace.row_len(y), row.chars().count());
        }
    }

    #[test]
    fn prop_build_never_panics(source in source_like_string()) {
        let codespace = CodespaceBuilder::new().build(&source);
        prop_assert!(codespace.height() >= 1);
        prop_assert!(codespace.instruction_count() <= source.chars().count());
    }
}

// =============================================================================
// STORAGE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_stack_is_lifo(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let mut stack = Storage::new(StorageKind::Stack);
        for v in &values {
            stack.push(*v);
        }
        let popped: Vec<i64> = std::iter::from_fn(|| stack.pop()).collect();
        let expected: Vec<i64> = values.iter().rev().copied().collect();
        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn prop_queue_is_fifo(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let mut queue = Storage::new(StorageKind::Queue);
        for v in &values {
            queue.push(*v);
        }
        let popped: Vec<i64> = std::iter::from_fn(|| queue.pop()).collect();
        prop_assert_eq!(popped, values);
    }

    #[test]
    fn prop_failed_pair_pop_is_untouched(value in any::<i64>(), kind in prop_oneof![
        Just(StorageKind::Stack),
        Just(StorageKind::Queue),
        Just(StorageKind::Pipe),
    ]) {
        let mut storage = Storage::new(kind);
        storage.push(value);
        let before = storage.clone();
        prop_assert_eq!(storage.pop_pair(), None);
        prop_assert_eq!(storage, before);
    }
}

// =============================================================================
// MACHINE PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_stepping_never_panics(source in source_like_string(), input in "[0-9a-z \n]{0,20}") {
        let codespace = CodespaceBuilder::new().build(&source);
        let mut machine = Machine::with_io(codespace, input.as_bytes(), Vec::new());
        for _ in 0..500 {
            // division by zero is the only error a well-formed run can raise
            if machine.step().is_err() || machine.is_terminated() {
                break;
            }
        }
    }
}
