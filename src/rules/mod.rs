//! Match rules: Set validity, completion and search.

pub mod matching;

pub use matching::{
    all_same_or_all_different, conflicts, find_sets, first_set, is_set, third_card, Conflicts,
};
