//! Cell transition rules.
//!
//! - `conditions`: The four classical predicates as pure functions
//! - `engine`: The `Rules` trait the evolution engine is generic over, and
//!   `ClassicRules`, which applies the predicates in their fixed order

pub mod conditions;
pub mod engine;

pub use conditions::{
    count_living, evolves_to_next_generation, is_overpopulated, is_underpopulated,
    should_become_alive,
};
pub use engine::{ClassicRules, Rules};
