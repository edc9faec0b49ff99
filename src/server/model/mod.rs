//! Database model aliases and catalog entity kinds.

pub mod db;
/// Entity kinds named in catalog errors.
pub mod kind;
