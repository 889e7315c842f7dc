#![no_std]

//! # Literal Core
//!
//! Integer literal engine shared by the popup service and its hosts.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Immutable values**: Every edit builds a new literal, nothing mutates in place
//! - **Round-trip fidelity**: Suffix, width, prefix case and digit grouping survive re-serialization
//! - **Explicit grammar**: A hand-written lexer, no regex engine
//!
//! ## Design
//!
//! The core provides:
//! - NumericLiteral: magnitude plus everything needed to write it back as source
//! - parse: text to literal, or NotANumber
//! - format_literal: literal to source text in any supported base
//! - Transforms: bit toggle, byte-order swap, base conversion

extern crate alloc;

pub mod base;
pub mod error;
pub mod format;
pub mod lexer;
pub mod literal;
pub mod transform;

pub use base::{Base, WordSize};
pub use error::LiteralError;
pub use format::{format_literal, group_digits, render_digits};
pub use lexer::parse;
pub use literal::{Grouping, LiteralStyle, NumericLiteral};

pub use num_bigint::BigUint;
