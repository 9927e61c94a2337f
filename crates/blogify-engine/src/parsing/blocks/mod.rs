//! # Block Tokenizing
//!
//! Line-oriented tokenizing of flattened markup into [`RawNode`]s.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): a line read while no block is open
//!    becomes a `LineClass` (blank, comment, block opener, heading, command, text).
//! 2. **Block Construction** (`builder`): `RawNodeBuilder` is the `Idle` /
//!    `InBlock` state machine that captures multi-line blocks verbatim.
//!
//! ## Modules
//!
//! - **`types`**: `RawNode`, `BlockKind`
//! - **`kinds`**: delimiter knowledge per construct (environments, brace
//!   commands, discard comments, headings, comments, inline span commands)
//! - **`open`**: `try_open_block` dispatch for block openers
//!
//! ## Key Invariants
//!
//! - Blocks never nest: once open, lines are content until the end marker
//! - Node order is source order

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::RawNodeBuilder;
pub use classify::{LatexLineClassifier, LineClass, LineKind};
pub use types::{BlockKind, RawNode};
