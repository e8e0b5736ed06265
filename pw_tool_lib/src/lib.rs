// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

pub mod codec;
pub mod color;
pub mod diff;
pub mod flood;
pub mod fuzzy;
pub mod lines;
pub mod odds;
pub mod stats;
pub mod token;

pub use diff::*;
pub use stats::*;
pub use token::*;
