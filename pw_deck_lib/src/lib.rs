// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

pub mod batch;
pub mod entry;
pub mod export;
pub mod import;
pub mod sim_code;

pub use entry::*;
