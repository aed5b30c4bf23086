//! Continuation-passing adapters for synchronous callables: convert a plain
//! function into one that reports its outcome through a trailing error-first
//! continuation, with optional receiver binding and partial application.

pub mod cps;
