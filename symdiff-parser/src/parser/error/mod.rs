//! Errors produced while parsing.
//!
//! All parse errors are [`Error`]s from `symdiff_error`, carrying one of the kinds in [`kind`].
//! Use [`Error::downcast_kind`] or [`Error::is`] to tell the kinds apart.

pub mod kind;

pub use symdiff_error::Error;
