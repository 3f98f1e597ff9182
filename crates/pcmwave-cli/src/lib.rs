//! pcmwave CLI library.
//!
//! Sample sources (tone synthesis, JSON sample files) that feed the
//! `pcmwave` encoder.

pub mod commands;
