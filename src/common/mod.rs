//! Common utilities shared by the package reader and the deck writer.

pub mod xml;
