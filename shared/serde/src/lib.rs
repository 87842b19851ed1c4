//! # Tufia Serde
//! Fixed-layout, little-endian byte serialization for ledger account records.
//!
//! Every record is a flat sequence of fixed-width fields. The only variable
//! length value is a string, written as a `u32` byte count followed by the
//! UTF-8 bytes.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod array;
mod byte_reader;
mod byte_writer;
mod error;
mod integer;
mod serde;
mod string;

pub use byte_reader::ByteReader;
pub use byte_writer::ByteWriter;
pub use error::SerdeErr;
pub use serde::{ConstByteLength, Serde};
