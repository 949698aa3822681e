//! Where raw records come from.
//!
//! Decoding storage into a generic JSON tree is the caller's business; a
//! `CardSource` only has to hand over the records in source order.

use std::io::Read;

use serde_json::Value;

use crate::error::{Error, Result};

/// Supplier of raw card records.
pub trait CardSource {
    fn into_records(self) -> Result<Vec<Value>>;
}

impl CardSource for Vec<Value> {
    fn into_records(self) -> Result<Vec<Value>> {
        Ok(self)
    }
}

/// JSON document holding either an array of records or an object keyed by
/// card name.
#[derive(Debug)]
pub struct JsonCardSource<R> {
    reader: R,
}

impl<R: Read> JsonCardSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<'a> JsonCardSource<&'a [u8]> {
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<R: Read> CardSource for JsonCardSource<R> {
    fn into_records(self) -> Result<Vec<Value>> {
        let tree: Value = serde_json::from_reader(self.reader)?;
        records_from_tree(tree)
    }
}

/// Flatten a decoded document into records, keeping document order.
pub fn records_from_tree(tree: Value) -> Result<Vec<Value>> {
    match tree {
        Value::Array(records) => Ok(records),
        Value::Object(by_name) => Ok(by_name.into_iter().map(|(_, record)| record).collect()),
        _ => Err(Error::InvalidRecord { position: 0 }),
    }
}
