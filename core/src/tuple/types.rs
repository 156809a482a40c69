//! tuple/types.rs
//! `Tuple` contract plus the element writer/reader handed to generated code.

use serde_json::Value;

use crate::codec::Codec;
use crate::types::{CodecError, Result};
use crate::utils::index_path;

/// A fixed-arity, positionally ordered aggregate.
pub trait Tuple: Sized {
    const NAME: &'static str;
    const ARITY: usize;

    /// Push every element, in order.
    fn encode_elements(&self, out: &mut ElementWriter) -> Result<()>;
    /// Pull every element, in order.
    fn decode_elements(elements: &mut ElementReader<'_>) -> Result<Self>;
}

#[derive(Debug)]
pub struct ElementWriter {
    owner: &'static str,
    elements: Vec<Value>,
}

impl ElementWriter {
    pub fn new(owner: &'static str, arity: usize) -> Self {
        Self { owner, elements: Vec::with_capacity(arity) }
    }

    pub fn push<T: Codec>(&mut self, value: &T) -> Result<()> {
        let index = self.elements.len();
        let encoded = value
            .encode()
            .map_err(|e| e.at(|| index_path(self.owner, index)))?;
        self.elements.push(encoded);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn into_elements(self) -> Vec<Value> {
        self.elements
    }
}

/// Sequential cursor over the elements of one tuple.
#[derive(Debug)]
pub struct ElementReader<'a> {
    owner: &'static str,
    elements: &'a [Value],
    position: usize,
}

impl<'a> ElementReader<'a> {
    pub fn new(owner: &'static str, elements: &'a [Value]) -> Self {
        Self { owner, elements, position: 0 }
    }

    /// Decode the element at the cursor and advance.
    pub fn read<T: Codec>(&mut self) -> Result<T> {
        let index = self.position;
        let element = self.elements.get(index).ok_or_else(|| {
            CodecError::malformed(index_path(self.owner, index), "read past the end of the tuple")
        })?;
        self.position += 1;
        T::decode(element).map_err(|e| e.at(|| index_path(self.owner, index)))
    }

    pub fn remaining(&self) -> usize {
        self.elements.len() - self.position
    }
}
