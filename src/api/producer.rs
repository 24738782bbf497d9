use serde::Serialize;
use std::io::Write;

use crate::errors::error::Result;

/// Serializes a value onto a writer in a negotiated content type
pub trait Producer {
    fn content_type(&self) -> &'static str;

    fn produce<W, T>(&self, writer: &mut W, data: &T) -> Result<()>
    where
        W: Write + ?Sized,
        T: Serialize + ?Sized;
}

/// `application/json` producer backed by serde_json
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProducer;

impl Producer for JsonProducer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn produce<W, T>(&self, writer: &mut W, data: &T) -> Result<()>
    where
        W: Write + ?Sized,
        T: Serialize + ?Sized,
    {
        serde_json::to_writer(&mut *writer, data)?;
        writer.flush()?;
        Ok(())
    }
}
