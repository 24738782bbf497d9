pub mod openapi;
pub mod producer;
pub mod writer;
