mod array;
mod bulk_string;
mod frame;
mod parse;
mod simple;

pub use array::RespArray;
pub use bulk_string::BulkString;
pub use frame::{RespEncode, RespFrame};
pub use parse::RespDecode;
pub use simple::{SimpleError, SimpleString};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RespError {
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),
    #[error("Invalid frame type: {0:?}")]
    InvalidFrameType(char),
    #[error("Frame is not complete")]
    NotComplete,
}
