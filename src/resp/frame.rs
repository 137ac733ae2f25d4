use enum_dispatch::enum_dispatch;

use super::{BulkString, RespArray, SimpleError, SimpleString};

#[enum_dispatch(RespEncode)]
#[derive(Debug, Clone, PartialEq)]
pub enum RespFrame {
    SimpleString(SimpleString),
    Error(SimpleError),
    Integer(i64),
    BulkString(Option<BulkString>),
    Array(Option<RespArray>),
}

#[enum_dispatch]
pub trait RespEncode {
    fn encode(self) -> Vec<u8>;
}

// - integer: ":[<+|->]<value>\r\n"
impl RespEncode for i64 {
    fn encode(self) -> Vec<u8> {
        format!(":{}\r\n", self).into_bytes()
    }
}

impl RespFrame {
    pub fn null() -> Self {
        RespFrame::BulkString(None)
    }

    pub fn bulk(s: impl Into<BulkString>) -> Self {
        RespFrame::BulkString(Some(s.into()))
    }
}

impl From<&str> for RespFrame {
    fn from(s: &str) -> Self {
        SimpleString::new(s).into()
    }
}

impl From<RespArray> for RespFrame {
    fn from(array: RespArray) -> Self {
        RespFrame::Array(Some(array))
    }
}

impl From<BulkString> for RespFrame {
    fn from(s: BulkString) -> Self {
        RespFrame::BulkString(Some(s))
    }
}
