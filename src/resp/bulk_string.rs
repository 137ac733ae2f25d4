use std::ops::Deref;

use super::RespEncode;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct BulkString(pub(crate) Vec<u8>);

const NULL_BULK_STRING: &[u8; 5] = b"$-1\r\n";

// - bulk string: "$<length>\r\n<data>\r\n"
impl RespEncode for Option<BulkString> {
    fn encode(self) -> Vec<u8> {
        match self {
            Some(s) => {
                let mut buf = Vec::with_capacity(s.len() + 16);
                buf.extend_from_slice(format!("${}\r\n", s.len()).as_bytes());
                buf.extend_from_slice(&s);
                buf.extend_from_slice(b"\r\n");
                buf
            }
            None => NULL_BULK_STRING.to_vec(),
        }
    }
}

impl BulkString {
    pub fn new(s: impl Into<Vec<u8>>) -> Self {
        BulkString(s.into())
    }

    pub fn to_utf8(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0.clone())
    }
}

impl AsRef<[u8]> for BulkString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for BulkString {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for BulkString {
    fn from(s: &str) -> Self {
        BulkString(s.as_bytes().to_vec())
    }
}

impl From<String> for BulkString {
    fn from(s: String) -> Self {
        BulkString(s.into_bytes())
    }
}

impl From<&[u8]> for BulkString {
    fn from(s: &[u8]) -> Self {
        BulkString(s.to_vec())
    }
}
