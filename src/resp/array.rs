use std::ops::{Deref, DerefMut};

use super::{RespEncode, RespFrame};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RespArray(pub(crate) Vec<RespFrame>);

const NULL_ARRAY: &[u8; 5] = b"*-1\r\n";

// - array: "*<number-of-elements>\r\n<element-1>...<element-n>"
impl RespEncode for Option<RespArray> {
    fn encode(self) -> Vec<u8> {
        match self {
            Some(array) => {
                let mut buf = format!("*{}\r\n", array.len()).into_bytes();
                for frame in array.0 {
                    buf.extend_from_slice(&frame.encode());
                }
                buf
            }
            None => NULL_ARRAY.to_vec(),
        }
    }
}

impl RespArray {
    pub fn new(frames: impl Into<Vec<RespFrame>>) -> Self {
        RespArray(frames.into())
    }

    pub fn into_inner(self) -> Vec<RespFrame> {
        self.0
    }
}

impl Deref for RespArray {
    type Target = Vec<RespFrame>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RespArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<RespFrame> for RespArray {
    fn from_iter<T: IntoIterator<Item = RespFrame>>(iter: T) -> Self {
        RespArray(iter.into_iter().collect())
    }
}
