mod backend;
mod cmd;
mod config;
mod resp;

pub use backend::*;
pub use cmd::*;
pub use config::Config;
pub use resp::{
    BulkString, RespArray, RespDecode, RespEncode, RespError, RespFrame, SimpleError, SimpleString,
};

use anyhow::Result;
use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

#[derive(Debug)]
pub struct RespFrameCodec;

impl Encoder<RespFrame> for RespFrameCodec {
    type Error = anyhow::Error;

    fn encode(&mut self, item: RespFrame, dst: &mut BytesMut) -> Result<()> {
        dst.extend_from_slice(&item.encode());
        Ok(())
    }
}

impl Decoder for RespFrameCodec {
    type Item = RespFrame;
    type Error = anyhow::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<RespFrame>> {
        match RespFrame::decode(src) {
            Ok(frame) => Ok(Some(frame)),
            Err(RespError::NotComplete) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_waits_for_complete_frame() -> Result<()> {
        let mut codec = RespFrameCodec;
        let mut buf = BytesMut::from("*2\r\n$3\r\nget\r\n$2\r\n1");

        assert_eq!(codec.decode(&mut buf)?, None);

        buf.extend_from_slice(b"2\r\n*1\r\n$3\r\ndbs\r\n");
        let frame = codec.decode(&mut buf)?;
        assert_eq!(
            frame,
            Some(RespArray::new(vec![RespFrame::bulk("get"), RespFrame::bulk("12")]).into())
        );
        assert_eq!(
            codec.decode(&mut buf)?,
            Some(RespArray::new(vec![RespFrame::bulk("dbs")]).into())
        );
        assert!(buf.is_empty());
        Ok(())
    }

    #[test]
    fn test_codec_rejects_garbage() {
        let mut codec = RespFrameCodec;
        let mut buf = BytesMut::from("hello\r\n");
        assert!(codec.decode(&mut buf).is_err());

        let mut buf = BytesMut::from("*2\r\n$3\r\ndel\r\n$-2\r\n");
        assert!(codec.decode(&mut buf).is_err());
    }

    #[test]
    fn test_codec_encode() -> Result<()> {
        let mut codec = RespFrameCodec;
        let mut buf = BytesMut::new();
        codec.encode(Product::new(1, "pen", 2.5).into(), &mut buf)?;
        assert_eq!(&buf[..], b"*3\r\n:1\r\n$3\r\npen\r\n$3\r\n2.5\r\n");
        Ok(())
    }
}
