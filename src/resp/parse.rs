use bytes::BytesMut;
use winnow::ascii::dec_int;
use winnow::combinator::{dispatch, fail, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::token::{any, take, take_until};
use winnow::{PResult, Parser, Partial};

use super::{BulkString, RespArray, RespError, RespFrame, SimpleError, SimpleString};

const CRLF: &[u8] = b"\r\n";
const PREFIXES: &[u8] = b"+-:$*";
/// Deepest array nesting accepted; commands are flat and replies nest two levels.
const MAX_DEPTH: usize = 8;

type Stream<'i> = Partial<&'i [u8]>;

pub trait RespDecode: Sized {
    fn decode(buf: &mut BytesMut) -> Result<Self, RespError>;
    fn expect_length(buf: &[u8]) -> Result<usize, RespError>;
}

impl RespDecode for RespFrame {
    /// Splits one complete frame off the front of `buf`, leaving the rest in place.
    fn decode(buf: &mut BytesMut) -> Result<Self, RespError> {
        let len = Self::expect_length(buf)?;
        let data = buf.split_to(len);
        parse_frame(&mut data.as_ref()).map_err(|e| RespError::InvalidFrame(e.to_string()))
    }

    fn expect_length(input: &[u8]) -> Result<usize, RespError> {
        match input.first() {
            None => return Err(RespError::NotComplete),
            Some(b) if !PREFIXES.contains(b) => return Err(RespError::InvalidFrameType(*b as char)),
            Some(_) => {}
        }

        let mut target = Partial::new(input);
        match frame_length(&mut target, 0) {
            Ok(()) => Ok(input.len() - target.len()),
            Err(ErrMode::Incomplete(_)) => Err(RespError::NotComplete),
            Err(e) => Err(RespError::InvalidFrame(e.to_string())),
        }
    }
}

fn parse_frame(input: &mut &[u8]) -> PResult<RespFrame> {
    dispatch! {any;
        b'+' => simple_string.map(RespFrame::SimpleString),
        b'-' => error.map(RespFrame::Error),
        b':' => integer.map(RespFrame::Integer),
        b'$' => bulk_string.map(RespFrame::BulkString),
        b'*' => array.map(RespFrame::Array),
        _ => fail::<_, _, _>,
    }
    .parse_next(input)
}

// Walks one frame on a partial stream: running out of input is `Incomplete`,
// anything else that fails is a malformed frame.
fn frame_length(input: &mut Stream<'_>, depth: usize) -> PResult<()> {
    match any::<_, ContextError>(input)? {
        b'+' | b'-' => terminated(take_until(0.., CRLF), CRLF)
            .value(())
            .parse_next(input),
        b':' => terminated(dec_int::<_, i64, _>, CRLF)
            .value(())
            .parse_next(input),
        b'$' => bulk_string_length(input),
        b'*' if depth < MAX_DEPTH => array_length(input, depth + 1),
        _ => fail(input),
    }
}

fn simple_string(input: &mut &[u8]) -> PResult<SimpleString> {
    Ok(SimpleString::new(line_string(input)?))
}

fn error(input: &mut &[u8]) -> PResult<SimpleError> {
    Ok(SimpleError::new(line_string(input)?))
}

// :-42\r\n
fn integer(input: &mut &[u8]) -> PResult<i64> {
    terminated(dec_int, CRLF).parse_next(input)
}

// $5\r\nhello\r\n
// $0\r\n\r\n
// $-1\r\n
fn bulk_string(input: &mut &[u8]) -> PResult<Option<BulkString>> {
    let len: i64 = terminated(dec_int, CRLF).parse_next(input)?;
    match len {
        -1 => Ok(None),
        n if n < -1 => fail(input),
        n => terminated(take(n as usize), CRLF)
            .map(|data: &[u8]| Some(BulkString::new(data)))
            .parse_next(input),
    }
}

// *2\r\n$3\r\nget\r\n:1\r\n
// *-1\r\n
fn array(input: &mut &[u8]) -> PResult<Option<RespArray>> {
    let len: i64 = terminated(dec_int, CRLF).parse_next(input)?;
    match len {
        -1 => Ok(None),
        n if n < -1 => fail(input),
        n => {
            let mut frames = Vec::with_capacity(n as usize);
            for _ in 0..n {
                frames.push(parse_frame(input)?);
            }
            Ok(Some(RespArray::new(frames)))
        }
    }
}

fn bulk_string_length(input: &mut Stream<'_>) -> PResult<()> {
    let len: i64 = terminated(dec_int, CRLF).parse_next(input)?;
    match len {
        -1 => Ok(()),
        n if n < -1 => fail(input),
        n => terminated(take(n as usize), CRLF)
            .value(())
            .parse_next(input),
    }
}

fn array_length(input: &mut Stream<'_>, depth: usize) -> PResult<()> {
    let len: i64 = terminated(dec_int, CRLF).parse_next(input)?;
    if len < -1 {
        return fail(input);
    }
    for _ in 0..len.max(0) {
        frame_length(input, depth)?;
    }
    Ok(())
}

fn line_string(input: &mut &[u8]) -> PResult<String> {
    terminated(take_until(0.., CRLF), CRLF)
        .map(|v: &[u8]| String::from_utf8_lossy(v).to_string())
        .parse_next(input)
}
