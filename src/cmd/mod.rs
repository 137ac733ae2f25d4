mod query;
mod remove;
mod select;
mod unrecognized;
mod write;

use enum_dispatch::enum_dispatch;
use lazy_static::lazy_static;
use thiserror::Error;
use tracing::warn;

use crate::{Backend, Product, RespArray, RespFrame, SimpleError, SimpleString, StoreError};

pub use self::{
    query::{Get, List},
    remove::{Clear, Delete, DeleteAll, Purge},
    select::{Current, Databases, Use},
    unrecognized::Unrecognized,
    write::{Add, Update},
};

lazy_static! {
    static ref RESP_OK: RespFrame = SimpleString::new("OK").into();
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Utf8 error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

#[enum_dispatch]
pub trait CommandExecutor {
    fn execute(self, backend: &Backend) -> RespFrame;
}

#[enum_dispatch(CommandExecutor)]
#[derive(Debug)]
pub enum Command {
    Databases(Databases),
    Use(Use),
    Current(Current),
    Clear(Clear),
    Add(Add),
    List(List),
    Update(Update),
    Get(Get),
    DeleteAll(DeleteAll),
    Delete(Delete),
    Purge(Purge),
    Unrecognized(Unrecognized),
}

impl TryFrom<RespFrame> for Command {
    type Error = CommandError;
    fn try_from(v: RespFrame) -> Result<Self, Self::Error> {
        match v {
            RespFrame::Array(Some(array)) => array.try_into(),
            RespFrame::Array(None) => {
                Err(CommandError::InvalidCommand("Command is null".to_string()))
            }
            _ => Err(CommandError::InvalidCommand(
                "Command must be an Array".to_string(),
            )),
        }
    }
}

impl TryFrom<RespArray> for Command {
    type Error = CommandError;
    fn try_from(v: RespArray) -> Result<Self, Self::Error> {
        let name = match v.first() {
            Some(RespFrame::BulkString(Some(cmd))) => cmd.to_ascii_lowercase(),
            _ => {
                return Err(CommandError::InvalidCommand(
                    "Command must have a BulkString as the first argument".to_string(),
                ))
            }
        };

        match name.as_slice() {
            b"dbs" => Ok(Databases::try_from(v)?.into()),
            b"use" => Ok(Use::try_from(v)?.into()),
            b"current" => Ok(Current::try_from(v)?.into()),
            b"clear" => Ok(Clear::try_from(v)?.into()),
            b"add" => Ok(Add::try_from(v)?.into()),
            b"list" => Ok(List::try_from(v)?.into()),
            b"update" => Ok(Update::try_from(v)?.into()),
            b"get" => Ok(Get::try_from(v)?.into()),
            b"delall" => Ok(DeleteAll::try_from(v)?.into()),
            b"del" => Ok(Delete::try_from(v)?.into()),
            b"purge" => Ok(Purge::try_from(v)?.into()),
            _ => Ok(Unrecognized::new(String::from_utf8_lossy(&name)).into()),
        }
    }
}

/// Every command takes a fixed number of arguments after its name.
fn validate_command(
    value: &RespArray,
    name: &'static str,
    n_args: usize,
) -> Result<(), CommandError> {
    if value.len() != n_args + 1 {
        return Err(CommandError::InvalidArgument(format!(
            "{} command must have exactly {} argument(s)",
            name, n_args
        )));
    }
    Ok(())
}

fn extract_args(value: RespArray, start: usize) -> Vec<RespFrame> {
    value.into_inner().into_iter().skip(start).collect()
}

fn parse_id(frame: Option<RespFrame>) -> Result<i64, CommandError> {
    match frame {
        Some(RespFrame::Integer(id)) => Ok(id),
        Some(RespFrame::BulkString(Some(s))) => {
            let s = s.to_utf8()?;
            s.trim()
                .parse()
                .map_err(|_| CommandError::InvalidArgument(format!("id is not an integer: {}", s)))
        }
        _ => Err(CommandError::InvalidArgument("id is required".to_string())),
    }
}

/// A null bulk string stands for an absent name.
fn parse_name(frame: Option<RespFrame>) -> Result<Option<String>, CommandError> {
    match frame {
        Some(RespFrame::BulkString(Some(s))) => Ok(Some(s.to_utf8()?)),
        Some(RespFrame::BulkString(None)) => Ok(None),
        _ => Err(CommandError::InvalidArgument(
            "name must be a bulk string or null".to_string(),
        )),
    }
}

fn parse_price(frame: Option<RespFrame>) -> Result<Option<f64>, CommandError> {
    match frame {
        Some(RespFrame::BulkString(Some(s))) => {
            let s = s.to_utf8()?;
            match s.trim().parse::<f64>() {
                Ok(price) if price.is_finite() => Ok(Some(price)),
                _ => Err(CommandError::InvalidArgument(format!(
                    "price is not a number: {}",
                    s
                ))),
            }
        }
        Some(RespFrame::Integer(n)) => Ok(Some(n as f64)),
        Some(RespFrame::BulkString(None)) => Ok(None),
        _ => Err(CommandError::InvalidArgument(
            "price must be a bulk string or null".to_string(),
        )),
    }
}

/// Turns a store result into a reply; store errors become `-ERR ...`.
fn reply<T>(result: Result<T, StoreError>, ok: impl FnOnce(T) -> RespFrame) -> RespFrame {
    match result {
        Ok(v) => ok(v),
        Err(e) => {
            warn!("store rejected command: {}", e);
            SimpleError::new(format!("ERR {}", e)).into()
        }
    }
}

// - product: [id, name | null, price | null]
impl From<Product> for RespFrame {
    fn from(p: Product) -> Self {
        RespArray::new(vec![
            p.id().into(),
            p.name.map_or_else(RespFrame::null, RespFrame::bulk),
            p.price
                .map_or_else(RespFrame::null, |price| RespFrame::bulk(price.to_string())),
        ])
        .into()
    }
}

#[cfg(test)]
pub(crate) fn command_frame(args: &[Option<&str>]) -> RespFrame {
    args.iter()
        .map(|arg| match arg {
            Some(s) => RespFrame::bulk(*s),
            None => RespFrame::null(),
        })
        .collect::<RespArray>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_command_names_ignore_case() -> Result<()> {
        let cmd = Command::try_from(command_frame(&[Some("DbS")]))?;
        assert!(matches!(cmd, Command::Databases(_)));

        let cmd = Command::try_from(command_frame(&[Some("DELALL")]))?;
        assert!(matches!(cmd, Command::DeleteAll(_)));
        Ok(())
    }

    #[test]
    fn test_command_must_be_array() {
        let ret = Command::try_from(RespFrame::bulk("dbs"));
        assert!(matches!(ret, Err(CommandError::InvalidCommand(_))));

        let ret = Command::try_from(RespFrame::Array(None));
        assert!(matches!(ret, Err(CommandError::InvalidCommand(_))));
    }

    #[test]
    fn test_wrong_argument_count() {
        let ret = Command::try_from(command_frame(&[Some("get")]));
        assert!(matches!(ret, Err(CommandError::InvalidArgument(_))));

        let ret = Command::try_from(command_frame(&[Some("list"), Some("extra")]));
        assert!(matches!(ret, Err(CommandError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_arguments() -> Result<()> {
        assert_eq!(parse_id(Some(RespFrame::bulk(" 42 ")))?, 42);
        assert_eq!(parse_id(Some(RespFrame::Integer(-3)))?, -3);
        assert!(parse_id(Some(RespFrame::bulk("4x"))).is_err());
        assert!(parse_id(Some(RespFrame::null())).is_err());

        assert_eq!(parse_name(Some(RespFrame::null()))?, None);
        assert_eq!(parse_name(Some(RespFrame::bulk("pen")))?, Some("pen".to_string()));

        assert_eq!(parse_price(Some(RespFrame::bulk("9.5")))?, Some(9.5));
        assert_eq!(parse_price(Some(RespFrame::null()))?, None);
        assert!(parse_price(Some(RespFrame::bulk("NaN"))).is_err());
        Ok(())
    }

    #[test]
    fn test_product_frame() {
        let frame: RespFrame = Product::with_fields(3, None, Some(2.5)).into();
        assert_eq!(
            frame,
            RespArray::new(vec![3.into(), RespFrame::null(), RespFrame::bulk("2.5")]).into()
        );
    }
}
