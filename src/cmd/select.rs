use crate::{Backend, CommandError, CommandExecutor, RespArray, RespFrame};

use super::{extract_args, reply, validate_command, RESP_OK};

/// `DBS`: the databases a client may `USE`.
#[derive(Debug)]
pub struct Databases;

/// `USE <name>`: switches the store's selector.
#[derive(Debug)]
pub struct Use {
    pub name: String,
}

/// `CURRENT`: the selected database, or null before any `USE`.
#[derive(Debug)]
pub struct Current;

impl CommandExecutor for Databases {
    fn execute(self, backend: &Backend) -> RespFrame {
        backend
            .list_databases()
            .into_iter()
            .map(RespFrame::bulk)
            .collect::<RespArray>()
            .into()
    }
}

impl CommandExecutor for Use {
    fn execute(self, backend: &Backend) -> RespFrame {
        reply(backend.configure(&self.name), |_| RESP_OK.clone())
    }
}

impl CommandExecutor for Current {
    fn execute(self, backend: &Backend) -> RespFrame {
        match backend.current() {
            Some(db) => RespFrame::bulk(db.name()),
            None => RespFrame::null(),
        }
    }
}

impl TryFrom<RespArray> for Databases {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "dbs", 0)?;
        Ok(Databases)
    }
}

impl TryFrom<RespArray> for Use {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "use", 1)?;

        match extract_args(value, 1).into_iter().next() {
            Some(RespFrame::BulkString(Some(name))) => Ok(Use {
                name: name.to_utf8()?,
            }),
            _ => Err(CommandError::InvalidArgument(
                "database name must be a bulk string".to_string(),
            )),
        }
    }
}

impl TryFrom<RespArray> for Current {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "current", 0)?;
        Ok(Current)
    }
}
