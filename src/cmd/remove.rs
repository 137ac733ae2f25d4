use crate::{Backend, CommandError, CommandExecutor, RespArray, RespFrame};

use super::{extract_args, parse_id, reply, validate_command, RESP_OK};

/// `CLEAR`
#[derive(Debug)]
pub struct Clear;

/// `DELALL`: same effect as `CLEAR`, kept as its own entry point.
#[derive(Debug)]
pub struct DeleteAll;

/// `DEL <id>`: replies with how many products were removed.
#[derive(Debug)]
pub struct Delete {
    pub id: i64,
}

/// `PURGE`: drops products missing a name or a price.
#[derive(Debug)]
pub struct Purge;

impl CommandExecutor for Clear {
    fn execute(self, backend: &Backend) -> RespFrame {
        reply(backend.clear(), |_| RESP_OK.clone())
    }
}

impl CommandExecutor for DeleteAll {
    fn execute(self, backend: &Backend) -> RespFrame {
        reply(backend.delete_all(), |_| RESP_OK.clone())
    }
}

impl CommandExecutor for Delete {
    fn execute(self, backend: &Backend) -> RespFrame {
        reply(backend.delete_by_id(self.id), |n| RespFrame::Integer(n as i64))
    }
}

impl CommandExecutor for Purge {
    fn execute(self, backend: &Backend) -> RespFrame {
        reply(backend.purge_incomplete(), |n| RespFrame::Integer(n as i64))
    }
}

impl TryFrom<RespArray> for Clear {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "clear", 0)?;
        Ok(Clear)
    }
}

impl TryFrom<RespArray> for DeleteAll {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "delall", 0)?;
        Ok(DeleteAll)
    }
}

impl TryFrom<RespArray> for Delete {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "del", 1)?;

        let mut args = extract_args(value, 1).into_iter();
        Ok(Delete {
            id: parse_id(args.next())?,
        })
    }
}

impl TryFrom<RespArray> for Purge {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "purge", 0)?;
        Ok(Purge)
    }
}

#[cfg(test)]
mod tests {
    use crate::cmd::command_frame;
    use crate::{Backend, Command, Database, Product, SimpleError};

    use super::*;
    use anyhow::Result;

    fn seeded() -> Result<Backend> {
        let backend = Backend::new();
        backend.configure("oracle")?;
        backend.add(Product::new(1, "A", 10.0))?;
        backend.add(Product::with_fields(2, None, Some(20.0)))?;
        backend.add(Product::with_fields(3, Some("C".to_string()), None))?;
        backend.configure("mysql")?;
        backend.add(Product::new(1, "A", 10.0))?;
        backend.add(Product::with_fields(2, None, Some(20.0)))?;
        backend.add(Product::with_fields(3, Some("C".to_string()), None))?;
        Ok(backend)
    }

    #[test]
    fn test_del() -> Result<()> {
        let backend = seeded()?;

        let cmd = Command::try_from(command_frame(&[Some("del"), Some("2")]))?;
        assert_eq!(cmd.execute(&backend), 1.into());

        let cmd = Command::try_from(command_frame(&[Some("del"), Some("2")]))?;
        assert_eq!(cmd.execute(&backend), 0.into());

        assert_eq!(backend.list()?.len(), 2);
        assert_eq!(backend.snapshot(Database::Oracle).len(), 3);
        Ok(())
    }

    #[test]
    fn test_purge() -> Result<()> {
        let backend = seeded()?;

        let cmd = Command::try_from(command_frame(&[Some("purge")]))?;
        assert_eq!(cmd.execute(&backend), 2.into());
        assert_eq!(backend.list()?.to_vec(), vec![Product::new(1, "A", 10.0)]);
        assert_eq!(backend.snapshot(Database::Oracle).len(), 3);
        Ok(())
    }

    #[test]
    fn test_clear_and_delall() -> Result<()> {
        let backend = seeded()?;

        let cmd = Command::try_from(command_frame(&[Some("clear")]))?;
        assert_eq!(cmd.execute(&backend), "OK".into());
        assert!(backend.list()?.is_empty());
        assert_eq!(backend.snapshot(Database::Oracle).len(), 3);

        backend.configure("oracle")?;
        let cmd = Command::try_from(command_frame(&[Some("delall")]))?;
        assert_eq!(cmd.execute(&backend), "OK".into());
        assert!(backend.snapshot(Database::Oracle).is_empty());
        Ok(())
    }

    #[test]
    fn test_remove_requires_database() -> Result<()> {
        let backend = Backend::new();
        for name in ["clear", "delall", "purge"] {
            let cmd = Command::try_from(command_frame(&[Some(name)]))?;
            assert_eq!(
                cmd.execute(&backend),
                SimpleError::new("ERR database not configured").into()
            );
        }
        Ok(())
    }
}
