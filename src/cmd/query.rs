use crate::{Backend, CommandError, CommandExecutor, RespArray, RespFrame};

use super::{extract_args, parse_id, reply, validate_command};

/// `LIST`: every product in the selected database, in insertion order.
#[derive(Debug)]
pub struct List;

/// `GET <id>`: the first product with `id`, or null.
#[derive(Debug)]
pub struct Get {
    pub id: i64,
}

impl CommandExecutor for List {
    fn execute(self, backend: &Backend) -> RespFrame {
        reply(backend.list(), |products| {
            products
                .iter()
                .cloned()
                .map(RespFrame::from)
                .collect::<RespArray>()
                .into()
        })
    }
}

impl CommandExecutor for Get {
    fn execute(self, backend: &Backend) -> RespFrame {
        reply(backend.find_by_id(self.id), |product| {
            product.map_or_else(RespFrame::null, RespFrame::from)
        })
    }
}

impl TryFrom<RespArray> for List {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "list", 0)?;
        Ok(List)
    }
}

impl TryFrom<RespArray> for Get {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "get", 1)?;

        let mut args = extract_args(value, 1).into_iter();
        Ok(Get {
            id: parse_id(args.next())?,
        })
    }
}
