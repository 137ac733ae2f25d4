use crate::{
    Backend, CommandError, CommandExecutor, Product, ProductPatch, RespArray, RespFrame,
};

use super::{
    extract_args, parse_id, parse_name, parse_price, reply, validate_command, RESP_OK,
};

/// `ADD <id> <name|null> <price|null>`
#[derive(Debug)]
pub struct Add {
    pub product: Product,
}

/// `UPDATE <id> <name|null> <price|null>`: replies with how many products changed.
#[derive(Debug)]
pub struct Update {
    pub id: i64,
    pub patch: ProductPatch,
}

impl CommandExecutor for Add {
    fn execute(self, backend: &Backend) -> RespFrame {
        reply(backend.add(self.product), |_| RESP_OK.clone())
    }
}

impl CommandExecutor for Update {
    fn execute(self, backend: &Backend) -> RespFrame {
        reply(backend.update(self.id, &self.patch), |n| RespFrame::Integer(n as i64))
    }
}

impl TryFrom<RespArray> for Add {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "add", 3)?;

        let mut args = extract_args(value, 1).into_iter();
        let id = parse_id(args.next())?;
        let name = parse_name(args.next())?;
        let price = parse_price(args.next())?;
        Ok(Add {
            product: Product::with_fields(id, name, price),
        })
    }
}

impl TryFrom<RespArray> for Update {
    type Error = CommandError;
    fn try_from(value: RespArray) -> Result<Self, Self::Error> {
        validate_command(&value, "update", 3)?;

        let mut args = extract_args(value, 1).into_iter();
        let id = parse_id(args.next())?;
        let name = parse_name(args.next())?;
        let price = parse_price(args.next())?;
        Ok(Update {
            id,
            patch: ProductPatch::new(name, price),
        })
    }
}
