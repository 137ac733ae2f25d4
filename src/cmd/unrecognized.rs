use crate::{Backend, CommandExecutor, RespFrame, SimpleError};

#[derive(Debug)]
pub struct Unrecognized {
    pub name: String,
}

impl Unrecognized {
    pub fn new(name: impl Into<String>) -> Self {
        Unrecognized { name: name.into() }
    }
}

impl CommandExecutor for Unrecognized {
    fn execute(self, _: &Backend) -> RespFrame {
        SimpleError::new(format!("ERR unknown command '{}'", self.name)).into()
    }
}
