use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use futures::SinkExt;
use tokio_stream::StreamExt;

use simple_catalog::{
    Backend, Command, CommandExecutor, Config, RespFrame, RespFrameCodec, SimpleError,
};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::Framed;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into()),
        )
        .init();

    let backend = config.build_backend()?;
    info!(
        "Simple-Catalog is listening on {} (databases: {:?}, current: {:?})",
        config.bind,
        backend.list_databases(),
        backend.current()
    );
    let listener = TcpListener::bind(&config.bind).await?;

    loop {
        let (stream, raddr) = listener.accept().await?;
        info!("Accepted connection from: {}", raddr);
        let backend = backend.clone();
        tokio::spawn(async move {
            match process_conn(stream, raddr, backend).await {
                Ok(_) => {
                    info!("Connection from {} exited", raddr);
                }
                Err(e) => {
                    warn!("handle error for {}: {:?}", raddr, e);
                }
            }
        });
    }
}

async fn process_conn(stream: TcpStream, raddr: SocketAddr, backend: Backend) -> Result<()> {
    let mut framed = Framed::new(stream, RespFrameCodec);
    while let Some(frame) = framed.next().await {
        let frame = frame?;
        debug!("Received frame from {}: {:?}", raddr, frame);

        let reply = match Command::try_from(frame) {
            Ok(cmd) => {
                debug!("Executing command: {:?}", cmd);
                cmd.execute(&backend)
            }
            Err(e) => {
                warn!("bad command from {}: {}", raddr, e);
                RespFrame::from(SimpleError::new(format!("ERR {}", e)))
            }
        };

        debug!("Sending response: {:?}", reply);
        framed.send(reply).await?;
    }
    Ok(())
}
