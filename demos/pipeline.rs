use anyhow::Context;
use log::info;
use outcome::{Fallible, Outcome};
use std::fmt;

#[derive(Debug)]
enum PortError {
    Missing,
    Reserved(u16),
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "port not set"),
            Self::Reserved(port) => write!(f, "port {} is reserved", port),
        }
    }
}

fn lookup(key: &str) -> Outcome<String, PortError> {
    match std::env::var(key) {
        Ok(v) => Outcome::success(v),
        Err(_) => Outcome::failure(PortError::Missing),
    }
}

fn unreserved(port: u16) -> Outcome<u16, PortError> {
    if port < 1024 {
        Outcome::failure(PortError::Reserved(port))
    } else {
        Outcome::success(port)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // PortError stays typed until it is turned into anyhow::Error below.
    let typed = Fallible::catching(|| "8080".parse::<u16>())
        .get()
        .map(unreserved)?;
    info!("typed step - {:?}", typed);

    let from_env = lookup("PIPELINE_PORT")
        .flat_map_failure(|e| match e {
            PortError::Missing => Outcome::success("3000".to_string()),
            other => Outcome::failure(other),
        })
        .map_failure(|e| anyhow::anyhow!("{}", e))
        .map_throws(|raw| raw.parse::<u16>())
        .map_throws(|port| port.checked_add(1).context("port overflow"));
    info!("env step - {:?}", from_env);

    let port = from_env.get()?;
    info!("listening on 127.0.0.1:{}", port);
    Ok(())
}
