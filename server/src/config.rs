//! Command line and environment configuration.
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Serves the bookshelf GraphQL API over HTTP.
#[derive(Debug, Parser)]
#[command(name = "bookshelf-server", version, long_about = None)]
pub(crate) struct Config {
    /// Address to listen on.
    #[arg(long, env = "BOOKSHELF_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub(crate) host: IpAddr,
    /// Log filter, used when `RUST_LOG` is not set.
    #[arg(long, env = "BOOKSHELF_LOG", default_value = "info")]
    pub(crate) log: String,
    /// Don't serve the `GraphiQL` page on `GET /graphql`.
    #[arg(long)]
    pub(crate) no_graphiql: bool,
    /// Port to listen on.
    #[arg(short, long, env = "BOOKSHELF_PORT", default_value_t = 8080)]
    pub(crate) port: u16,
    /// Print the schema in SDL form and exit.
    #[arg(long)]
    pub(crate) print_schema: bool,
}

impl Config {
    /// The socket address to bind to.
    pub(crate) const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
