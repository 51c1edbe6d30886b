use std::net::ToSocketAddrs;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{DEFAULT_TIMEOUT, HttpResponse};

/// Opens connections to a `host:port` address.
pub trait Connector {
    type Connection: Connection;

    fn connect(&self, address: &str) -> Result<Self::Connection>;
}

/// A single open connection. Dropping it releases the connection.
pub trait Connection {
    /// Send a GET request for `path` with the given headers, in order, and read
    /// the whole response.
    fn get(&mut self, path: &str, headers: &[(&str, &str)]) -> Result<HttpResponse>;
}

/// Production connector backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpConnector {
    timeout: Duration,
}

impl HttpConnector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpConnector {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

fn base_url(address: &str) -> Result<Url> {
    let url = Url::parse(&format!("http://{}", address))
        .map_err(|e| Error::Connection(format!("invalid address '{}': {}", address, e)))?;
    let has_port = address
        .rsplit_once(':')
        .is_some_and(|(_, port)| port.parse::<u16>().is_ok());
    if url.host_str().is_none() || !has_port || url.path() != "/" {
        return Err(Error::Connection(format!(
            "invalid address '{}': expected host:port",
            address
        )));
    }
    Ok(url)
}

impl Connector for HttpConnector {
    type Connection = HttpConnection;

    fn connect(&self, address: &str) -> Result<HttpConnection> {
        let base = base_url(address)?;

        let resolved = address
            .to_socket_addrs()
            .map_err(|e| Error::Connection(format!("cannot resolve '{}': {}", address, e)))?
            .count();
        if resolved == 0 {
            return Err(Error::Connection(format!(
                "'{}' resolved to no addresses",
                address
            )));
        }
        debug!("{} resolved to {} socket address(es)", address, resolved);

        // one idle slot keeps every request on the same keep-alive connection;
        // requests always go straight to `address`, never through an env proxy
        let client = Client::builder()
            .no_proxy()
            .connect_timeout(self.timeout)
            .timeout(self.timeout)
            .pool_max_idle_per_host(1)
            .build()?;

        Ok(HttpConnection {
            address: address.to_string(),
            base,
            client,
        })
    }
}

/// Connection to one service, held for the whole dispatch.
pub struct HttpConnection {
    address: String,
    base: Url,
    client: Client,
}

impl HttpConnection {
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Connection for HttpConnection {
    fn get(&mut self, path: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        let url = self
            .base
            .join(path)
            .map_err(|e| Error::Connection(format!("invalid request path '{}': {}", path, e)))?;

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

impl Drop for HttpConnection {
    fn drop(&mut self) {
        info!("Close connection to {}", self.address);
    }
}
