use zbus::blocking::Connection;

use crate::device::Device;
use crate::proxy::ColorManagerProxyBlocking;
use crate::{Error, Result};

/// Major interface version this client is written against.
const SUPPORTED_MAJOR: u32 = 1;

/// An active session with the colord daemon on the system bus.
///
/// Built once at startup and used by a single thread for the process
/// lifetime; the bus connection is released on drop.
pub struct Client {
    connection: Connection,
    manager: ColorManagerProxyBlocking<'static>,
}

impl Client {
    /// Connect to the daemon and gate on its interface version.
    ///
    /// A failure here means the service side is missing or too old, not a
    /// transient fault; callers treat it as "bindings unavailable".
    pub fn connect() -> Result<Client> {
        let connection = Connection::system().map_err(Error::Unavailable)?;
        let manager = ColorManagerProxyBlocking::new(&connection).map_err(Error::Unavailable)?;
        let version = manager.daemon_version().map_err(Error::Unavailable)?;
        if !version_supported(&version) {
            return Err(Error::UnsupportedVersion { found: version });
        }
        log::debug!("connected to colord {}", version);
        Ok(Client {
            connection,
            manager,
        })
    }

    /// Ask the daemon for every device it currently manages, in daemon order.
    /// No filtering happens here; kinds are unknown until each device runs
    /// its connect handshake.
    pub fn devices(&self) -> Result<Vec<Device>> {
        let paths = self.manager.get_devices()?;
        log::debug!("colord reported {} device(s)", paths.len());
        paths
            .into_iter()
            .map(|path| Device::new(&self.connection, path))
            .collect()
    }
}

fn version_supported(version: &str) -> bool {
    version
        .split('.')
        .next()
        .and_then(|major| major.parse::<u32>().ok())
        == Some(SUPPORTED_MAJOR)
}
