//! Blocking D-Bus proxies for the colord daemon.
//!
//! Interface definitions follow the daemon's introspection data; only the
//! members this crate actually calls are declared.

use std::collections::HashMap;

use zbus::proxy;
use zbus::zvariant::OwnedObjectPath;

#[proxy(
    interface = "org.freedesktop.ColorManager",
    default_service = "org.freedesktop.ColorManager",
    default_path = "/org/freedesktop/ColorManager"
)]
pub trait ColorManager {
    /// Object paths of every device the daemon currently manages.
    fn get_devices(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    #[zbus(property)]
    fn daemon_version(&self) -> zbus::Result<String>;
}

#[proxy(
    interface = "org.freedesktop.ColorManager.Device",
    default_service = "org.freedesktop.ColorManager"
)]
pub trait ColorDevice {
    #[zbus(property)]
    fn device_id(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn kind(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn metadata(&self) -> zbus::Result<HashMap<String, String>>;
}
