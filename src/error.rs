/// Errors that can occur when talking to the colord daemon.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The system bus or the colord service was missing during the startup
    /// handshake.
    #[error("colord is not available on the system bus: {0}")]
    Unavailable(#[source] zbus::Error),

    #[error("unsupported colord daemon version {found} (need 1.x)")]
    UnsupportedVersion { found: String },

    #[error("D-Bus call failed: {0}")]
    Dbus(#[from] zbus::Error),

    #[error("device {path} was not connected before its properties were read")]
    NotConnected { path: String },

    #[error("device {device_id} has no metadata key \"{key}\"")]
    MetadataKeyMissing {
        device_id: String,
        key: &'static str,
    },

    #[error("failed to serialize display list: {0}")]
    Json(#[from] serde_json::Error),
}
