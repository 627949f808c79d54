use std::collections::HashMap;

use zbus::blocking::Connection;
use zbus::zvariant::OwnedObjectPath;

use crate::proxy::ColorDeviceProxyBlocking;
use crate::types::{DeviceKind, DisplayInfo, METADATA_OUTPUT_PRIORITY, METADATA_XRANDR_NAME};
use crate::{Error, Result};

/// Properties materialized by the connect handshake.
#[derive(Debug)]
struct DeviceProperties {
    device_id: String,
    kind: DeviceKind,
    metadata: HashMap<String, String>,
}

/// A device managed by colord.
///
/// The daemon owns the device; this is a reference by object path. Kind and
/// metadata are not readable until [`Device::connect`] has run.
pub struct Device {
    proxy: ColorDeviceProxyBlocking<'static>,
    path: OwnedObjectPath,
    props: Option<DeviceProperties>,
}

impl Device {
    pub(crate) fn new(connection: &Connection, path: OwnedObjectPath) -> Result<Device> {
        let proxy = ColorDeviceProxyBlocking::builder(connection)
            .path(path.to_string())?
            .build()?;
        Ok(Device {
            proxy,
            path,
            props: None,
        })
    }

    /// Object path of the device on the bus.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Run the per-device connect handshake: fetch id, kind, and metadata in
    /// one synchronous pass. Idempotent; repeat calls reuse the fetched
    /// properties instead of going back to the bus.
    pub fn connect(&mut self) -> Result<()> {
        if self.props.is_some() {
            return Ok(());
        }
        let device_id = self.proxy.device_id()?;
        let kind = DeviceKind::parse(&self.proxy.kind()?);
        let metadata = self.proxy.metadata()?;
        self.props = Some(DeviceProperties {
            device_id,
            kind,
            metadata,
        });
        Ok(())
    }

    /// Stable identifier assigned by the daemon, e.g. `xrandr-eDP-1`.
    pub fn id(&self) -> Result<&str> {
        Ok(&self.props()?.device_id)
    }

    pub fn kind(&self) -> Result<DeviceKind> {
        Ok(self.props()?.kind)
    }

    pub fn metadata(&self) -> Result<&HashMap<String, String>> {
        Ok(&self.props()?.metadata)
    }

    fn props(&self) -> Result<&DeviceProperties> {
        self.props.as_ref().ok_or_else(|| Error::NotConnected {
            path: self.path.to_string(),
        })
    }
}

/// Keep only display-kind devices, preserving discovery order.
///
/// A device's kind is unknown until its connect handshake completes, so
/// every device is connected before the filter runs; nothing is dropped
/// speculatively.
pub fn display_devices(devices: Vec<Device>) -> Result<Vec<Device>> {
    let mut displays = Vec::new();
    for mut device in devices {
        device.connect()?;
        let kind = device.kind()?;
        log::debug!("{} is a {} device", device.path(), kind);
        if kind == DeviceKind::Display {
            displays.push(device);
        }
    }
    Ok(displays)
}

/// Build the output records for an ordered slice of connected display
/// devices. Indices are assigned contiguously from zero in slice order.
pub fn display_infos(displays: &[Device]) -> Result<Vec<DisplayInfo>> {
    displays
        .iter()
        .enumerate()
        .map(|(index, device)| display_info(index, device.id()?, device.metadata()?))
        .collect()
}

fn display_info(
    index: usize,
    device_id: &str,
    metadata: &HashMap<String, String>,
) -> Result<DisplayInfo> {
    Ok(DisplayInfo {
        index,
        name: metadata_value(metadata, METADATA_XRANDR_NAME, device_id)?,
        priority: metadata_value(metadata, METADATA_OUTPUT_PRIORITY, device_id)?,
    })
}

/// Explicit lookup; a missing key is a hard error, never a default.
fn metadata_value(
    metadata: &HashMap<String, String>,
    key: &'static str,
    device_id: &str,
) -> Result<String> {
    metadata
        .get(key)
        .cloned()
        .ok_or_else(|| Error::MetadataKeyMissing {
            device_id: device_id.to_string(),
            key,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{display_info, metadata_value};
    use crate::types::{METADATA_OUTPUT_PRIORITY, METADATA_XRANDR_NAME};
    use crate::Error;

    fn metadata(name: &str, priority: &str) -> HashMap<String, String> {
        HashMap::from([
            (METADATA_XRANDR_NAME.to_string(), name.to_string()),
            (METADATA_OUTPUT_PRIORITY.to_string(), priority.to_string()),
        ])
    }

    #[test]
    fn copies_metadata_values_verbatim() {
        let info = display_info(0, "xrandr-eDP-1", &metadata("eDP-1", "0")).unwrap();
        assert_eq!(info.index, 0);
        assert_eq!(info.name, "eDP-1");
        assert_eq!(info.priority, "0");
    }

    #[test]
    fn records_keep_their_assigned_index() {
        let infos = vec![
            display_info(0, "xrandr-eDP-1", &metadata("eDP-1", "0")).unwrap(),
            display_info(1, "xrandr-HDMI-1", &metadata("HDMI-1", "1")).unwrap(),
        ];
        let indices: Vec<usize> = infos.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(
            serde_json::to_string(&infos).unwrap(),
            r#"[{"index":0,"name":"eDP-1","priority":"0"},{"index":1,"name":"HDMI-1","priority":"1"}]"#
        );
    }

    #[test]
    fn missing_priority_key_is_an_error_not_a_default() {
        let mut metadata = metadata("HDMI-1", "1");
        metadata.remove(METADATA_OUTPUT_PRIORITY);
        let err = display_info(1, "xrandr-HDMI-1", &metadata).unwrap_err();
        match err {
            Error::MetadataKeyMissing { device_id, key } => {
                assert_eq!(device_id, "xrandr-HDMI-1");
                assert_eq!(key, METADATA_OUTPUT_PRIORITY);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn metadata_lookup_returns_present_values() {
        let map = metadata("DP-2", "3");
        let value = metadata_value(&map, METADATA_XRANDR_NAME, "xrandr-DP-2").unwrap();
        assert_eq!(value, "DP-2");
    }
}
