use std::fmt;

use serde::Serialize;

/// Metadata key colord fills in with the XRANDR output name of a display.
pub const METADATA_XRANDR_NAME: &str = "XRANDR_name";

/// Metadata key for the compositor-assigned output priority.
pub const METADATA_OUTPUT_PRIORITY: &str = "OutputPriority";

/// Physical category colord assigns to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Display,
    Scanner,
    Camera,
    Printer,
    Webcam,
    Unknown,
}

impl DeviceKind {
    /// Parse the daemon's wire representation. Kinds this tool has no use
    /// for collapse to `Unknown`; the display filter drops them either way.
    pub fn parse(kind: &str) -> DeviceKind {
        match kind {
            "display" => DeviceKind::Display,
            "scanner" => DeviceKind::Scanner,
            "camera" => DeviceKind::Camera,
            "printer" => DeviceKind::Printer,
            "webcam" => DeviceKind::Webcam,
            _ => DeviceKind::Unknown,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceKind::Display => "display",
            DeviceKind::Scanner => "scanner",
            DeviceKind::Camera => "camera",
            DeviceKind::Printer => "printer",
            DeviceKind::Webcam => "webcam",
            DeviceKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One display device, ready for JSON output.
///
/// Field order is the output key order. `priority` stays a string because it
/// is copied verbatim from the device metadata.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayInfo {
    pub index: usize,
    pub name: String,
    pub priority: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_colord_kind_strings() {
        assert_eq!(DeviceKind::parse("display"), DeviceKind::Display);
        assert_eq!(DeviceKind::parse("scanner"), DeviceKind::Scanner);
        assert_eq!(DeviceKind::parse("camera"), DeviceKind::Camera);
        assert_eq!(DeviceKind::parse("printer"), DeviceKind::Printer);
        assert_eq!(DeviceKind::parse("webcam"), DeviceKind::Webcam);
        assert_eq!(DeviceKind::parse("projector"), DeviceKind::Unknown);
        assert_eq!(DeviceKind::parse(""), DeviceKind::Unknown);
    }

    #[test]
    fn kind_display_matches_wire_names() {
        assert_eq!(DeviceKind::Display.to_string(), "display");
        assert_eq!(DeviceKind::Unknown.to_string(), "unknown");
    }

    #[test]
    fn serializes_in_output_key_order() {
        let infos = vec![
            DisplayInfo {
                index: 0,
                name: "eDP-1".into(),
                priority: "0".into(),
            },
            DisplayInfo {
                index: 1,
                name: "HDMI-1".into(),
                priority: "1".into(),
            },
        ];
        assert_eq!(
            serde_json::to_string(&infos).unwrap(),
            r#"[{"index":0,"name":"eDP-1","priority":"0"},{"index":1,"name":"HDMI-1","priority":"1"}]"#
        );
    }

    #[test]
    fn empty_list_serializes_to_empty_array() {
        let infos: Vec<DisplayInfo> = Vec::new();
        assert_eq!(serde_json::to_string(&infos).unwrap(), "[]");
    }
}
