//! # cd-displays - colord display device enumerator
//!
//! Thin blocking client for the colord system daemon. Provides:
//! - Session setup with a daemon version gate
//! - Device listing and the per-device connect handshake
//! - JSON records for display-kind devices (XRANDR name + output priority)
//!
//! ## Quick Start
//! ```no_run
//! use cd_displays::{device, Client};
//!
//! let client = Client::connect().unwrap();
//! let displays = device::display_devices(client.devices().unwrap()).unwrap();
//! for info in device::display_infos(&displays).unwrap() {
//!     println!("{}: {}", info.index, info.name);
//! }
//! ```

pub mod client;
pub mod device;
pub mod error;
pub mod proxy;
pub mod types;

pub use client::Client;
pub use error::Error;
pub use types::{DeviceKind, DisplayInfo};

/// Result type alias for colord operations.
pub type Result<T> = std::result::Result<T, Error>;
