//! Print every colord display device as one JSON array on stdout.

use std::process::ExitCode;

use cd_displays::{device, Client, Result};

fn main() -> ExitCode {
    env_logger::init();

    let client = match Client::connect() {
        Ok(client) => client,
        Err(e) => {
            log::debug!("colord handshake failed: {}", e);
            eprintln!("Colord bindings not available!");
            eprintln!("Please install it using your package manager.");
            return ExitCode::from(1);
        }
    };

    match run(&client) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(client: &Client) -> Result<String> {
    let devices = client.devices()?;
    let displays = device::display_devices(devices)?;
    let infos = device::display_infos(&displays)?;
    Ok(serde_json::to_string(&infos)?)
}
