//! Resolve a handful of enumerated devices against a driver table, the way a
//! board bring-up path would after enumeration hands it descriptors.
//!
//! Run with: `cargo run --example board_bringup`

use devmatch::{DeviceDescriptor, MatchRecord, Registry};

fn main() {
    let registry: Registry<&str> = Registry::new();
    registry.register(MatchRecord::with_data("vendor,uart-v1", "uart-core"));
    registry.register(MatchRecord::with_data("vendor,uart-v2", "uart-core"));
    registry.register(MatchRecord::with_data("vendor,spi-ctrl", "spi-core"));

    let devices = [
        // A v1-compatible controller that prefers its native v2 identity.
        DeviceDescriptor::new("serial@10000000", ["vendor,uart-v2", "vendor,uart-v1"]),
        DeviceDescriptor::new("serial@10001000", ["vendor,uart-v1"]),
        DeviceDescriptor::new("spi@10010000", ["vendor,spi-ctrl"]),
        DeviceDescriptor::new("mystery@10020000", ["othervendor,unknown"]),
    ];

    let table = registry.snapshot();
    for dev in &devices {
        match table.match_device(dev) {
            Some(hit) => println!(
                "{}: matched '{}' (driver {:?}, device preference #{})",
                dev.name,
                hit.matched_key(),
                hit.data(),
                hit.key_index + 1,
            ),
            None => println!("{}: no compatible driver", dev.name),
        }
    }
}
