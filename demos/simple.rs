//! Building a DataSet by hand and reading it back.
//!
//! Run with: cargo run --example simple

use dataset_show::{DataSet, Lookup};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut root = DataSet::new("DimmList");
    for (id, capacity) in [(0x0001u16, 16u64), (0x0101, 32)] {
        let dimm = root.create_child("Dimm");
        dimm.set_u16("DimmID", id).set_u64("Capacity", capacity << 30);
        dimm.create_child("Sensor")
            .set_wstr("Type", "MediaTemperature")
            .set_i32("Value", 38);
    }

    // Positional lookup
    let second = root.find("/Dimm[1]").ok_or("no second DIMM")?;
    println!("second DIMM id: {:#06x}", second.get::<u16>("DimmID")?);

    // Missing keys fall back to the default
    match second.get_bool("Healthy", true)? {
        Lookup::Found(healthy) => println!("healthy: {}", healthy),
        Lookup::NotFound(default) => println!("healthy not reported, assuming {}", default),
    }

    // Wrong type is an error, not a default
    if let Err(e) = second.get_u32("Capacity", 0) {
        println!("expected error: {}", e);
    }

    // Enumerate keys in insertion order
    let mut cursor = second.next_key(None);
    while let Some(info) = cursor {
        println!("  {} ({}, {} bytes)", info.key, info.key_type, info.size);
        cursor = second.next_key(Some(info.key));
    }

    println!("{} nodes, height {}", root.node_count(), root.height());
    Ok(())
}
