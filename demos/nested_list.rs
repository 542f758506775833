//! Nested list output driven by per-level templates, loaded from JSON.
//!
//! Run with: cargo run --example nested_list

use dataset_show::{dataset, FormatSpec, ShowContext};
use std::error::Error;
use std::io;

const FORMAT: &str = r#"{
    "style": { "list": [
        { "level_type": "DimmList", "footer": "({name} end)" },
        {
            "level_type": "Dimm",
            "item_header": "---DimmID={key:DimmID}---",
            "key_val_format": "   {key}={value}",
            "ignore_keys": ["DimmID"]
        },
        {
            "level_type": "Sensor",
            "header": "Sensors:",
            "item_header": "{key:Type}",
            "key_val_format": "  {key}: {value} ({type})",
            "ignore_keys": ["Type"]
        }
    ] }
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = dataset!("DimmList" [
        dataset!("Dimm" { "DimmID" => "0x0001", "Capacity" => 16u32 } [
            dataset!("Sensor" { "Type" => "MediaTemperature", "Value" => 38i32 }),
            dataset!("Sensor" { "Type" => "SpareCapacity", "Value" => 100u8 }),
        ]),
        dataset!("Dimm" { "DimmID" => "0x0101", "Capacity" => 32u32 } [
            dataset!("Unpopulated"),
        ]),
    ]);

    let spec: FormatSpec = serde_json::from_str(FORMAT)?;

    println!("== default ==");
    ShowContext::new(io::stdout(), spec.clone()).show_data(&tree)?;

    println!("== verbose ==");
    ShowContext::new(io::stdout(), spec.with_verbose(true)).show_data(&tree)?;
    Ok(())
}
