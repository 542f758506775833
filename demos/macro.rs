//! Declaring a tree with the `dataset!` macro.
//!
//! Run with: cargo run --example macro

use dataset_show::{dataset, to_string, CompactDialect, FormatSpec};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let socket = 1u8;
    let tree = dataset!("Platform" [
        dataset!("Socket" { "SocketID" => socket } [
            dataset!("Dimm" { "DimmID" => "0x1001", "Healthy" => true }),
            dataset!("Dimm" { "DimmID" => "0x1011", "Healthy" => false }),
        ]),
        dataset!("Socket" { "SocketID" => socket + 1 }),
    ]);

    let spec = FormatSpec::compact(CompactDialect::KeyVal);
    print!("{}", to_string(&tree, &spec)?);
    Ok(())
}
