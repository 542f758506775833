//! Tabulating DIMMs collected under grouping nodes.
//!
//! Run with: RUST_LOG=dataset_show=debug cargo run --example table

use dataset_show::{ColumnSpec, DataSet, FormatSpec, ShowContext};
use std::error::Error;
use std::io;
use tracing_subscriber::EnvFilter;

fn collect() -> DataSet {
    let mut root = DataSet::new("DimmList");
    for socket in 0..2u8 {
        // One grouping node per socket holding a single channel node
        let channel = root.create_child("Socket").create_child("Channel");
        for slot in 0..2u16 {
            let dimm = channel.create_child("Dimm");
            dimm.set_wstr("DimmID", format!("0x{}0{}1", socket, slot))
                .set_u8("SocketID", socket)
                .set_u64("Capacity", 16u64 << 30);
            if slot == 0 {
                dimm.set_wstr("HealthState", "Healthy");
            }
        }
    }
    root
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let spec = FormatSpec::table(vec![
        ColumnSpec::new("DimmID", 8, "DimmID"),
        ColumnSpec::new("Socket", 6, "SocketID"),
        ColumnSpec::new("Capacity", 12, "Capacity"),
        ColumnSpec::new("HealthState", 11, "HealthState"),
    ])
    .with_column_separator(" | ")
    .with_missing_value("N/A");

    let stdout = io::stdout();
    let mut ctx = ShowContext::new(stdout.lock(), spec);
    ctx.show_data(&collect())?;
    eprintln!("{} cells could not be resolved", ctx.unresolved());
    Ok(())
}
