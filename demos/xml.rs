//! XML output, including a reported command error.
//!
//! Run with: cargo run --example xml

use dataset_show::{dataset, FormatSpec, ShowContext};
use std::error::Error;
use std::io;
use std::process;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = dataset!("DimmList" [
        dataset!("Dimm" { "DimmID" => "0x0001", "Manufacturer" => "Acme & Co" }),
        dataset!("Dimm" { "DimmID" => "0x0101", "Manufacturer" => "<unknown>" }),
    ]);

    let stdout = io::stdout();
    let mut ctx = ShowContext::new(stdout.lock(), FormatSpec::xml());
    ctx.show_data(&tree)?;

    let requested = 7;
    if tree.find_indexed("Dimm[{}]", &[requested]).is_none() {
        ctx.cmd_error(2, format_args!("DIMM index {} does not exist", requested))?;
    }

    if let Some(code) = ctx.exit_code() {
        drop(ctx);
        process::exit(code);
    }
    Ok(())
}
