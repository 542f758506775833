//! The two compact dialects side by side.
//!
//! Run with: cargo run --example compact

use dataset_show::{dataset, to_string, CompactDialect, FormatSpec};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = dataset!("Namespaces" [
        dataset!("Namespace" { "NamespaceID" => "0x0001", "Capacity" => 8u64 << 30 }),
        dataset!("Namespace" { "NamespaceID" => "0x0002", "Capacity" => 4u64 << 30 }),
        dataset!("Pending"),
    ]);

    println!("-- keyval --");
    print!("{}", to_string(&tree, &FormatSpec::compact(CompactDialect::KeyVal))?);

    println!("-- custom, verbose --");
    let custom = CompactDialect::Custom {
        field_separator: "\t".to_string(),
        kv_separator: ":".to_string(),
    };
    print!(
        "{}",
        to_string(&tree, &FormatSpec::compact(custom).with_verbose(true))?
    );
    Ok(())
}
