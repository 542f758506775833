//! # dataset_show
//!
//! Hierarchical key/value DataSet trees and a renderer that turns them into
//! tables, nested lists, XML, or flat key/value text.
//!
//! ## What is a DataSet?
//!
//! A [`DataSet`] is a named node with an ordered list of children and an
//! ordered set of typed attributes (strings, signed and unsigned integers of
//! 8 to 64 bits, booleans). Collectors build a tree describing whatever they
//! gathered; the renderer then presents it in the format the caller asked for,
//! without either side knowing about the other.
//!
//! ## Key Features
//!
//! - **Typed attributes**: lookups check the stored type and tell "missing"
//!   apart from "wrong type"
//! - **Positional paths**: `/Dimm[1]/Sensor[0]` style lookups, with indices
//!   supplied at runtime when needed
//! - **Visitor traversal**: pre-order visit and post-order "children done"
//!   callbacks with an accumulator threaded down each branch
//! - **Squash**: collapse pass-through grouping nodes before tabulating
//! - **Declarative formats**: one [`FormatSpec`] selects table, list, XML or a
//!   compact dialect; it can be loaded from configuration via serde
//!
//! ## Quick Start
//!
//! ```rust
//! use dataset_show::{dataset, to_string, ColumnSpec, FormatSpec};
//!
//! let dimms = dataset!("DimmList" [
//!     dataset!("Dimm" { "DimmID" => "0x0001", "Capacity" => 16u32 }),
//!     dataset!("Dimm" { "DimmID" => "0x0101", "Capacity" => 32u32 }),
//! ]);
//!
//! let spec = FormatSpec::table(vec![
//!     ColumnSpec::new("DimmID", 6, "DimmID"),
//!     ColumnSpec::new("Capacity", 8, "Capacity"),
//! ]);
//!
//! let text = to_string(&dimms, &spec).unwrap();
//! assert_eq!(text, "DimmID Capacity\n0x0001 16      \n0x0101 32      \n");
//! ```
//!
//! ### XML
//!
//! ```rust
//! use dataset_show::{dataset, to_string, FormatSpec};
//!
//! let tree = dataset!("Dimm" { "Healthy" => true });
//! let xml = to_string(&tree, &FormatSpec::xml()).unwrap();
//! assert!(xml.contains("<Healthy type=\"bool\">true</Healthy>"));
//! ```
//!
//! ## Format Reference
//!
//! See the [`syntax`] module for the path grammar and the exact shape of every
//! output format.

pub mod dataset;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
mod path;
pub mod show;
pub mod syntax;
pub mod value;

pub use dataset::{DataSet, FnVisitor, Visitor};
pub use error::{Error, Result};
pub use map::KeyValueMap;
pub use options::{
    ColumnSpec, CompactDialect, FormatSpec, LevelSpec, OutputKind, Style, MAX_HEADER_NAME_SZ,
    MAX_LIST_LEVELS, MAX_TABLE_COLUMNS,
};
pub use show::ShowContext;
pub use value::{FromValue, KeyType, KeyValInfo, Lookup, Value};

use std::io;

/// Render a tree to a string.
///
/// # Errors
///
/// Returns a configuration error if `format` does not pass
/// [`FormatSpec::validate`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(data: &DataSet, format: &FormatSpec) -> Result<String> {
    format.validate()?;
    let mut output = String::with_capacity(256);
    show::render(&mut output, data, format);
    Ok(output)
}

/// Render a tree to a writer.
///
/// # Examples
///
/// ```rust
/// use dataset_show::{dataset, to_writer, CompactDialect, FormatSpec};
///
/// let tree = dataset!("Dimm" { "DimmID" => 7u16 });
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &tree, &FormatSpec::compact(CompactDialect::KeyVal)).unwrap();
/// assert_eq!(buffer, b"Dimm.DimmID.u16=7\n");
/// ```
///
/// # Errors
///
/// Returns a configuration error, or an I/O error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, data: &DataSet, format: &FormatSpec) -> Result<()>
where
    W: io::Write,
{
    let mut ctx = ShowContext::new(writer, format.clone());
    ctx.show_data(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> DataSet {
        dataset!("DimmList" [
            dataset!("Dimm" { "DimmID" => "0x0001" } [
                dataset!("Sensor" { "Temp" => 40i32 }),
            ]),
            dataset!("Dimm" { "DimmID" => "0x0101" }),
        ])
    }

    #[test]
    fn test_unset_style_fails_before_writing() {
        let mut buffer = Vec::new();
        let err = to_writer(&mut buffer, &inventory(), &FormatSpec::new()).unwrap_err();
        assert_eq!(err, Error::UnsetStyle);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_compact_overrides_style() {
        let spec = FormatSpec::list(vec![LevelSpec::new()]).with_compact(CompactDialect::custom());
        let text = to_string(&inventory(), &spec).unwrap();
        assert_eq!(text, "Dimm,DimmID=0x0001\nSensor,Temp=40\nDimm,DimmID=0x0101\n");
    }

    #[test]
    fn test_to_string_matches_to_writer() {
        let spec = FormatSpec::xml();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &inventory(), &spec).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            to_string(&inventory(), &spec).unwrap()
        );
    }
}
