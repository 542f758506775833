//! Path syntax and output formats
//!
//! This module documents the exact text this crate accepts and produces. It
//! contains no code.
//!
//! # Paths
//!
//! ```text
//! /Segment[index]/Segment[index]/...
//! ```
//!
//! - Segments name children of the node the lookup starts from; the starting
//!   node's own name is not part of the path
//! - The leading `/` is optional
//! - `[index]` is a zero-based decimal position among children sharing the
//!   segment's name, in insertion order; a missing index means `[0]`
//! - `[{}]` takes the next index from the caller's index list
//!   ([`DataSet::find_indexed`](crate::DataSet::find_indexed)); every listed
//!   index must be used
//! - An empty path, an empty segment (`a//b`, `a/`), a non-numeric index, or an
//!   unmatched segment resolves to nothing
//!
//! Repeated sibling names without an index always resolve to the first one.
//!
//! # Table
//!
//! ```text
//! DimmID Capacity    Temp
//! 0x0001 17179869184 41  
//! ```
//!
//! | Part | Rule |
//! |------|------|
//! | Rows | Leaves of the squashed tree, pre-order; one line each |
//! | Cells | Text truncated or space-padded to the column width (characters) |
//! | Separator | `column_separator`, one space by default |
//! | Column path | `sub/path/Key`: `sub/path` found from the row node, then `Key` read from it |
//! | Inherited | A cell the row cannot resolve is tried on its ancestors, nearest first |
//! | Unresolved | `missing_value` (empty by default), counted in `ShowContext::unresolved` |
//!
//! The header line always comes first, even when there are no rows.
//!
//! # Nested list
//!
//! Per node, indented by `depth * indent` spaces (the rendered node is depth 0):
//!
//! 1. Level `header`, before the first node of each run of siblings sharing a
//!    level
//! 2. Level `item_header`
//! 3. One `key_val_format` line per attribute not in `ignore_keys`
//! 4. Children
//! 5. Level `footer`
//!
//! A node uses the first level whose `level_type` equals its name. Otherwise it
//! uses the level for its depth, and depths past the last template reuse the
//! last one. Without `verbose`, subtrees
//! holding no attributes are left out.
//!
//! | Placeholder | Available in | Expands to |
//! |-------------|--------------|------------|
//! | `{name}` | header, item header, footer | Node name |
//! | `{depth}` | header, item header, footer | Node depth |
//! | `{key:NAME}` | header, item header, footer | Value of `NAME`, empty if absent |
//! | `{key}` | key/value format | Key |
//! | `{value}` | key/value format | Value |
//! | `{type}` | key/value format | Type tag (`u32`, `wstr`, ...) |
//!
//! Unknown placeholders are copied through unchanged.
//!
//! # XML
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <DimmList>
//!   <Dimm>
//!     <DimmID type="wstr">0x0001</DimmID>
//!   </Dimm>
//! </DimmList>
//! ```
//!
//! Every node produces exactly one element, attributes first, then children.
//! Characters not allowed in XML names become `_`, and names that would start
//! with a digit or punctuation get a leading `_`. Text content escapes
//! `& < > " '`, and characters XML 1.0 forbids become U+FFFD. `verbose` has no effect: XML always mirrors the whole tree.
//!
//! # Compact key/value
//!
//! `KeyVal`, one line per attribute, names joined from the rendered node down:
//!
//! ```text
//! DimmList.Dimm.DimmID.wstr=0x0001
//! ```
//!
//! `Custom`, one line per node with attributes:
//!
//! ```text
//! Dimm,DimmID=0x0001,Capacity=17179869184
//! ```
//!
//! With `verbose`, nodes without attributes still get a line holding just their
//! qualified name (`KeyVal`) or name (`Custom`).
//!
//! # Type tags
//!
//! | Tag | Rust type | Size (bytes) |
//! |-----|-----------|--------------|
//! | `wstr` | `String` | UTF-16 units + 1, times 2 |
//! | `u64` / `i64` | `u64` / `i64` | 8 |
//! | `u32` / `i32` | `u32` / `i32` | 4 |
//! | `u16` / `i16` | `u16` / `i16` | 2 |
//! | `u8` / `i8` | `u8` / `i8` | 1 |
//! | `bool` | `bool` | 1 |
