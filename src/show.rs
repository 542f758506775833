//! Rendering DataSet trees.
//!
//! This module provides [`ShowContext`], which renders a [`DataSet`] tree
//! according to a [`FormatSpec`] and writes the result to any
//! [`io::Write`] sink.
//!
//! ## Overview
//!
//! - **Table**: one row per leaf of the squashed tree, one fixed-width column per
//!   [`ColumnSpec`](crate::ColumnSpec)
//! - **Nested list**: depth-first, per-depth headers, item headers, key/value
//!   lines and footers taken from [`LevelSpec`]s
//! - **XML**: one element per node, one typed child element per key/value
//! - **Compact dialects**: flat key/value lines with no headers
//!
//! A compact dialect takes precedence over the table/list style in text output.
//! Output is assembled in memory and written to the sink in one call, so a
//! configuration error never leaves partial output behind.
//!
//! ## Usage
//!
//! ```rust
//! use dataset_show::{ColumnSpec, DataSet, FormatSpec, ShowContext};
//!
//! let mut root = DataSet::new("DimmList");
//! root.create_child("Dimm").set_wstr("DimmID", "0x0001").set_u32("Temp", 36);
//! root.create_child("Dimm").set_wstr("DimmID", "0x0101");
//!
//! let spec = FormatSpec::table(vec![
//!     ColumnSpec::new("ID", 6, "DimmID"),
//!     ColumnSpec::new("Temp", 4, "Temp"),
//! ])
//! .with_missing_value("N/A");
//!
//! let mut ctx = ShowContext::new(Vec::new(), spec);
//! ctx.show_data(&root).unwrap();
//! assert_eq!(ctx.unresolved(), 1);
//!
//! let text = String::from_utf8(ctx.into_inner()).unwrap();
//! assert_eq!(text, "ID     Temp\n0x0001 36  \n0x0101 N/A \n");
//! ```

use crate::{
    CompactDialect, DataSet, FormatSpec, LevelSpec, OutputKind, Result, Style, Value, Visitor,
};
use std::fmt;
use std::io;

/// Renders trees to a sink and records the command's outcome.
pub struct ShowContext<W> {
    writer: W,
    format: FormatSpec,
    exit_code: Option<i32>,
    unresolved: usize,
}

impl<W: io::Write> ShowContext<W> {
    pub fn new(writer: W, format: FormatSpec) -> Self {
        ShowContext {
            writer,
            format,
            exit_code: None,
            unresolved: 0,
        }
    }

    pub fn format(&self) -> &FormatSpec {
        &self.format
    }

    /// Renders `data` and writes it to the sink.
    ///
    /// # Errors
    ///
    /// Configuration errors from [`FormatSpec::validate`] are returned before
    /// anything is written. A failing sink yields [`Error::Io`](crate::Error::Io).
    pub fn show_data(&mut self, data: &DataSet) -> Result<()> {
        self.format.validate()?;

        let mut output = String::with_capacity(256);
        self.unresolved += render(&mut output, data, &self.format);

        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Reports a command failure on the sink and records `exit_code`.
    ///
    /// Rendering state is left untouched; the caller decides whether to carry
    /// on. The last recorded code wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the sink rejects the write.
    pub fn cmd_error(&mut self, exit_code: i32, msg: impl fmt::Display) -> Result<()> {
        let msg = msg.to_string();
        tracing::debug!(exit_code, %msg, "command error");
        self.exit_code = Some(exit_code);

        match self.format.kind {
            OutputKind::Text => writeln!(self.writer, "Error: {}", msg)?,
            OutputKind::Xml => {
                let mut line = String::new();
                write_escaped(&mut line, &msg);
                writeln!(self.writer, "<Error code=\"{}\">{}</Error>", exit_code, line)?
            }
        }
        Ok(())
    }

    /// The exit code recorded by [`ShowContext::cmd_error`], if any.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Number of table cells rendered with the placeholder so far.
    pub fn unresolved(&self) -> usize {
        self.unresolved
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Renders into `output` and returns the number of unresolved cells.
/// The format must already be validated.
pub(crate) fn render(output: &mut String, data: &DataSet, format: &FormatSpec) -> usize {
    let unresolved = render_format(output, data, format);
    if unresolved > 0 {
        tracing::debug!(unresolved, root = data.name(), "rendered with unresolved cells");
    }
    unresolved
}

fn render_format(output: &mut String, data: &DataSet, format: &FormatSpec) -> usize {
    if format.kind == OutputKind::Xml {
        write_xml(output, data, format.indent);
        return 0;
    }
    if let Some(dialect) = &format.compact {
        write_compact(output, data, dialect, format.verbose);
        return 0;
    }
    match &format.style {
        Some(Style::Table(columns)) => write_table(output, data, columns, format),
        Some(Style::List(levels)) => {
            write_list(output, data, levels, format);
            0
        }
        None => 0,
    }
}

fn write_table(
    output: &mut String,
    data: &DataSet,
    columns: &[crate::ColumnSpec],
    format: &FormatSpec,
) -> usize {
    let mut rows = Vec::new();
    collect_rows(data, &mut Vec::new(), &mut rows);

    let header: Vec<_> = columns
        .iter()
        .map(|column| fit(&column.header, column.width))
        .collect();
    output.push_str(&header.join(format.column_separator.as_str()));
    output.push('\n');

    let mut unresolved = 0;
    for chain in &rows {
        let cells: Vec<_> = columns
            .iter()
            .map(|column| {
                let text = resolve_cell(chain, &column.path).unwrap_or_else(|| {
                    tracing::debug!(path = %column.path, "unresolved table cell");
                    unresolved += 1;
                    format.missing_value.clone()
                });
                fit(&text, column.width)
            })
            .collect();
        output.push_str(&cells.join(format.column_separator.as_str()));
        output.push('\n');
    }
    unresolved
}

/// Leaves of the squashed tree in pre-order, each with its ancestors
/// (rendered root first, leaf last).
fn collect_rows<'a>(
    node: &'a DataSet,
    chain: &mut Vec<&'a DataSet>,
    rows: &mut Vec<Vec<&'a DataSet>>,
) {
    chain.push(node);
    if node.is_leaf() {
        rows.push(chain.clone());
    } else {
        for child in node.squashed_children() {
            collect_rows(child, chain, rows);
        }
    }
    chain.pop();
}

/// Resolves a column path on the row, then on each ancestor.
fn resolve_cell(chain: &[&DataSet], path: &str) -> Option<String> {
    let (sub, key) = match path.rsplit_once('/') {
        Some((sub, key)) => (sub, key),
        None => ("", path),
    };
    chain.iter().rev().find_map(|node| {
        let target = if sub.is_empty() { Some(*node) } else { node.find(sub) };
        target?.value(key).map(Value::to_string)
    })
}

/// Truncates or right-pads `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let mut cell: String = text.chars().take(width).collect();
    let len = cell.chars().count();
    cell.extend(std::iter::repeat(' ').take(width - len));
    cell
}

fn write_list(output: &mut String, data: &DataSet, levels: &[LevelSpec], format: &FormatSpec) {
    let mut renderer = ListRenderer {
        output,
        levels,
        indent: format.indent,
        verbose: format.verbose,
        last_level: Vec::new(),
    };
    data.recurse(&mut renderer, Some(0), false);
}

/// Accumulator is the depth handed to children, `None` once a subtree is hidden.
struct ListRenderer<'a> {
    output: &'a mut String,
    levels: &'a [LevelSpec],
    indent: usize,
    verbose: bool,
    /// Per depth: index of the level last used in the current sibling group
    last_level: Vec<Option<usize>>,
}

impl ListRenderer<'_> {
    /// Index of the level typed for this node's name, else of the one for
    /// its depth.
    fn level_index(&self, node: &DataSet, depth: usize) -> usize {
        self.levels
            .iter()
            .position(|level| level.level_type.as_deref() == Some(node.name()))
            .unwrap_or_else(|| depth.min(self.levels.len() - 1))
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.output.push_str(&" ".repeat(depth * self.indent));
        self.output.push_str(text);
        self.output.push('\n');
    }
}

impl Visitor for ListRenderer<'_> {
    type Acc = Option<usize>;

    fn visit(&mut self, _name: &str, node: &DataSet, parent: &Option<usize>) -> Option<usize> {
        let depth = (*parent)?;
        if !self.verbose && !node.has_content() {
            return None;
        }

        if self.last_level.len() <= depth {
            self.last_level.resize(depth + 1, None);
        }
        for deeper in &mut self.last_level[depth + 1..] {
            *deeper = None;
        }

        // The header opens each run of same-level siblings
        let index = self.level_index(node, depth);
        let level = self.levels[index].clone();
        if self.last_level[depth].replace(index) != Some(index) {
            if let Some(header) = &level.header {
                self.line(depth, &expand_node(header, node, depth));
            }
        }
        if let Some(item_header) = &level.item_header {
            self.line(depth, &expand_node(item_header, node, depth));
        }
        for (key, value) in node.values() {
            if level.is_ignored(key) {
                continue;
            }
            let text = expand(&level.key_val_format, |token| match token {
                "key" => Some(key.clone()),
                "value" => Some(value.to_string()),
                "type" => Some(value.key_type().to_string()),
                _ => None,
            });
            self.line(depth, &text);
        }
        Some(depth + 1)
    }

    fn children_done(&mut self, _name: &str, node: &DataSet, acc: &Option<usize>) {
        let Some(depth) = acc.map(|next| next - 1) else {
            return;
        };
        let index = self.level_index(node, depth);
        if let Some(footer) = self.levels[index].footer.clone() {
            self.line(depth, &expand_node(&footer, node, depth));
        }
    }
}

fn expand_node(template: &str, node: &DataSet, depth: usize) -> String {
    expand(template, |token| match token {
        "name" => Some(node.name().to_string()),
        "depth" => Some(depth.to_string()),
        _ => token
            .strip_prefix("key:")
            .map(|key| node.value(key).map(Value::to_string).unwrap_or_default()),
    })
}

/// Replaces `{token}` occurrences the lookup knows; everything else is copied.
fn expand<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let token = &after[..close];
                match lookup(token) {
                    Some(text) => out.push_str(&text),
                    None => {
                        out.push('{');
                        out.push_str(token);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn write_xml(output: &mut String, data: &DataSet, indent: usize) {
    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let mut renderer = XmlRenderer { output, indent };
    data.recurse(&mut renderer, 0, false);
}

/// Accumulator is the depth of the node's children.
struct XmlRenderer<'a> {
    output: &'a mut String,
    indent: usize,
}

impl XmlRenderer<'_> {
    fn pad(&mut self, depth: usize) {
        self.output.push_str(&" ".repeat(depth * self.indent));
    }
}

impl Visitor for XmlRenderer<'_> {
    type Acc = usize;

    fn visit(&mut self, name: &str, node: &DataSet, depth: &usize) -> usize {
        self.pad(*depth);
        self.output.push('<');
        self.output.push_str(&xml_name(name));
        self.output.push_str(">\n");

        for (key, value) in node.values() {
            let tag = xml_name(key);
            self.pad(depth + 1);
            self.output.push_str(&format!("<{} type=\"{}\">", tag, value.key_type()));
            match value {
                Value::WStr(s) if value.needs_escaping() => write_escaped(self.output, s),
                _ => self.output.push_str(&value.to_string()),
            }
            self.output.push_str(&format!("</{}>\n", tag));
        }
        depth + 1
    }

    fn children_done(&mut self, name: &str, _node: &DataSet, acc: &usize) {
        self.pad(acc - 1);
        self.output.push_str("</");
        self.output.push_str(&xml_name(name));
        self.output.push_str(">\n");
    }
}

/// Maps an arbitrary node or key name onto a valid XML element name.
fn xml_name(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    match out.chars().next() {
        None => out.push('_'),
        Some(first) if !(first.is_alphabetic() || first == '_') => out.insert(0, '_'),
        Some(_) => {}
    }
    out
}

/// Escapes markup characters and replaces characters XML 1.0 forbids.
fn write_escaped(output: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '\t' | '\n' | '\r' => output.push(ch),
            '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => {
                output.push(char::REPLACEMENT_CHARACTER)
            }
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&apos;"),
            _ => output.push(ch),
        }
    }
}

fn write_compact(output: &mut String, data: &DataSet, dialect: &CompactDialect, verbose: bool) {
    match dialect {
        CompactDialect::KeyVal => {
            let mut renderer = KeyValRenderer { output, verbose };
            data.recurse(&mut renderer, String::new(), !verbose);
        }
        CompactDialect::Custom {
            field_separator,
            kv_separator,
        } => {
            let mut renderer = CustomRenderer {
                output,
                verbose,
                field_separator,
                kv_separator,
            };
            data.recurse(&mut renderer, (), !verbose);
        }
    }
}

/// Accumulator is the dot-joined path of names down to the node.
struct KeyValRenderer<'a> {
    output: &'a mut String,
    verbose: bool,
}

impl Visitor for KeyValRenderer<'_> {
    type Acc = String;

    fn visit(&mut self, name: &str, node: &DataSet, parent: &String) -> String {
        let qualified = if parent.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", parent, name)
        };

        if node.key_count() == 0 {
            if self.verbose {
                self.output.push_str(&qualified);
                self.output.push('\n');
            }
        } else {
            for (key, value) in node.values() {
                self.output.push_str(&format!(
                    "{}.{}.{}={}\n",
                    qualified,
                    key,
                    value.key_type(),
                    value
                ));
            }
        }
        qualified
    }
}

struct CustomRenderer<'a> {
    output: &'a mut String,
    verbose: bool,
    field_separator: &'a str,
    kv_separator: &'a str,
}

impl Visitor for CustomRenderer<'_> {
    type Acc = ();

    fn visit(&mut self, name: &str, node: &DataSet, _parent: &()) {
        if node.key_count() == 0 && !self.verbose {
            return;
        }
        self.output.push_str(name);
        for (key, value) in node.values() {
            self.output.push_str(self.field_separator);
            self.output.push_str(key);
            self.output.push_str(self.kv_separator);
            self.output.push_str(&value.to_string());
        }
        self.output.push('\n');
    }
}
