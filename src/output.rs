use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;

const JSON_INDENT: &[u8] = b"   ";

/// Prints a section name, then `[id] title` for every entry, then a blank line.
pub fn write_ids<W: Write>(
    out: &mut W,
    section: &str,
    matches: &BTreeMap<String, String>,
) -> Result<()> {
    writeln!(out, "{section}:")?;
    for (id, title) in matches {
        writeln!(out, "[{id}] {title}")?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", to_json_string(value)?)?;
    Ok(())
}
