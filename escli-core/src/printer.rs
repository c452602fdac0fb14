use crate::{model::Hit, prelude::*};
use std::io::Write;

pub fn index_names(out: &mut impl Write, names: &[String]) -> IoResult<()> {
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

pub fn search_summary(out: &mut impl Write, status: u16, hits: usize) -> IoResult<()> {
    writeln!(out, "status: {}, hits: {}", status, hits)
}

/// Печатает каждый документ отдельным JSON-блоком с отступом в два пробела
pub fn hits(out: &mut impl Write, hits: &[Hit]) -> Result<()> {
    for hit in hits {
        serde_json::to_writer_pretty(&mut *out, hit)?;
        writeln!(out)?;
    }
    Ok(())
}
