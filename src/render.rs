// src/render.rs
use std::io::{self, Write};

use crate::models::server::{RankedServer, ServerListResult, Tag, DISPLAY_FIELDS};
use crate::utils::BrowserError;

type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowStyle {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
}

fn apply(style: &mut RowStyle, tag: Tag) {
    match tag {
        Tag::Even => style.background = Some((0xdd, 0xdd, 0xdd)),
        Tag::Odd => style.background = Some((0xee, 0xee, 0xee)),
        Tag::Full => style.foreground = Some((0xff, 0xa5, 0x00)),
        Tag::Empty => style.foreground = Some((0x80, 0x80, 0x80)),
        Tag::NotEmpty => style.foreground = Some((0x00, 0x00, 0xff)),
    }
}

/// Later tags override earlier ones on the same channel.
pub fn row_style(tags: &[Tag]) -> RowStyle {
    let mut style = RowStyle::default();
    for tag in tags {
        apply(&mut style, *tag);
    }
    style
}

impl RowStyle {
    fn prefix(&self) -> String {
        let mut codes = Vec::new();
        if let Some((r, g, b)) = self.background {
            codes.push(format!("48;2;{};{};{}", r, g, b));
        }
        if let Some((r, g, b)) = self.foreground {
            codes.push(format!("38;2;{};{};{}", r, g, b));
        }
        if codes.is_empty() {
            String::new()
        } else {
            format!("\x1b[{}m", codes.join(";"))
        }
    }
}

/// Server text comes off the network; control characters must not reach the terminal.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}

fn cells(server: &RankedServer) -> Vec<String> {
    let mut cells = Vec::with_capacity(DISPLAY_FIELDS.len() + 2);
    cells.push(server.position.to_string());
    cells.push(sanitize(&server.name));
    cells.extend(server.display.iter().map(|value| sanitize(&value.to_string())));
    cells
}

fn headings() -> Vec<String> {
    let mut headings = vec!["#".to_string(), "Name".to_string()];
    headings.extend(DISPLAY_FIELDS.iter().map(|field| field.heading.to_string()));
    headings
}

fn pad_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Writes one line per server, styled by its tags when `color` is set.
pub fn render_table<W: Write>(out: &mut W, result: &ServerListResult, color: bool) -> io::Result<()> {
    let header = headings();
    let rows: Vec<Vec<String>> = result.servers.iter().map(cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", pad_row(&header, &widths))?;
    for (server, row) in result.servers.iter().zip(&rows) {
        let line = pad_row(row, &widths);
        let prefix = if color { row_style(&server.tags).prefix() } else { String::new() };
        if prefix.is_empty() {
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}{}\x1b[0m", prefix, line)?;
        }
    }
    Ok(())
}

pub fn status_line(result: &ServerListResult) -> Result<String, BrowserError> {
    Ok(format!(
        "Found {} servers, {} responsive.",
        sanitize(&result.summary.total_servers()?.to_string()),
        result.responsive()
    ))
}
