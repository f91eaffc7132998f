//! Line output for scope tables
//!
//! This module provides `LineFormatter` which writes each row in its line
//! form, optionally coloring the inclusion and selection symbols.

use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scope::OutputRow;

use super::config::OutputConfig;

/// Formatter for scope table rows.
pub struct LineFormatter {
    config: OutputConfig,
}

impl LineFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Format rows into a plain string, one line per row.
    pub fn format(&self, rows: &[OutputRow]) -> String {
        let mut output = String::new();
        for row in rows {
            output.push_str(&row.to_string());
            output.push('\n');
        }
        output
    }

    pub fn print(&self, rows: &[OutputRow]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_rows(&mut stdout, rows)
    }

    /// Write rows to any color-capable writer.
    pub fn write_rows<W: WriteColor>(&self, out: &mut W, rows: &[OutputRow]) -> io::Result<()> {
        for row in rows {
            self.write_row(out, row)?;
        }
        Ok(())
    }

    fn write_row<W: WriteColor>(&self, out: &mut W, row: &OutputRow) -> io::Result<()> {
        write!(
            out,
            "{} aria-level={} aria-posinset={} aria-setsize={} ",
            row.id, row.level, row.position_in_set, row.set_size
        )?;

        self.write_colored(out, included_color(row.included_symbol), false, row.included_symbol)?;
        write!(out, " ")?;
        let selected_color = if row.is_selected() { Some(Color::Cyan) } else { None };
        self.write_colored(out, selected_color, row.is_selected(), row.selected_symbol)?;
        write!(out, " ")?;

        if self.config.use_color && row.is_parent() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}", row.name)?;
            out.reset()?;
            writeln!(out)
        } else {
            writeln!(out, "{}", row.name)
        }
    }

    fn write_colored<W: WriteColor>(
        &self,
        out: &mut W,
        color: Option<Color>,
        bold: bool,
        symbol: char,
    ) -> io::Result<()> {
        if self.config.use_color && color.is_some() {
            out.set_color(ColorSpec::new().set_fg(color).set_bold(bold))?;
            write!(out, "{}", symbol)?;
            out.reset()
        } else {
            write!(out, "{}", symbol)
        }
    }
}

/// Render rows into a no-color buffer and return them as text.
pub fn render_plain(rows: &[OutputRow]) -> io::Result<String> {
    let mut buffer = Buffer::no_color();
    LineFormatter::new(OutputConfig::plain()).write_rows(&mut buffer, rows)?;
    String::from_utf8(buffer.into_inner()).map_err(io::Error::other)
}

fn included_color(symbol: char) -> Option<Color> {
    match symbol {
        '+' => Some(Color::Green),
        '*' => Some(Color::Yellow),
        '-' => Some(Color::Red),
        _ => None,
    }
}
