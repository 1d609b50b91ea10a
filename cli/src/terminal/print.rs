use std::fmt::Display;
use std::io::{self, Write};

use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Terminal writer for everything the user is meant to read.
///
/// Decoration (headers, separators) is dropped once `quiet` is non-zero,
/// labelled results are always written.
pub struct Console<W: Write> {
    out: W,
    quiet: u8,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, quiet: u8) -> Self {
        Self { out, quiet }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    pub fn header(&mut self, msg: &str) -> io::Result<()> {
        if self.quiet > 0 {
            return Ok(());
        }

        let formatted: String = format!("⟦ {} ⟧", msg);
        let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        let line: ColoredString = format!(
            "{}{}{}",
            "─".repeat(left),
            formatted.to_uppercase().bright_green(),
            "─".repeat(right)
        )
        .bright_black();

        self.print(&format!("{}", line))
    }

    pub fn separator(&mut self) -> io::Result<()> {
        if self.quiet > 0 {
            return Ok(());
        }
        let sep: ColoredString = "─".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
        self.print(&format!("{}", sep))
    }

    pub fn fat_separator(&mut self) -> io::Result<()> {
        if self.quiet > 0 {
            return Ok(());
        }
        let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
        self.print(&format!("{}", sep))
    }

    pub fn centerln(&mut self, msg: &str) -> io::Result<()> {
        if self.quiet > 0 {
            return Ok(());
        }
        let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
        self.print(&format!("{}{}", space, msg))
    }

    pub fn success(&mut self, msg: impl Display) -> io::Result<()> {
        self.labelled("[+]".green().bold(), msg)
    }

    pub fn notice(&mut self, msg: impl Display) -> io::Result<()> {
        self.labelled("[*]".yellow().bold(), msg)
    }

    pub fn error(&mut self, msg: impl Display) -> io::Result<()> {
        self.labelled("[-]".red().bold(), msg)
    }

    pub fn print_status<T: AsRef<str>>(&mut self, msg: T) -> io::Result<()> {
        let prefix: ColoredString = ">".color(colors::SEPARATOR);
        let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
        self.print(&message)
    }

    /// Prints `key....: value`, padding every key to `key_width`.
    pub fn aligned_line(&mut self, key: &str, value: &str, key_width: usize) -> io::Result<()> {
        let dots: String = ".".repeat((key_width + 1).saturating_sub(UnicodeWidthStr::width(key)));
        let colon: String = format!(
            "{}{}",
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR)
        );
        self.print_status(format!(
            "{}{} {}",
            key.color(colors::PRIMARY),
            colon,
            value.color(colors::TEXT_DEFAULT)
        ))
    }

    /// Prints `(key, value)` rows with their keys aligned to the widest one.
    pub fn aligned_rows(&mut self, rows: &[(&str, &str)]) -> io::Result<()> {
        let key_width = rows
            .iter()
            .map(|(key, _)| UnicodeWidthStr::width(*key))
            .max()
            .unwrap_or(0);

        for (key, value) in rows {
            self.aligned_line(key, value, key_width)?;
        }
        Ok(())
    }

    pub fn menu_entry(&mut self, idx: usize, label: &str) -> io::Result<()> {
        let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
        let output: String = format!(
            "{} {}",
            idx_str.color(colors::SEPARATOR),
            label.color(colors::TEXT_DEFAULT)
        );
        self.print(&output)
    }

    /// Writes `msg` without a newline and flushes so it shows before input is read.
    pub fn prompt(&mut self, msg: &str) -> io::Result<()> {
        write!(self.out, "{} {}: ", ">".color(colors::ACCENT), msg)?;
        self.out.flush()
    }

    fn labelled(&mut self, label: ColoredString, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "{} {}", label, msg)
    }
}
