//! Terminal writer distinguishing permanent lines from an overwritable
//! provisional line.

use std::io::{self, Stdout, Write, stdout};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;

/// Writer that can overwrite its last provisional line in place.
///
/// Permanent lines ([`LineWriter::writeln`]) are always written. The
/// provisional line ([`LineWriter::provln`]) is only written when the writer
/// is enabled; when disabled (typically: output is not a tty) provisional
/// writes are dropped entirely so rapid progress updates do not flood
/// redirected output.
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    out: W,
    enabled: bool,
    /// A provisional line is currently displayed and must be cleared
    /// before the next write.
    pending: bool,
}

impl LineWriter<Stdout> {
    /// Writer on stdout. With `check_tty` set, live output is enabled only
    /// when stdout is an interactive terminal; without it, always enabled.
    pub fn stdout(check_tty: bool) -> Self {
        let out = stdout();
        let enabled = !check_tty || out.is_tty();
        Self::new(out, enabled)
    }
}

impl<W: Write> LineWriter<W> {
    /// Writer on an arbitrary sink.
    pub fn new(out: W, enabled: bool) -> Self {
        Self {
            out,
            enabled,
            pending: false,
        }
    }

    /// Whether provisional lines are being rendered.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Write a permanent line, clearing any pending provisional line first.
    pub fn writeln(&mut self, text: &str) -> io::Result<()> {
        if self.pending {
            self.clear_line()?;
            self.pending = false;
        }
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Write or overwrite the provisional line. No-op when disabled.
    pub fn provln(&mut self, text: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.clear_line()?;
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.pending = true;
        Ok(())
    }

    fn clear_line(&mut self) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writeln_appends_lines() {
        let mut writer = LineWriter::new(Vec::new(), false);
        writer.writeln("first").unwrap();
        writer.writeln("second").unwrap();
        assert_eq!(String::from_utf8(writer.out).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_provln_is_noop_when_disabled() {
        let mut writer = LineWriter::new(Vec::new(), false);
        writer.provln("progress 1/10").unwrap();
        assert!(writer.out.is_empty());
    }

    #[test]
    fn test_provln_writes_when_enabled() {
        let mut writer = LineWriter::new(Vec::new(), true);
        writer.provln("progress 1/10").unwrap();
        let text = String::from_utf8(writer.out).unwrap();
        assert!(text.contains("progress 1/10"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_writeln_clears_pending_provisional_line() {
        let mut writer = LineWriter::new(Vec::new(), true);
        writer.provln("progress 1/10").unwrap();
        writer.writeln("milestone").unwrap();
        let text = String::from_utf8(writer.out).unwrap();
        assert!(text.ends_with("milestone\n"));
        // the clear sequence separates provisional from permanent text
        let after_progress = text.split("progress 1/10").nth(1).unwrap();
        assert!(after_progress.contains("milestone"));
    }

    #[test]
    fn test_repeated_provln_overwrites() {
        let mut writer = LineWriter::new(Vec::new(), true);
        writer.provln("1/3").unwrap();
        writer.provln("2/3").unwrap();
        let text = String::from_utf8(writer.out).unwrap();
        assert!(text.contains("1/3"));
        assert!(text.contains("2/3"));
    }
}
