//! Text statistics used to tell text from binary content.
//!
//! The classification mirrors git's `gather_stats`: carriage returns and
//! line feeds are counted but not classified, a handful of control
//! characters count as printable, and a trailing DOS end-of-file marker is
//! forgiven.

/// DOS end-of-file marker (`^Z`).
const DOS_EOF: u8 = 0x1a;

/// Counts gathered over one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStats {
    /// NUL bytes.
    pub nul: u64,
    /// Carriage returns, paired or not.
    pub cr: u64,
    /// Line feeds, paired or not.
    pub lf: u64,
    /// `\r\n` pairs.
    pub crlf: u64,
    /// Printable bytes.
    pub printable: u64,
    /// Non-printable bytes.
    pub nonprintable: u64,
}

impl TextStats {
    /// Gathers statistics over `buf` in a single pass.
    pub fn gather(buf: &[u8]) -> Self {
        let mut stats = Self::default();

        for (i, &c) in buf.iter().enumerate() {
            match c {
                b'\r' => {
                    stats.cr += 1;
                    if buf.get(i + 1) == Some(&b'\n') {
                        stats.crlf += 1;
                    }
                }
                b'\n' => stats.lf += 1,
                0x7f => stats.nonprintable += 1,
                // backspace, tab, escape, form feed
                0x08 | b'\t' | 0x1b | 0x0c => stats.printable += 1,
                0 => {
                    stats.nul += 1;
                    stats.nonprintable += 1;
                }
                c if c < 0x20 => stats.nonprintable += 1,
                _ => stats.printable += 1,
            }
        }

        if buf.last() == Some(&DOS_EOF) {
            stats.nonprintable -= 1;
        }

        stats
    }

    /// Returns true if the counts look like binary content.
    ///
    /// Any NUL byte makes a buffer binary; otherwise more than one
    /// non-printable byte per 128 printable ones does.
    pub fn is_binary(&self) -> bool {
        self.nul > 0 || (self.printable >> 7) < self.nonprintable
    }

    /// Returns the number of carriage returns not followed by a line feed.
    pub fn bare_cr(&self) -> u64 {
        self.cr - self.crlf
    }

    /// Returns the number of line feeds not preceded by a carriage return.
    pub fn bare_lf(&self) -> u64 {
        self.lf - self.crlf
    }
}
