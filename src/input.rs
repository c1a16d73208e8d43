use std::io::{self, BufRead};

/// How the input is cut into units that are encoded/decoded independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// One unit per line. `\n` and a trailing `\r` are not part of the unit.
    Lines,
    /// The entire input, newlines included, as a single unit.
    Whole,
}

/// Iterator over the units of a reader.
pub struct Units<R> {
    reader: R,
    scan: Scan,
    done: bool,
}

impl<R: BufRead> Units<R> {
    pub fn new(reader: R, scan: Scan) -> Self {
        Self {
            reader,
            scan,
            done: false,
        }
    }

    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn whole(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut all = Vec::new();
        self.reader.read_to_end(&mut all)?;
        Ok(Some(all))
    }
}

impl<R: BufRead> Iterator for Units<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let unit = match self.scan {
            Scan::Lines => self.next_line(),
            Scan::Whole => {
                self.done = true;
                self.whole()
            }
        };

        match unit {
            Ok(Some(unit)) => Some(Ok(unit)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
