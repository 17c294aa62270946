//! Per-hostname notices.
//!
//! Every looked up hostname produces exactly one call to [`Report::notice`].
//! The line format written by [`NoticeWriter`] is `<hostname>,<value>` where
//! value is `0.0.0.0` when the name does not exist and the resolver error
//! text otherwise. Resolved hostnames are not written to the line channel.

use std::io::{self, Write};

use super::lookup::Outcome;

pub trait Report {
    fn notice(&mut self, host: &str, outcome: &Outcome) -> io::Result<()>;
}

pub struct NoticeWriter<W: Write> {
    out: W,
}

impl<W: Write> NoticeWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for NoticeWriter<W> {
    fn notice(&mut self, host: &str, outcome: &Outcome) -> io::Result<()> {
        match outcome.notice_value() {
            Some(value) => {
                writeln!(self.out, "{},{}", host, value)?;
                self.out.flush()
            }
            None => {
                if let Outcome::Resolved(ips) = outcome {
                    debug!("'{}' resolved to {:?}", host, ips);
                }
                Ok(())
            }
        }
    }
}
