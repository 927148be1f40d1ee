use core::fmt;

use super::{Message, Record};

/// Interal type for printing a message in dig style
///
/// This is only exposed to users of this library as `impl fmt::Display`.
pub(super) struct DigPrinter<'a> {
    pub msg: &'a Message,
}

impl<'a> fmt::Display for DigPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header
        writeln!(f, "{}", self.msg.header())?;

        // Question
        let questions = self.msg.questions();
        if !questions.is_empty() {
            writeln!(f, "\n;; QUESTION SECTION:")?;
            for item in questions {
                writeln!(f, ";{}", item)?;
            }
        }

        write_section(f, "ANSWER", self.msg.answers())?;
        write_section(f, "AUTHORITY", self.msg.authority())?;
        write_section(f, "ADDITIONAL", self.msg.additional())
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    records: &[Record],
) -> fmt::Result {
    if records.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n;; {} SECTION:", name)?;
    for item in records {
        writeln!(f, "{}", item)?;
    }
    Ok(())
}
