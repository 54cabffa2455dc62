use crate::types::RankedEntry;
use crate::Error;

use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `word: count` line per entry, in rank order.
    #[default]
    Lines,
    /// A `word,count` header followed by one CSV record per entry.
    Csv,
}

impl OutputFormat {
    /// Writes the ranked entries to `writer`. Nothing is written after the last entry
    /// (no summary line), and an empty ranking produces no `Lines` output at all.
    pub fn write_ranked_entries<W: Write>(
        self,
        writer: W,
        ranked_entries: &[RankedEntry],
    ) -> Result<(), Error> {
        match self {
            OutputFormat::Lines => write_lines(writer, ranked_entries),
            OutputFormat::Csv => write_csv(writer, ranked_entries),
        }
    }
}

fn write_lines<W: Write>(mut writer: W, ranked_entries: &[RankedEntry]) -> Result<(), Error> {
    for (token, frequency) in ranked_entries {
        writeln!(writer, "{}: {}", token, frequency)
            .map_err(|err| Error::OutputError(err.to_string()))?;
    }

    writer
        .flush()
        .map_err(|err| Error::OutputError(err.to_string()))
}

fn write_csv<W: Write>(writer: W, ranked_entries: &[RankedEntry]) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["word", "count"])?;
    for (token, frequency) in ranked_entries {
        csv_writer.write_record([token.as_str(), frequency.to_string().as_str()])?;
    }

    csv_writer
        .flush()
        .map_err(|err| Error::OutputError(err.to_string()))
}
