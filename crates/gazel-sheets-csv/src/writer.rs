//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator, ValueMode};
use gazel_sheets_core::Sheet;
use gazel_sheets_formula::evaluate;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a sheet to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        sheet: &Sheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, file, options)
    }

    /// Write a sheet to a string
    pub fn write_string(sheet: &Sheet, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buffer = Vec::new();
        Self::write(sheet, &mut buffer, options)?;
        // The csv writer only emits what it was given, and cell texts are UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write a sheet to a writer
    ///
    /// Covers the rectangle from `A1` to the bottom-right corner of the used
    /// range. An empty sheet writes nothing.
    pub fn write<W: Write>(sheet: &Sheet, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let mut csv_writer = Self::builder(options).from_writer(writer);

        if let Some(range) = sheet.used_range() {
            for row in 0..=range.end.row {
                let mut record = Vec::with_capacity(range.end.col as usize + 1);

                for col in 0..=range.end.col {
                    let raw = sheet.cell_at(row, col);
                    let text = match options.values {
                        ValueMode::Raw => raw.to_string(),
                        ValueMode::Display => evaluate(raw, sheet),
                    };
                    record.push(text);
                }

                csv_writer.write_record(&record)?;
            }
            log::debug!(
                "wrote {} row(s) of {} ({:?} values)",
                range.end.row + 1,
                sheet.name(),
                options.values
            );
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Write rows of already computed texts
    ///
    /// `options.values` is ignored: every field is written as given.
    pub fn write_rows<W, I, R, S>(rows: I, writer: W, options: &CsvWriteOptions) -> CsvResult<()>
    where
        W: Write,
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut csv_writer = Self::builder(options).from_writer(writer);
        for row in rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    fn builder(options: &CsvWriteOptions) -> csv::WriterBuilder {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true);
        builder
    }
}
