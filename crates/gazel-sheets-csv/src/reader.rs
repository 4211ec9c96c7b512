//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use gazel_sheets_core::Sheet;

const DEFAULT_SHEET_NAME: &str = "Sheet 1";

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a sheet named after the file
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut sheet = Self::read(file, options)?;

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            sheet.set_name(stem);
        }
        Ok(sheet)
    }

    /// Read CSV text into a sheet
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Sheet> {
        Self::read(text.as_bytes(), options)
    }

    /// Read CSV from a reader into a sheet
    ///
    /// Every field is stored as raw text at its record/field position. Empty
    /// fields leave their cell empty.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let trim = if options.trim_fields {
            csv::Trim::All
        } else {
            csv::Trim::None
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .trim(trim)
            .flexible(true)
            .from_reader(reader);

        let mut sheet = Sheet::new(DEFAULT_SHEET_NAME);
        let mut row_idx = 0u32;

        for result in csv_reader.records() {
            let record = result?;
            Self::store_record(&mut sheet, row_idx, &record)?;
            row_idx += 1;
        }

        log::debug!(
            "read {} row(s) into {} ({} non-empty cell(s))",
            row_idx,
            sheet.name(),
            sheet.cell_count()
        );
        Ok(sheet)
    }

    fn store_record(sheet: &mut Sheet, row: u32, record: &csv::StringRecord) -> CsvResult<()> {
        for (col, field) in record.iter().enumerate() {
            if field.is_empty() {
                continue;
            }
            sheet.set_cell_at(row, col as u32, field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_read_keeps_raw_text() {
        let sheet = CsvReader::read_str(
            "Item,Amount\nApples,10\nPears,\"1,500\"\nTotal,=SUM(B2:B3)\n",
            &CsvReadOptions::default(),
        )
        .unwrap();

        assert_eq!(sheet.cell("A1").unwrap(), "Item");
        assert_eq!(sheet.cell("B1").unwrap(), "Amount");
        assert_eq!(sheet.cell("B3").unwrap(), "1,500");
        assert_eq!(sheet.cell("B4").unwrap(), "=SUM(B2:B3)");
        assert_eq!(sheet.cell_count(), 8);
    }

    #[test]
    fn test_read_first_line_is_row_zero() {
        let sheet = CsvReader::read_str("1,2\n3,4\n", &CsvReadOptions::default()).unwrap();
        assert_eq!(sheet.cell_at(0, 0), "1");
        assert_eq!(sheet.cell_at(1, 1), "4");
        assert_eq!(sheet.used_range(), gazel_sheets_core::CellRange::parse("A1:B2").ok());
    }

    #[test]
    fn test_read_blank_lines_are_skipped() {
        let sheet = CsvReader::read_str("a\n\nb,c\n", &CsvReadOptions::default()).unwrap();
        assert_eq!(sheet.cell_at(0, 0), "a");
        assert_eq!(sheet.cell_at(1, 1), "c");
    }

    #[test]
    fn test_read_skips_empty_fields_and_ragged_rows() {
        let sheet = CsvReader::read_str("a,,c\nd\n,,,g\n", &CsvReadOptions::default()).unwrap();
        assert_eq!(sheet.cell_count(), 4);
        assert_eq!(sheet.cell_at(0, 1), "");
        assert_eq!(sheet.cell_at(2, 3), "g");
    }

    #[test]
    fn test_read_trim_and_delimiter() {
        let options = CsvReadOptions {
            delimiter: b';',
            trim_fields: true,
            ..Default::default()
        };
        let sheet = CsvReader::read_str(" x ; =A1+1 \n", &options).unwrap();
        assert_eq!(sheet.cell_at(0, 0), "x");
        assert_eq!(sheet.cell_at(0, 1), "=A1+1");
    }

    #[test]
    fn test_read_grows_past_default_size() {
        let line = (0..20).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        let text = std::iter::repeat(line).take(40).collect::<Vec<_>>().join("\n");
        let sheet = CsvReader::read_str(&text, &CsvReadOptions::default()).unwrap();
        assert_eq!(sheet.rows(), 40);
        assert_eq!(sheet.cols(), 20);
    }

    #[test]
    fn test_read_file_names_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("budget.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "a,b").unwrap();
        drop(file);

        let sheet = CsvReader::read_file(&path, &CsvReadOptions::default()).unwrap();
        assert_eq!(sheet.name(), "budget");
        assert_eq!(sheet.cell_at(0, 1), "b");
    }

    #[test]
    fn test_read_missing_file() {
        let result = CsvReader::read_file("/nonexistent/file.csv", &CsvReadOptions::default());
        assert!(matches!(result, Err(crate::CsvError::Io(_))));
    }
}
