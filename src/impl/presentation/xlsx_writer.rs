use std::path::Path;

use fractic_server_error::ServerError;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::{
    entities::{CellValue, SheetLayout},
    errors::WorkbookWriteError,
};

const HEADER_FILL: u32 = 0x4472C4;

pub(crate) struct XlsxWriter {
    header_format: Format,
    cell_format: Format,
}

impl XlsxWriter {
    pub(crate) fn new() -> Self {
        Self {
            header_format: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
            cell_format: Format::new().set_border(FormatBorder::Thin),
        }
    }

    /// Serializes the sheets into an `.xlsx` document. `path` only labels
    /// errors; nothing is written to disk here.
    pub(crate) fn write(
        &self,
        sheets: &[SheetLayout],
        path: &Path,
    ) -> Result<Vec<u8>, ServerError> {
        self.build(sheets)
            .map_err(|e| WorkbookWriteError::with_debug(&path.display().to_string(), &e))
    }

    fn build(&self, sheets: &[SheetLayout]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            self.fill(worksheet, sheet)?;
        }
        workbook.save_to_buffer()
    }

    fn fill(&self, worksheet: &mut Worksheet, sheet: &SheetLayout) -> Result<(), XlsxError> {
        worksheet.set_name(sheet.name)?;
        for (col, width) in sheet.column_widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }
        for (col, title) in sheet.header.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &self.header_format)?;
        }
        for (i, row) in sheet.rows.iter().enumerate() {
            let row_idx = (i + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                let col = col as u16;
                match cell {
                    CellValue::Text(s) => {
                        worksheet.write_string_with_format(row_idx, col, s, &self.cell_format)?
                    }
                    CellValue::Number(n) => {
                        worksheet.write_number_with_format(row_idx, col, *n, &self.cell_format)?
                    }
                    CellValue::Empty => worksheet.write_blank(row_idx, col, &self.cell_format)?,
                };
            }
        }
        Ok(())
    }
}
