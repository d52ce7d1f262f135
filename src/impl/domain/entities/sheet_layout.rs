#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    /// Bordered cell without a value.
    Empty,
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(n.into())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// One worksheet before it is written: a styled header row at the top,
/// followed by bordered data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub name: &'static str,
    /// Width of each column from `A` onwards, in character units.
    pub column_widths: Vec<f64>,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetLayout {
    /// Values of the first column of every data row.
    pub fn keys(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|r| r.first().and_then(CellValue::as_text))
            .collect()
    }

    /// Value next to `key` on a key-value sheet.
    pub fn value_of(&self, key: &str) -> Option<&CellValue> {
        self.rows
            .iter()
            .find(|r| r.first().and_then(CellValue::as_text) == Some(key))
            .and_then(|r| r.get(1))
    }
}
