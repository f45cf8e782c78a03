use csv::{ReaderBuilder, StringRecord};

const DELIMITER: u8 = b';';

/// A downloaded dataset snapshot, held as text.
pub struct Dataset {
    text: String,
}

impl Dataset {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Size of the body in characters, not bytes
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Lazily parse the body into `;`-delimited records.
    ///
    /// The header is returned as the first record; callers skip it. Records
    /// of differing lengths are passed through so the loader can report them.
    pub fn records(&self) -> impl Iterator<Item = csv::Result<StringRecord>> + '_ {
        ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .from_reader(self.text.as_bytes())
            .into_records()
    }
}
