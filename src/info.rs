use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// The producer recorded in every document this crate writes
pub const CREATOR: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Document metadata written to the PDF's information dictionary
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Acrobat suggests a comma separated list
    pub keywords: Option<String>,
    /// When the document was made. If [None], the time of writing is used.
    pub creation_date: Option<DateTime<FixedOffset>>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn with_title<S: Into<String>>(self, title: S) -> Info {
        Info {
            title: Some(title.into()),
            ..self
        }
    }

    pub fn with_author<S: Into<String>>(self, author: S) -> Info {
        Info {
            author: Some(author.into()),
            ..self
        }
    }

    pub fn with_subject<S: Into<String>>(self, subject: S) -> Info {
        Info {
            subject: Some(subject.into()),
            ..self
        }
    }

    pub fn with_keywords<S: Into<String>>(self, keywords: S) -> Info {
        Info {
            keywords: Some(keywords.into()),
            ..self
        }
    }

    pub fn with_creation_date(self, date: DateTime<FixedOffset>) -> Info {
        Info {
            creation_date: Some(date),
            ..self
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords));
        }
        info.creator(TextStr(CREATOR));

        let created = self
            .creation_date
            .unwrap_or_else(|| Local::now().fixed_offset());
        info.creation_date(pdf_date(&created));
    }
}

/// Convert a timestamp to a PDF date, keeping its UTC offset
fn pdf_date(date: &DateTime<FixedOffset>) -> PDate {
    let offset = date.offset().local_minus_utc();
    let offset_hours = offset / 3600;
    let offset_minutes = ((offset % 3600) / 60).abs();

    PDate::new(date.year() as u16)
        .month(date.month() as u8)
        .day(date.day() as u8)
        .hour(date.hour() as u8)
        .minute(date.minute() as u8)
        .second(date.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}
