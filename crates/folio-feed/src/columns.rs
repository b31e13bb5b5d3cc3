//! Column resolution for news sheets.
//!
//! Editors label columns freely (English or Bulgarian, any case), and the
//! query endpoint sometimes drops labels entirely. Each [`NewsField`] is
//! located by running a chain of [`ColumnStrategy`] implementations; the
//! first strategy that finds a column wins.

/// Field of a news post backed by a sheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsField {
    Slug,
    Date,
    Title,
    Summary,
    Content,
    Image,
}

impl NewsField {
    pub const ALL: [NewsField; 6] = [
        NewsField::Slug,
        NewsField::Date,
        NewsField::Title,
        NewsField::Summary,
        NewsField::Content,
        NewsField::Image,
    ];

    /// Accepted header labels, already lower-cased.
    #[must_use]
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            NewsField::Slug => &["slug", "id", "ключ", "slug/id"],
            NewsField::Date => &["date", "дата", "дата на публикуване", "published", "published date"],
            NewsField::Title => &["title", "заглавие", "име", "новина"],
            NewsField::Summary => &["summary", "excerpt", "кратко", "кратък текст", "описание", "резюме"],
            NewsField::Content => &["content", "text", "body", "текст", "пълна новина", "съдържание"],
            NewsField::Image => &["image", "img", "photo", "снимка", "картинка", "image url", "url снимка"],
        }
    }

    /// Column index in the standard layout `slug, date, title, summary, content, image`.
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            NewsField::Slug => 0,
            NewsField::Date => 1,
            NewsField::Title => 2,
            NewsField::Summary => 3,
            NewsField::Content => 4,
            NewsField::Image => 5,
        }
    }
}

/// Way of locating a field's column from the normalized header labels.
pub trait ColumnStrategy: Send + Sync {
    fn locate(&self, field: NewsField, labels: &[String]) -> Option<usize>;
}

/// Finds the first synonym present among the labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelMatch;

impl ColumnStrategy for LabelMatch {
    fn locate(&self, field: NewsField, labels: &[String]) -> Option<usize> {
        field
            .synonyms()
            .iter()
            .find_map(|name| labels.iter().position(|label| label == name))
    }
}

/// Assumes the standard column order when the table is wide enough.
#[derive(Debug, Clone, Copy, Default)]
pub struct Positional;

impl ColumnStrategy for Positional {
    fn locate(&self, field: NewsField, labels: &[String]) -> Option<usize> {
        let index = field.position();
        (labels.len() > index).then_some(index)
    }
}

/// Default strategy chain: labels first, then standard positions.
pub static DEFAULT_STRATEGIES: [&dyn ColumnStrategy; 2] = [&LabelMatch, &Positional];

/// Resolved column index per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [Option<usize>; 6],
}

impl ColumnMap {
    /// Resolve every field against `labels` using `strategies` in order.
    #[must_use]
    pub fn resolve(labels: &[String], strategies: &[&dyn ColumnStrategy]) -> Self {
        let mut indices = [None; 6];
        for field in NewsField::ALL {
            indices[field.position()] = strategies
                .iter()
                .find_map(|strategy| strategy.locate(field, labels));
        }
        Self { indices }
    }

    /// Column index for `field`, if any strategy found one.
    #[must_use]
    pub fn get(&self, field: NewsField) -> Option<usize> {
        self.indices[field.position()]
    }
}
