use crate::feed::date::PubDate;
use crate::util::escape;

/// One news article, ready to be placed into a page.
///
/// Every field is HTML-escaped exactly once, here, at construction time. The
/// renderer interpolates fields as-is and must never escape them again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    title: String,
    link: String,
    description: String,
    date: String,
    image: Option<String>,
}

impl ArticleRecord {
    /// Builds a record from raw (unescaped) feed values.
    pub fn new(
        title: &str,
        link: &str,
        description: &str,
        date: &PubDate,
        image: Option<&str>,
    ) -> Self {
        Self {
            title: escape(title).into_owned(),
            link: escape(link).into_owned(),
            description: escape(description).into_owned(),
            date: escape(date.as_str()).into_owned(),
            image: image.map(|url| escape(url).into_owned()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
