/// Reading direction of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Interface copy for one locale.
///
/// Values are inserted into the page verbatim and must already be valid HTML
/// text (no unescaped `<`, `>` or `&`).
#[derive(Debug)]
pub struct LocaleStrings {
    /// `lang` attribute value.
    pub code: &'static str,
    pub direction: Direction,
    /// Output filename; also the target of the other page's language switch.
    pub filename: &'static str,
    pub brand: &'static str,
    pub page_title: &'static str,
    pub lead: &'static str,
    /// Landing page the navigation links point into.
    pub home_page: &'static str,
    pub nav_home: &'static str,
    pub nav_news: &'static str,
    pub nav_features: &'static str,
    pub nav_about: &'static str,
    /// Label of the link to the companion page, written in the companion's language.
    pub switch_label: &'static str,
    pub read_more: &'static str,
    pub image_alt: &'static str,
    pub rights: &'static str,
}

static ENGLISH: LocaleStrings = LocaleStrings {
    code: "en",
    direction: Direction::Ltr,
    filename: "news.html",
    brand: "HotelNews",
    page_title: "Latest Articles",
    lead: "Hand\u{2011}curated news and articles from trusted hospitality and tourism sources.",
    home_page: "index.html",
    nav_home: "Home",
    nav_news: "Latest Articles",
    nav_features: "Features",
    nav_about: "About",
    switch_label: "فارسی",
    read_more: "Read More",
    image_alt: "News image",
    rights: "All rights reserved.",
};

static FARSI: LocaleStrings = LocaleStrings {
    code: "fa",
    direction: Direction::Rtl,
    filename: "news-fa.html",
    brand: "هتل نیوز",
    page_title: "آخرین اخبار و مقالات",
    lead: "تمامی اخبار از منابع معتبر هتلداری و گردشگری در این بخش گردآوری شده است.",
    home_page: "index-fa.html",
    nav_home: "خانه",
    nav_news: "مقالات",
    nav_features: "ویژگی‌ها",
    nav_about: "درباره ما",
    switch_label: "English",
    read_more: "بیشتر بخوانید",
    image_alt: "تصویر خبر",
    rights: "تمام حقوق محفوظ است.",
};

/// The two page locales.
///
/// `English` is the default, left-to-right locale; `Farsi` is the alternate,
/// right-to-left one. Only interface text is localized, never article content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Farsi,
}

impl Locale {
    #[cfg(test)]
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Farsi];

    pub fn strings(self) -> &'static LocaleStrings {
        match self {
            Locale::English => &ENGLISH,
            Locale::Farsi => &FARSI,
        }
    }

    /// The companion locale linked from this locale's language switch.
    pub fn other(self) -> Locale {
        match self {
            Locale::English => Locale::Farsi,
            Locale::Farsi => Locale::English,
        }
    }

    pub fn code(self) -> &'static str {
        self.strings().code
    }

    pub fn direction(self) -> Direction {
        self.strings().direction
    }

    pub fn filename(self) -> &'static str {
        self.strings().filename
    }
}
