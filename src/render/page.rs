use crate::feed::ArticleRecord;
use crate::render::locale::Locale;

/// Year in the footer copyright line. Fixed so output stays deterministic.
const COPYRIGHT_YEAR: u16 = 2025;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.10.5/font/bootstrap-icons.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js";
const SITE_CSS: &str = "styles.css";

/// A complete HTML document for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    locale: Locale,
    html: String,
}

impl RenderedPage {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Filename the page is published under.
    pub fn filename(&self) -> &'static str {
        self.locale.filename()
    }
}

/// Renders `records` into a full page for `locale`.
///
/// Record fields are already escaped and are interpolated verbatim. The
/// output depends only on the arguments, so identical inputs give
/// byte-identical pages. An empty slice renders an empty article grid.
pub fn render(records: &[ArticleRecord], locale: Locale) -> RenderedPage {
    let s = locale.strings();

    let cards = records
        .iter()
        .map(|record| render_card(record, locale))
        .collect::<Vec<_>>()
        .join("\n");

    let html = format!(
        r##"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} | {brand_en}</title>
  <meta name="description" content="{lead}">
  <link rel="stylesheet" href="{bootstrap_css}">
  <link rel="stylesheet" href="{icons_css}">
  <link rel="stylesheet" href="{site_css}">
</head>
<body>
  <nav class="navbar navbar-expand-lg navbar-light bg-light shadow-sm">
    <div class="container">
      <a class="navbar-brand fw-bold" href="#">{brand}</a>
      <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navbarNav" aria-controls="navbarNav" aria-expanded="false" aria-label="Toggle navigation">
        <span class="navbar-toggler-icon"></span>
      </button>
      <div class="collapse navbar-collapse" id="navbarNav">
        <ul class="navbar-nav ms-auto">
          <li class="nav-item"><a class="nav-link" href="{home}">{nav_home}</a></li>
          <li class="nav-item"><a class="nav-link active" aria-current="page" href="#">{nav_news}</a></li>
          <li class="nav-item"><a class="nav-link" href="{home}#features">{nav_features}</a></li>
          <li class="nav-item"><a class="nav-link" href="{home}#about">{nav_about}</a></li>
          <li class="nav-item"><a class="nav-link" href="{switch_href}" hreflang="{switch_lang}">{switch_label}</a></li>
        </ul>
      </div>
    </div>
  </nav>
  <header class="bg-primary text-white py-5">
    <div class="container text-center">
      <h1 class="fw-bold">{title}</h1>
      <p class="lead">{lead}</p>
    </div>
  </header>
  <main class="py-4">
    <div class="container">
      <div class="row">
{cards}
      </div>
    </div>
  </main>
  <footer class="bg-dark text-white py-3">
    <div class="container d-flex justify-content-between align-items-center">
      <span>&copy; {year} {brand_en}. {rights}</span>
      <span><a href="#" class="text-white me-2"><i class="bi bi-facebook"></i></a><a href="#" class="text-white me-2"><i class="bi bi-twitter"></i></a><a href="#" class="text-white"><i class="bi bi-instagram"></i></a></span>
    </div>
  </footer>
  <script src="{bootstrap_js}"></script>
</body>
</html>
"##,
        lang = s.code,
        dir = s.direction.as_attr(),
        title = s.page_title,
        brand = s.brand,
        brand_en = Locale::English.strings().brand,
        lead = s.lead,
        bootstrap_css = BOOTSTRAP_CSS,
        icons_css = BOOTSTRAP_ICONS_CSS,
        site_css = SITE_CSS,
        home = s.home_page,
        nav_home = s.nav_home,
        nav_news = s.nav_news,
        nav_features = s.nav_features,
        nav_about = s.nav_about,
        switch_href = locale.other().filename(),
        switch_lang = locale.other().code(),
        switch_label = s.switch_label,
        cards = cards,
        year = COPYRIGHT_YEAR,
        rights = s.rights,
        bootstrap_js = BOOTSTRAP_JS,
    );

    RenderedPage { locale, html }
}

/// One grid column holding an article card.
fn render_card(record: &ArticleRecord, locale: Locale) -> String {
    let s = locale.strings();

    // No placeholder when the feed has no thumbnail.
    let image = match record.image() {
        Some(src) => format!(
            "\n          <img src=\"{src}\" class=\"card-img-top\" alt=\"{alt}\" loading=\"lazy\">",
            alt = s.image_alt
        ),
        None => String::new(),
    };

    format!(
        r#"        <div class="col-md-6 col-lg-4 mb-4">
          <div class="card h-100 shadow-sm">{image}
            <div class="card-body">
              <h5 class="card-title">{title}</h5>
              <p class="card-text small text-muted">{date}</p>
              <p class="card-text">{description}</p>
              <a href="{link}" target="_blank" rel="noopener" class="btn btn-primary btn-sm">{read_more}</a>
            </div>
          </div>
        </div>"#,
        title = record.title(),
        date = record.date(),
        description = record.description(),
        link = record.link(),
        read_more = s.read_more,
    )
}
