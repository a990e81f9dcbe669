//! HTML page rendering.
//!
//! Turns escaped [`ArticleRecord`](crate::feed::ArticleRecord)s into a
//! complete Bootstrap page for one [`Locale`]. Rendering is pure string
//! composition: it never fails and never escapes record fields again.

pub mod locale;
pub mod page;

pub use locale::{Direction, Locale, LocaleStrings};
pub use page::{render, RenderedPage};
