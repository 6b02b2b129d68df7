mod page;

pub use page::{PageView, ResultView, escape_html, render_page};
