//! Complete printable HTML page.

use super::common::{escape_html, print_styles};
use super::file_name::file_name;
use super::{render_document, RenderContext};
use crate::domain::Document;

/// Delay before the browser print dialog opens, letting images load.
pub const PRINT_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    /// Append the script that opens the print dialog on load.
    pub auto_print: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { auto_print: true }
    }
}

/// Assemble stylesheet, body and print script into one HTML document. The
/// `<title>` carries the file name so "save as PDF" picks it up.
pub fn render_page(doc: &Document, ctx: &RenderContext, options: PageOptions) -> String {
    let title = escape_html(&file_name(doc));
    let body = render_document(doc, ctx);
    let script = if options.auto_print {
        format!(
            r#"
    <script>
      window.onload = function() {{
        setTimeout(function() {{ window.print(); }}, {});
      }}
    </script>"#,
            PRINT_DELAY_MS
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{styles}</style>
  </head>
  <body>
{body}{script}
  </body>
</html>
"#,
        title = title,
        styles = print_styles(),
        body = body,
        script = script,
    )
}
