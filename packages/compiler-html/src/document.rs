//! Document emission: wraps assembled body fragments in a complete HTML
//! document and serializes to a single string.

use crate::compiler::CompileOptions;
use pagesmith_common::escape;
use pagesmith_model::{Page, PageSettings, TrackingConfig};
use pagesmith_renderer::{RenderedFragment, Requirement};
use std::collections::BTreeSet;

pub(crate) struct Context {
    pub(crate) options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    pub(crate) fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            let indent = self.options.indent.clone();
            for _ in 0..self.depth {
                self.add(&indent);
            }
        }
        self.add(text);
        self.add("\n");
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub(crate) fn get_output(self) -> String {
        self.buffer
    }
}

/// Emit the complete document around the rendered fragments: doctype, head
/// metadata from the page settings, body fragments in page order, one script
/// include per distinct runtime requirement, tracking on live renders only,
/// then any custom scripts.
pub(crate) fn emit_document(
    ctx: &mut Context,
    page: &Page,
    fragments: &[RenderedFragment],
    requirements: &BTreeSet<Requirement>,
) {
    let settings = &page.settings;

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line(&format!("<html lang=\"{}\">", escape::attr(&settings.lang)));
    ctx.indent();

    emit_head(ctx, settings);

    ctx.add_line("<body>");
    ctx.indent();

    for fragment in fragments {
        ctx.add_line(&fragment.html);
    }

    // One script include per distinct requirement, in Requirement order,
    // no matter how many components demanded it.
    for requirement in requirements {
        ctx.add_line(&format!(
            "<script src=\"{}\" defer></script>",
            requirement.script_src()
        ));
    }

    if !ctx.options.preview {
        if let Some(tracking) = &settings.tracking {
            emit_tracking(ctx, &page.page_id, tracking);
        }
    }

    for src in &settings.custom_scripts {
        ctx.add_line(&format!("<script src=\"{}\"></script>", escape::attr(src)));
    }

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");
}

fn emit_head(ctx: &mut Context, settings: &PageSettings) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape::html(&settings.title)));

    if let Some(description) = &settings.description {
        ctx.add_line(&format!(
            "<meta name=\"description\" content=\"{}\">",
            escape::attr(description)
        ));
    }

    for tag in &settings.meta_tags {
        ctx.add_line(&format!(
            "<meta name=\"{}\" content=\"{}\">",
            escape::attr(&tag.name),
            escape::attr(&tag.content)
        ));
    }

    // Gated pages sit behind an external access check; keep them out of
    // crawlers regardless of how the gate responds.
    if settings.access_gated {
        ctx.add_line("<meta name=\"robots\" content=\"noindex\">");
    }

    ctx.add_line("<link rel=\"stylesheet\" href=\"/static/css/page.css\">");

    if let Some(custom_head) = &settings.custom_head {
        for line in custom_head.lines() {
            ctx.add_line(line);
        }
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn emit_tracking(ctx: &mut Context, page_id: &str, tracking: &TrackingConfig) {
    ctx.add_line(&format!(
        "<script async src=\"/static/js/track.js\" data-site-id=\"{}\" data-page-id=\"{}\"></script>",
        escape::attr(&tracking.site_id),
        escape::attr(page_id)
    ));
    let pixel_url = format!(
        "{}?site={}&page={}",
        tracking.endpoint, tracking.site_id, page_id
    );
    ctx.add_line(&format!(
        "<noscript><img src=\"{}\" width=\"1\" height=\"1\" alt=\"\"></noscript>",
        escape::attr(&pixel_url)
    ));
}
