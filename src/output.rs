use std::fmt::Write;
use std::fs;

use clap::ValueEnum;

use crate::render::{
    ExerciseList, FramedImage, MuscleGroupView, OutfitRow, Page, PageBody, Sections, NO_GIF,
};
use crate::resolver::{AssetRef, RenderOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

pub fn render_page(page: &Page, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => text_page(page),
        OutputFormat::Html => html_page(page),
    }
}

// `fmt::Write` into a String cannot fail, hence the ignored results below.

fn text_asset(out: &mut String, indent: &str, asset: &RenderOutcome<AssetRef>) {
    let _ = match asset {
        RenderOutcome::Ready(asset) => writeln!(out, "{indent}[image] {asset}"),
        RenderOutcome::Warning(msg) => writeln!(out, "{indent}[warning] {msg}"),
        RenderOutcome::Error(msg) => writeln!(out, "{indent}[error] {msg}"),
    };
}

fn text_framed(out: &mut String, indent: &str, image: &FramedImage) {
    text_asset(out, indent, &image.asset);
    let _ = writeln!(
        out,
        "{indent}        {} ({}x{})",
        image.caption, image.frame.width, image.frame.height
    );
}

fn text_outfits(out: &mut String, rows: &[OutfitRow]) {
    for row in rows {
        let _ = writeln!(out, "---");
        text_asset(out, "", &row.image);
        let _ = writeln!(out, "{}", row.title);
        if !row.links.is_empty() {
            let _ = writeln!(out, "Available At:");
            for link in &row.links {
                let _ = writeln!(out, "  {} -> {}", link.label, link.href);
            }
        }
    }
}

fn text_muscle_group(out: &mut String, view: &MuscleGroupView) {
    if let Some(image) = &view.image {
        text_framed(out, "", image);
    }

    match &view.sections {
        Sections::Empty(msg) => {
            let _ = writeln!(out, "[info] {msg}");
        }
        Sections::List(sections) => {
            for section in sections {
                let _ = writeln!(out, "\n## {}", section.heading);
                if let Some(image) = &section.image {
                    text_framed(out, "", image);
                }
                match &section.exercises {
                    ExerciseList::Empty(msg) => {
                        let _ = writeln!(out, "[info] {msg}");
                    }
                    ExerciseList::Rows(rows) => {
                        for row in rows {
                            match &row.media {
                                Some(media) => text_asset(out, "  ", media),
                                None => {
                                    let _ = writeln!(out, "  [{NO_GIF}]");
                                }
                            }
                            let _ = writeln!(out, "  {}", row.title);
                        }
                    }
                }
            }
        }
    }
}

fn text_page(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", page.heading);
    match &page.body {
        PageBody::Outfits(rows) if rows.is_empty() => {
            let _ = writeln!(out, "[info] No outfits in this category.");
        }
        PageBody::Outfits(rows) => text_outfits(&mut out, rows),
        PageBody::MuscleGroup(view) => text_muscle_group(&mut out, view),
    }
    out
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
.row{display:grid;grid-template-columns:2fr 3fr 5fr;gap:1rem;border-top:1px solid #ddd;padding:1rem 0}\
.row img{width:100%}\
.brand{display:inline-block;padding:6px 14px;margin:6px 8px 6px 0;border-radius:20px;\
background-color:#f5f5f5;border:1px solid #ccc;text-decoration:none;font-size:14px;color:#333}\
.frame{object-fit:contain}\
.exercise{display:grid;grid-template-columns:1fr 3fr;gap:1rem;align-items:center}\
.warning{color:#8a6d3b}.error{color:#a94442}.info{color:#31708f}";

/// Local files are linked by absolute path so the page can be written anywhere.
fn html_src(asset: &AssetRef) -> String {
    match asset {
        AssetRef::Path(path) => fs::canonicalize(path)
            .unwrap_or_else(|_| path.clone())
            .display()
            .to_string(),
        AssetRef::Url(url) => url.clone(),
    }
}

fn html_asset(out: &mut String, asset: &RenderOutcome<AssetRef>, alt: &str, size: Option<(u32, u32)>) {
    let _ = match asset {
        RenderOutcome::Ready(asset) => {
            let dims = size
                .map(|(w, h)| format!(" class=\"frame\" width=\"{w}\" height=\"{h}\""))
                .unwrap_or_default();
            writeln!(
                out,
                "<img src=\"{}\" alt=\"{}\"{dims}>",
                escape_html(&html_src(asset)),
                escape_html(alt)
            )
        }
        RenderOutcome::Warning(msg) => {
            writeln!(out, "<p class=\"warning\">{}</p>", escape_html(msg))
        }
        RenderOutcome::Error(msg) => writeln!(out, "<p class=\"error\">{}</p>", escape_html(msg)),
    };
}

fn html_framed(out: &mut String, image: &FramedImage) {
    let _ = writeln!(out, "<figure>");
    html_asset(
        out,
        &image.asset,
        &image.caption,
        Some((image.frame.width, image.frame.height)),
    );
    let _ = writeln!(out, "<figcaption>{}</figcaption>", escape_html(&image.caption));
    let _ = writeln!(out, "</figure>");
}

fn html_outfits(out: &mut String, rows: &[OutfitRow]) {
    for row in rows {
        let _ = writeln!(out, "<div class=\"row\">");
        let _ = writeln!(out, "<div>");
        html_asset(out, &row.image, &row.title, None);
        let _ = writeln!(out, "</div>");
        let _ = writeln!(out, "<div><h3>{}</h3></div>", escape_html(&row.title));
        let _ = writeln!(out, "<div>");
        if !row.links.is_empty() {
            let _ = writeln!(out, "<p><strong>Available At:</strong></p>");
            for link in &row.links {
                let target = if link.new_context {
                    " target=\"_blank\" rel=\"noopener\""
                } else {
                    ""
                };
                let _ = writeln!(
                    out,
                    "<a class=\"brand\" href=\"{}\"{target}>{}</a>",
                    escape_html(&link.href),
                    escape_html(&link.label)
                );
            }
        }
        let _ = writeln!(out, "</div>");
        let _ = writeln!(out, "</div>");
    }
}

fn html_muscle_group(out: &mut String, view: &MuscleGroupView) {
    if let Some(image) = &view.image {
        html_framed(out, image);
    }

    match &view.sections {
        Sections::Empty(msg) => {
            let _ = writeln!(out, "<p class=\"info\">{}</p>", escape_html(msg));
        }
        Sections::List(sections) => {
            for section in sections {
                let _ = writeln!(out, "<h2>{}</h2>", escape_html(&section.heading));
                if let Some(image) = &section.image {
                    html_framed(out, image);
                }
                match &section.exercises {
                    ExerciseList::Empty(msg) => {
                        let _ = writeln!(out, "<p class=\"info\">{}</p>", escape_html(msg));
                    }
                    ExerciseList::Rows(rows) => {
                        for row in rows {
                            let _ = writeln!(out, "<div class=\"exercise\">");
                            let _ = writeln!(out, "<div>");
                            match &row.media {
                                Some(media) => html_asset(
                                    out,
                                    media,
                                    &row.title,
                                    Some((row.frame.width, row.frame.height)),
                                ),
                                None => {
                                    let _ = writeln!(out, "<p class=\"info\">{NO_GIF}</p>");
                                }
                            }
                            let _ = writeln!(out, "</div>");
                            let _ = writeln!(out, "<div>{}</div>", escape_html(&row.title));
                            let _ = writeln!(out, "</div>");
                        }
                    }
                }
            }
        }
    }
}

fn html_page(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&page.title));
    let _ = writeln!(out, "<style>{STYLE}</style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(&page.heading));
    match &page.body {
        PageBody::Outfits(rows) if rows.is_empty() => {
            let _ = writeln!(out, "<p class=\"info\">No outfits in this category.</p>");
        }
        PageBody::Outfits(rows) => html_outfits(&mut out, rows),
        PageBody::MuscleGroup(view) => html_muscle_group(&mut out, view),
    }
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}
