mod app;
mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use lenslight_core::content::load_site;
use lenslight_core::form::ContactForm;
use lenslight_core::layout::DocumentLayout;
use lenslight_core::model::{SectionRegistry, Site};
use lenslight_core::nav::{DocumentScroll, NavController};
use lenslight_core::{svg, views};
use lenslight_protocol::Viewport;

/// Page width used for SVG exports, in logical pixels.
const EXPORT_WIDTH: f64 = 1280.0;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("export") => export(&args[1..]),
        Some("--help" | "-h") => {
            print_usage();
            Ok(())
        }
        _ => {
            let site = site_from(args.first().map(String::as_str))?;
            app::run(site)
        }
    }
}

fn print_usage() {
    println!("Usage: lenslight [site.json]");
    println!("       lenslight export [site.json] [-o page.svg] [--dark]");
}

fn site_from(path: Option<&str>) -> Result<Site> {
    match path {
        Some(path) => {
            let data = std::fs::read(path).with_context(|| format!("reading {path}"))?;
            load_site(&data).with_context(|| format!("parsing {path}"))
        }
        None => Ok(Site::builtin()),
    }
}

/// Render the whole page, top to bottom, as a standalone SVG.
fn export(args: &[String]) -> Result<()> {
    let mut input: Option<String> = None;
    let mut output = PathBuf::from("page.svg");
    let mut dark = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--out" => {
                output = PathBuf::from(iter.next().context("missing path after -o")?);
            }
            "--dark" => dark = true,
            other if input.is_none() => input = Some(other.to_string()),
            other => bail!("unexpected argument: {other}"),
        }
    }

    let site = site_from(input.as_deref())?;
    // Size the hero against a typical window, then widen the viewport to
    // the full document so nothing is culled.
    let probe = Viewport::new(0.0, EXPORT_WIDTH, 800.0);
    let layout = DocumentLayout::compute(&site, &probe);
    let full = Viewport::new(0.0, EXPORT_WIDTH, layout.document_height());

    let controller = NavController::new(SectionRegistry::builtin(), DocumentScroll::new());
    let form = ContactForm::new();
    let commands = views::render_page(&site, &layout, &full, &controller, &form);
    let rendered = svg::render_svg(&commands, EXPORT_WIDTH, layout.document_height(), dark);

    std::fs::write(&output, rendered).with_context(|| format!("writing {}", output.display()))?;
    println!("wrote {}", output.display());
    Ok(())
}
