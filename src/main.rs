use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use taglib::{
    language::{html, svg},
    Attributes, Builder, MarkupConfig, Result,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Markup language of the showcase document
    #[arg(short, long, value_enum, default_value_t = Language::Html)]
    language: Language,

    /// Spaces per nesting level (defaults to the language's own)
    #[arg(short, long)]
    indent: Option<usize>,

    /// Document title
    #[arg(short, long, default_value = "taglib")]
    title: String,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Language {
    Html,
    Svg,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let mut config = match args.language {
        Language::Html => html::config(),
        Language::Svg => svg::config(),
    };
    if let Some(width) = args.indent {
        config = config.with_indent_unit(" ".repeat(width));
    }

    info!("Building {:?} showcase document", args.language);
    let document = match args.language {
        Language::Html => html_showcase(config, &args.title),
        Language::Svg => svg_showcase(config, &args.title),
    };

    // Write to file or print to stdout
    if let Some(output_path) = args.output {
        document.dump(&output_path)?;
    } else {
        println!("{}", document.to_document());
    }

    Ok(())
}

fn html_showcase(config: MarkupConfig, title: &str) -> Builder {
    let mut root = Builder::new(config);
    let page = root.open("html", [("lang", "en")]);

    let head = page.open("head", Attributes::new());
    head.element("meta", "", [("charset", "utf-8")]);
    head.element("title", title, Attributes::new());

    let body = page.open("body", Attributes::new());
    body.element("h1", title, Attributes::new());
    body.element(
        "p",
        "Built from a tag set and two templates.",
        [("class", "lead")],
    );
    let list = body.open("ul", Attributes::new());
    for step in ["Declare a language", "Chain elements", "Dump the tree"] {
        list.element("li", step, Attributes::new());
    }
    body.element("hr", "", Attributes::new());

    root
}

fn svg_showcase(config: MarkupConfig, title: &str) -> Builder {
    let mut root = Builder::new(config);
    let canvas = root.open(
        "svg",
        [
            ("xmlns", svg::SVG_NAMESPACE),
            ("width", "120"),
            ("height", "60"),
            ("viewBox", "0 0 120 60"),
        ],
    );

    canvas.element("title", title, Attributes::new());
    canvas.element(
        "rect",
        "",
        [("width", "120"), ("height", "60"), ("fill", "#f4f4f4")],
    );
    canvas.element(
        "circle",
        "",
        [("cx", "30"), ("cy", "30"), ("r", "20"), ("fill", "#3a7bd5")],
    );
    canvas.element("text", title, [("x", "60"), ("y", "35")]);

    root
}
