//! pagecontent CLI - localized page content renderer

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagecontent::{
    i18n::resolve_text, render_languages, CleanupPreset, ContentResolver, DocumentSource,
    DocumentType, FileSource, HttpSource, JsonFormat, Language, MemorySource, PageContent,
    RenderOptions, Translator,
};

#[derive(Parser)]
#[command(name = "pagecontent")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render localized page content to Markdown, text, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where documents and translations come from.
#[derive(Args, Clone)]
struct SourceArgs {
    /// Content API base URL
    #[arg(long, env = "PAGECONTENT_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Directory of <page>/<lang>.json documents
    #[arg(long, env = "PAGECONTENT_CONTENT_DIR", value_name = "DIR")]
    content_dir: Option<PathBuf>,

    /// Directory of <lang>.json translation overrides
    #[arg(long, env = "PAGECONTENT_LOCALES_DIR", value_name = "DIR")]
    locales_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one page in one language
    Render {
        /// Page identifier (e.g. cookie-policy)
        #[arg(value_name = "PAGE")]
        page: String,

        /// Display language
        #[arg(short, long, env = "PAGECONTENT_LANG", default_value = "en")]
        lang: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(long)]
        frontmatter: bool,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Look up a dotted path in a JSON document, falling back to translations
    Lookup {
        /// Dotted path (e.g. whatAreCookies.title)
        #[arg(value_name = "PATH")]
        path: String,

        /// JSON document to search
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Translation namespace used for fallback
        #[arg(long, default_value = "")]
        namespace: String,

        /// Display language
        #[arg(short, long, env = "PAGECONTENT_LANG", default_value = "en")]
        lang: String,

        /// Directory of <lang>.json translation overrides
        #[arg(long, env = "PAGECONTENT_LOCALES_DIR", value_name = "DIR")]
        locales_dir: Option<PathBuf>,
    },

    /// Render a page in every language into a directory
    Export {
        /// Page identifier (e.g. cookie-policy)
        #[arg(value_name = "PAGE")]
        page: String,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(long)]
        frontmatter: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List supported languages
    Languages,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Markdown
    #[value(alias = "md")]
    Markdown,
    /// Plain text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization only)
    Minimal,
    /// Standard cleanup (default)
    Standard,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
        }
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            page,
            lang,
            format,
            output,
            frontmatter,
            cleanup,
            source,
        }) => cmd_render(
            &page,
            &lang,
            format,
            output.as_deref(),
            frontmatter,
            cleanup,
            &source,
        ),
        Some(Commands::Lookup {
            path,
            file,
            namespace,
            lang,
            locales_dir,
        }) => cmd_lookup(
            &path,
            file.as_deref(),
            &namespace,
            &lang,
            locales_dir.as_deref(),
        ),
        Some(Commands::Export {
            page,
            output,
            frontmatter,
            source,
        }) => cmd_export(&page, output.as_deref(), frontmatter, &source),
        Some(Commands::Languages) => {
            cmd_languages();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: pagecontent <COMMAND>".yellow());
            println!("       pagecontent --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Pick a document source: API, then content directory, then nothing.
fn open_source(args: &SourceArgs) -> pagecontent::Result<Box<dyn DocumentSource>> {
    if let Some(ref url) = args.api_url {
        return Ok(Box::new(HttpSource::new(url.as_str())?));
    }
    if let Some(ref dir) = args.content_dir {
        return Ok(Box::new(FileSource::new(dir)));
    }
    log::info!("No content source configured, rendering fallback content");
    Ok(Box::new(MemorySource::new()))
}

fn translator(language: Language, locales_dir: Option<&Path>) -> Translator {
    let translator = Translator::new(language);
    match locales_dir {
        Some(dir) => translator.with_overrides(dir),
        None => translator,
    }
}

fn render_page(
    page: &PageContent,
    format: OutputFormat,
    options: &RenderOptions,
) -> pagecontent::Result<String> {
    match format {
        OutputFormat::Markdown => pagecontent::render::to_markdown(page, options),
        OutputFormat::Text => pagecontent::render::to_text(page, options),
        OutputFormat::Json => pagecontent::render::to_json(page, JsonFormat::Pretty),
    }
}

fn cmd_render(
    page: &str,
    lang: &str,
    format: OutputFormat,
    output: Option<&Path>,
    frontmatter: bool,
    cleanup: Option<CleanupLevel>,
    source_args: &SourceArgs,
) -> CliResult {
    let language = Language::parse(lang)?;
    let source = open_source(source_args)?;

    let resolver = ContentResolver::new(
        page,
        translator(language, source_args.locales_dir.as_deref()),
    );
    let content = resolver.load(source.as_ref());

    let mut options = RenderOptions::new().with_frontmatter(frontmatter);
    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }

    let rendered = render_page(&content, format, &options)?;

    if content.is_fallback() {
        eprintln!(
            "{} {} ({}) has too little content, showing bundled text",
            "Note:".yellow(),
            page,
            language
        );
    }

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_lookup(
    path: &str,
    file: Option<&Path>,
    namespace: &str,
    lang: &str,
    locales_dir: Option<&Path>,
) -> CliResult {
    let language = Language::parse(lang)?;
    let translator = translator(language, locales_dir);

    let document: Option<serde_json::Value> = match file {
        Some(file) => Some(serde_json::from_str(&fs::read_to_string(file)?)?),
        None => None,
    };

    println!(
        "{}",
        resolve_text(document.as_ref(), path, &translator, namespace)
    );

    Ok(())
}

fn cmd_export(
    page: &str,
    output: Option<&Path>,
    frontmatter: bool,
    source_args: &SourceArgs,
) -> CliResult {
    let doc_type = DocumentType::new(page);
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(format!("{}_output", doc_type)));
    fs::create_dir_all(&output_dir)?;

    let source = open_source(source_args)?;
    let resolver = ContentResolver::new(
        doc_type.clone(),
        translator(Language::default(), source_args.locales_dir.as_deref()),
    );

    let pb = ProgressBar::new(Language::ALL.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Resolving languages...");
    let pages = render_languages(source.as_ref(), &resolver, &Language::ALL);
    pb.inc(1);

    let options = RenderOptions::new().with_frontmatter(frontmatter);
    let mut written = Vec::with_capacity(pages.len());
    for content in &pages {
        pb.set_message(format!("Writing {}...", content.language));
        let filename = format!("{}.md", content.language);
        let markdown = pagecontent::render::to_markdown(content, &options)?;
        fs::write(output_dir.join(&filename), &markdown)?;
        written.push((filename, content.origin));
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    let last = written.len().saturating_sub(1);
    for (i, (filename, origin)) in written.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        println!(
            "  {} {} {}",
            branch.dimmed(),
            filename,
            format!("({})", origin.as_str()).as_str().dimmed()
        );
    }

    Ok(())
}

fn cmd_languages() {
    for language in Language::ALL {
        let marker = if language == Language::default() {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "{}  {}{}",
            language.code().cyan().bold(),
            language.native_name(),
            marker
        );
    }
}

fn cmd_version() {
    println!("{} {}", "pagecontent".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Localized page content renderer");
    println!();
    println!("License: MIT");
}
