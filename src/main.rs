use clap::{Parser, ValueEnum};
use folio::{BookFile, ExportOptions, Exporter, OutputFormat, PipelineError};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Pdf,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Pdf => OutputFormat::Pdf,
            Format::Html => OutputFormat::Html,
        }
    }
}

/// Lay out a book file as a print-ready PDF or HTML document.
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Args {
    /// Book JSON (title, author, chapters, template).
    book: PathBuf,

    /// Output file.
    #[arg(short, long)]
    output: PathBuf,

    /// Output format; inferred from the output extension when omitted.
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Print each scene's title above its text.
    #[arg(long)]
    scene_titles: bool,

    /// Omit the `* * *` between scenes.
    #[arg(long)]
    no_scene_breaks: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let args = Args::parse();

    let format = match args.format {
        Some(format) => format.into(),
        None => OutputFormat::from_path(&args.output).ok_or_else(|| {
            PipelineError::Config(format!(
                "Cannot infer the output format of '{}'; pass --format",
                args.output.display()
            ))
        })?,
    };

    log::info!("Loading book from {}", args.book.display());
    let book = BookFile::from_path(&args.book)?;

    let options = ExportOptions {
        include_scene_breaks: !args.no_scene_breaks,
        include_scene_titles: args.scene_titles,
    };
    Exporter::builder()
        .with_template(book.template.resolve())
        .with_options(options)
        .build()
        .export_to_file(&book.document, &args.output, format)?;
    println!("Successfully generated {}", args.output.display());
    Ok(())
}
