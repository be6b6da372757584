//! replymark CLI - render chat-reply markdown to HTML, JSON, or text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use replymark::{JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "replymark")]
#[command(version)]
#[command(about = "Render chat-reply markdown to structured HTML", long_about = None)]
struct Cli {
    /// Input text file (stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: OutputFormat,

    /// CSS class for generated tables
    #[arg(long, default_value = "markdown-table")]
    table_class: String,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Print render statistics to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// HTML markup
    Html,
    /// Typed block document as JSON
    Json,
    /// Plain text with markup stripped
    Text,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> replymark::Result<()> {
    let text = read_input(cli)?;
    let options = RenderOptions::new().with_table_class(cli.table_class.clone());

    let rendered = match cli.format {
        OutputFormat::Html => replymark::to_html_with_options(&text, &options),
        OutputFormat::Json => {
            let format = if cli.compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            replymark::to_json(&text, format)?
        }
        OutputFormat::Text => replymark::to_document(&text).plain_text(),
    };

    if cli.stats {
        print_stats(&text, &options);
    }

    write_output(cli, &rendered)
}

fn read_input(cli: &Cli) -> replymark::Result<String> {
    match &cli.input {
        Some(path) => {
            log::debug!("reading reply from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(cli: &Cli, rendered: &str) -> replymark::Result<()> {
    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)?;
            eprintln!("{} {}", "wrote".green(), path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn print_stats(text: &str, options: &RenderOptions) {
    let result = replymark::to_html_with_stats(text, options);
    let stats = result.stats;

    eprintln!("{}", "render statistics".bold());
    eprintln!("  headings:    {}", stats.heading_count);
    eprintln!("  paragraphs:  {}", stats.paragraph_count);
    eprintln!("  lists:       {}", stats.list_count);
    eprintln!("  list items:  {}", stats.list_item_count);
    eprintln!("  code blocks: {}", stats.code_block_count);
    eprintln!("  tables:      {}", stats.table_count);
    eprintln!("  words:       {}", stats.word_count);
}
