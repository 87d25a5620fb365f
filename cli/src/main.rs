//! mdsite CLI - static site generator for Markdown content

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdsite::{
    extract_title, markdown_to_html, markdown_to_html_node_with_stats, JsonFormat, SiteOptions,
};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(version)]
#[command(about = "Build static HTML sites from Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site from a content directory
    Build {
        /// Markdown content directory
        #[arg(long, value_name = "DIR", env = "MDSITE_CONTENT", default_value = "content")]
        content: PathBuf,

        /// Static asset directory
        #[arg(long = "static", value_name = "DIR", env = "MDSITE_STATIC", default_value = "static")]
        static_dir: PathBuf,

        /// Page template
        #[arg(long, value_name = "FILE", env = "MDSITE_TEMPLATE", default_value = "template.html")]
        template: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", env = "MDSITE_OUTPUT", default_value = "public")]
        output: PathBuf,

        /// Prefix for root-relative links (e.g., "/my-repo/")
        #[arg(long, default_value = "/")]
        base_path: String,

        /// Keep existing files in the output directory
        #[arg(long)]
        no_clean: bool,

        /// Generate pages one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Convert a Markdown file to HTML
    Html {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the title of a Markdown file
    Title {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the HTML node tree of a Markdown file as JSON
    Tree {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build {
            content,
            static_dir,
            template,
            output,
            base_path,
            no_clean,
            sequential,
        }) => {
            let mut options = SiteOptions::new()
                .with_content_dir(content)
                .with_static_dir(static_dir)
                .with_template(template)
                .with_output_dir(output)
                .with_base_path(base_path)
                .with_clean(!no_clean);
            if sequential {
                options = options.sequential();
            }
            cmd_build(&options)
        }
        Some(Commands::Html { input, output }) => cmd_html(&input, output.as_deref()),
        Some(Commands::Title { input }) => cmd_title(&input),
        Some(Commands::Tree { input, compact }) => cmd_tree(&input, compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: mdsite build [OPTIONS]".yellow());
            println!("       mdsite --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_build(options: &SiteOptions) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Building with {:?}", options);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Building {}...", options.content_dir.display()));

    let report = mdsite::site::build(options)?;
    pb.finish_with_message("Done!");

    println!("\n{}", "Pages written:".green().bold());
    let count = report.pages_written.len();
    for (i, page) in report.pages_written.iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        let shown = page.strip_prefix(&options.output_dir).unwrap_or(page);
        println!("  {} {}", branch.dimmed(), shown.display());
    }
    println!(
        "{} {} pages, {} static files",
        "Built".green(),
        count,
        report.assets_copied
    );

    if !report.is_success() {
        println!("\n{}", "Skipped:".yellow().bold());
        for failure in &report.failures {
            println!("  {} {}", failure.source.display(), failure.error.to_string().dimmed());
        }
        return Err(format!("{} pages failed", report.failures.len()).into());
    }

    Ok(())
}

fn cmd_html(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let html = markdown_to_html(&markdown)?;

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_title(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    println!("{}", extract_title(&markdown)?);
    Ok(())
}

fn cmd_tree(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    println!("{}", mdsite::to_json(&markdown, format)?);
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let (_, stats) = markdown_to_html_node_with_stats(&markdown)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    match extract_title(&markdown) {
        Ok(title) => println!("{}: {}", "Title".bold(), title),
        Err(_) => println!("{}: {}", "Title".bold(), "(none)".dimmed()),
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    println!("{}: {}", "Quotes".bold(), stats.quote_count);
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count(),
        stats.list_item_count
    );
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Images".bold(), stats.image_count);

    let words = markdown.split_whitespace().count();
    println!("{}: {}", "Words".bold(), words);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdsite".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Static site generator for Markdown content");
    println!();
    println!("License: MIT");
}
