//! Static site generation: renders a tree of Markdown files into HTML pages.
//!
//! # Example
//!
//! ```no_run
//! use mdsite::site::{build, SiteOptions};
//!
//! fn main() -> mdsite::Result<()> {
//!     let options = SiteOptions::new()
//!         .with_content_dir("content")
//!         .with_output_dir("public")
//!         .with_base_path("/blog/");
//!     let report = build(&options)?;
//!     println!("{} pages", report.pages_written.len());
//!     Ok(())
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::render::PageTemplate;

/// Extension of Markdown source files.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Extension of generated pages.
pub const HTML_EXTENSION: &str = "html";

/// Options for building a site.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Directory holding Markdown sources
    pub content_dir: PathBuf,

    /// Directory of assets copied verbatim; skipped if `None` or missing
    pub static_dir: Option<PathBuf>,

    /// Page template file
    pub template_path: PathBuf,

    /// Destination directory
    pub output_dir: PathBuf,

    /// Prefix for root-relative links in generated pages
    pub base_path: String,

    /// Remove the output directory before building
    pub clean_output: bool,

    /// Render pages on the rayon thread pool
    pub parallel: bool,
}

impl SiteOptions {
    /// Create site options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content directory.
    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    /// Set the static asset directory.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Do not copy static assets.
    pub fn without_static(mut self) -> Self {
        self.static_dir = None;
        self
    }

    /// Set the template file.
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the base path for root-relative links.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Enable or disable clearing the output directory first.
    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean_output = clean;
        self
    }

    /// Render pages one at a time.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: Some(PathBuf::from("static")),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
            clean_output: true,
            parallel: true,
        }
    }
}

/// A page that could not be generated.
#[derive(Debug)]
pub struct PageFailure {
    /// Markdown source path
    pub source: PathBuf,

    /// Why generation failed
    pub error: Error,
}

/// Outcome of a site build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Pages written, in source order
    pub pages_written: Vec<PathBuf>,

    /// Number of static files copied
    pub assets_copied: usize,

    /// Pages skipped because of an error
    pub failures: Vec<PageFailure>,
}

impl BuildReport {
    /// Check if every page was generated.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build a site: clear the output, copy static assets, generate pages.
///
/// Per-page errors are collected in the report; only errors affecting the
/// whole build (template, directories) are returned as `Err`.
pub fn build(options: &SiteOptions) -> Result<BuildReport> {
    let template =
        PageTemplate::from_file(&options.template_path)?.with_base_path(options.base_path.clone());

    if options.clean_output && options.output_dir.exists() {
        check_clean_target(options)?;
        info!("Clearing {}", options.output_dir.display());
        fs::remove_dir_all(&options.output_dir)?;
    }
    fs::create_dir_all(&options.output_dir)?;

    let mut report = BuildReport::default();

    match &options.static_dir {
        Some(dir) if dir.is_dir() => {
            report.assets_copied = copy_static(dir, &options.output_dir)?;
            info!("Copied {} static files", report.assets_copied);
        }
        Some(dir) => debug!("No static directory at {}", dir.display()),
        None => {}
    }

    let (written, failures) = generate_pages(
        &options.content_dir,
        &template,
        &options.output_dir,
        options.parallel,
    )?;
    report.pages_written = written;
    report.failures = failures;

    Ok(report)
}

/// Render one Markdown file into a page at `dest`, creating parent
/// directories as needed.
pub fn generate_page(source: &Path, template: &PageTemplate, dest: &Path) -> Result<()> {
    debug!("Generating {} -> {}", source.display(), dest.display());
    let markdown = fs::read_to_string(source)?;
    let page = crate::render_page(&markdown, template)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    info!("Wrote {}", dest.display());
    Ok(())
}

/// Generate a page for every Markdown file under `content_dir`, mirroring
/// the directory layout into `output_dir` with `.html` extensions.
///
/// Failing pages are logged and returned; the others are still written.
pub fn generate_pages(
    content_dir: &Path,
    template: &PageTemplate,
    output_dir: &Path,
    parallel: bool,
) -> Result<(Vec<PathBuf>, Vec<PageFailure>)> {
    let sources = find_markdown_files(content_dir)?;
    debug!("Found {} Markdown files", sources.len());

    let generate = |source: &PathBuf| {
        let dest = output_path(content_dir, source, output_dir);
        let result = generate_page(source, template, &dest);
        (source.clone(), dest, result)
    };
    let results: Vec<_> = if parallel {
        sources.par_iter().map(generate).collect()
    } else {
        sources.iter().map(generate).collect()
    };

    let mut written = Vec::new();
    let mut failures = Vec::new();
    for (source, dest, result) in results {
        match result {
            Ok(()) => written.push(dest),
            Err(error) => {
                warn!("Skipping {}: {}", source.display(), error);
                failures.push(PageFailure { source, error });
            }
        }
    }
    Ok((written, failures))
}

/// Recursively copy a directory's contents into `dest`. Returns the number
/// of files copied.
///
/// Symbolic links are not followed. If `dest` lies inside `source` it is
/// left out of the copy.
pub fn copy_static(source: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;
    let nested_dest = nested_path(source, dest)?;
    let mut copied = 0;

    let walker = WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| nested_dest.as_deref() != Some(entry.path()));

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            debug!("Copying {} -> {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target)?;
            copied += 1;
        } else {
            debug!("Skipping link {}", entry.path().display());
        }
    }

    Ok(copied)
}

/// All `.md` files below `dir`, in sorted order. Symbolic links are not
/// followed.
pub fn find_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Destination of a source file: same relative path, `.html` extension.
pub fn output_path(content_dir: &Path, source: &Path, output_dir: &Path) -> PathBuf {
    let relative = source.strip_prefix(content_dir).unwrap_or(source);
    output_dir.join(relative).with_extension(HTML_EXTENSION)
}

/// Fails if removing the output directory would remove an input.
fn check_clean_target(options: &SiteOptions) -> Result<()> {
    let output = options.output_dir.canonicalize()?;
    let inputs = [
        Some(&options.content_dir),
        Some(&options.template_path),
        options.static_dir.as_ref(),
    ];

    for input in inputs.into_iter().flatten() {
        let Ok(resolved) = input.canonicalize() else {
            continue;
        };
        if resolved.starts_with(&output) {
            return Err(Error::OutputContainsInput {
                output: options.output_dir.clone(),
                input: input.clone(),
            });
        }
    }
    Ok(())
}

/// `inner` spelled as a path below `outer`, if it lies strictly inside it.
fn nested_path(outer: &Path, inner: &Path) -> Result<Option<PathBuf>> {
    let outer_resolved = outer.canonicalize()?;
    let inner_resolved = inner.canonicalize()?;
    Ok(inner_resolved
        .strip_prefix(&outer_resolved)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .map(|relative| outer.join(relative)))
}
