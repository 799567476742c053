//! Static site generation around the markdown converter.
//!
//! Pages are rendered by substituting `{{ Title }}` and `{{ Content }}` in an
//! HTML template, then rewriting root-relative links to the configured base
//! path. Content directories are mirrored into the output directory with
//! `.md` files turned into `.html` pages.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::{Error, convert};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Error returned while generating a site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to convert {}: {source}", path.display())]
    Convert { path: PathBuf, source: Error },
}

/// Outcome of a full site build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub copied_static: bool,
}

/// A markdown file and the HTML file it renders to.
#[derive(Debug)]
struct PageJob {
    source: PathBuf,
    dest: PathBuf,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Render a markdown document into `template`.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> crate::Result<String> {
    let page = convert(markdown)?;

    let output = template
        .replace(TITLE_PLACEHOLDER, &page.title)
        .replace(CONTENT_PLACEHOLDER, &page.html)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"));
    Ok(output)
}

/// Render one markdown file to `dest`, creating parent directories.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    let job = PageJob {
        source: from.to_path_buf(),
        dest: dest.to_path_buf(),
    };
    write_page(&job, &template, base_path)
}

fn write_page(job: &PageJob, template: &str, base_path: &str) -> Result<(), SiteError> {
    tracing::info!(
        from = %job.source.display(),
        to = %job.dest.display(),
        "Generating page"
    );

    let markdown = fs::read_to_string(&job.source).map_err(io_error(&job.source))?;
    let output = render_page(&markdown, template, base_path).map_err(|source| {
        SiteError::Convert {
            path: job.source.clone(),
            source,
        }
    })?;

    if let Some(parent) = job.dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(&job.dest, output).map_err(io_error(&job.dest))
}

/// Render every `.md` file under `content_dir` into `dest_dir`.
///
/// Pages are converted in parallel on the global rayon pool. Returns the
/// number of pages written; the first failure aborts the build.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize, SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;

    let mut jobs = Vec::new();
    collect_pages(content_dir, dest_dir, &mut jobs)?;
    tracing::debug!(page_count = jobs.len(), "Content scan completed");

    jobs.par_iter()
        .try_for_each(|job| write_page(job, &template, base_path))?;

    Ok(jobs.len())
}

fn collect_pages(dir: &Path, dest_dir: &Path, jobs: &mut Vec<PageJob>) -> Result<(), SiteError> {
    let mut entries = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error(dir))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(io_error(&path))?;

        if file_type.is_dir() {
            collect_pages(&path, &dest_dir.join(entry.file_name()), jobs)?;
        } else if path.extension().is_some_and(|e| e == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            jobs.push(PageJob { source: path, dest });
        }
    }

    Ok(())
}

/// Replace `destination` with a recursive copy of `source`.
///
/// Returns `false` without touching `destination` when `source` is missing.
pub fn copy_static(source: &Path, destination: &Path) -> Result<bool, SiteError> {
    if !source.exists() {
        tracing::warn!(path = %source.display(), "Static directory does not exist");
        return Ok(false);
    }

    if destination.exists() {
        tracing::debug!(path = %destination.display(), "Removing existing output");
        fs::remove_dir_all(destination).map_err(io_error(destination))?;
    }

    copy_tree(source, destination)?;
    Ok(true)
}

fn copy_tree(source: &Path, destination: &Path) -> Result<(), SiteError> {
    fs::create_dir_all(destination).map_err(io_error(destination))?;

    for entry in fs::read_dir(source).map_err(io_error(source))? {
        let entry = entry.map_err(io_error(source))?;
        let path = entry.path();
        let target = destination.join(entry.file_name());

        if path.is_dir() {
            copy_tree(&path, &target)?;
        } else {
            tracing::debug!(from = %path.display(), to = %target.display(), "Copying file");
            fs::copy(&path, &target).map_err(io_error(&path))?;
        }
    }

    Ok(())
}

/// Copy static assets, then generate all pages.
pub fn build(config: &SiteConfig) -> Result<BuildSummary, SiteError> {
    let copied_static = copy_static(&config.static_dir, &config.output_dir)?;
    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &config.base_path,
    )?;

    tracing::info!(pages, copied_static, "Site build completed");
    Ok(BuildSummary {
        pages,
        copied_static,
    })
}
