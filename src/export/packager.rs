use std::io::{Cursor, Write};

use rayon::prelude::*;

use crate::{
    compositor::composite::{Compositor, CompositorOpts},
    foundation::error::{CarrosselError, CarrosselResult},
    slide::model::Slide,
    text::fonts::FontCatalog,
};

/// File name of the bundled carousel archive.
pub const CAROUSEL_ARCHIVE_NAME: &str = "carrossel-ia.zip";

/// One rendered artifact ready to hand to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name, always `.png` or `.zip`.
    pub name: String,
    /// Encoded bytes.
    pub bytes: Vec<u8>,
}

/// Worker parallelism for the bulk export path.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExportThreading {
    /// Render slides on a rayon pool instead of sequentially.
    pub parallel: bool,
    /// Pool size; `None` lets rayon pick. Must be >= 1 when set.
    pub threads: Option<usize>,
}

/// Derive a single-slide download name from the slide title.
///
/// Lowercases the title and collapses anything outside `a-z0-9` to `_`,
/// so "Olá, Mundo!" becomes `ol___mundo_.png`.
pub fn single_export_name(title: &str) -> String {
    let mut stem: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        stem.push_str("slide");
    }
    stem.push_str(".png");
    stem
}

/// Archive entry name for the slide at zero-based index `index`.
pub fn archive_entry_name(index: usize) -> String {
    format!("slide-{}.png", index + 1)
}

/// Render one slide to a standalone PNG download.
#[tracing::instrument(skip_all)]
pub fn export_single(opts: &CompositorOpts, slide: &Slide) -> CarrosselResult<ExportFile> {
    let mut compositor = Compositor::new(opts.clone());
    let bytes = compositor.composite(slide)?;
    Ok(ExportFile {
        name: single_export_name(&slide.title),
        bytes,
    })
}

/// Render every slide and bundle the PNGs into one zip archive.
///
/// Entries keep the input order regardless of worker scheduling; the first
/// slide that fails aborts the whole export.
#[tracing::instrument(skip_all, fields(slides = slides.len()))]
pub fn export_carousel(
    opts: &CompositorOpts,
    slides: &[Slide],
    threading: ExportThreading,
) -> CarrosselResult<ExportFile> {
    if slides.is_empty() {
        return Err(CarrosselError::validation("carousel export needs at least one slide"));
    }

    let pngs = render_all(opts, slides, threading)?;

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut cursor);
        let zip_opts = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        for (i, png) in pngs.iter().enumerate() {
            zip.start_file(archive_entry_name(i), zip_opts)
                .map_err(|e| CarrosselError::Other(anyhow::anyhow!("archive entry failed: {e}")))?;
            zip.write_all(png)
                .map_err(|e| CarrosselError::Other(anyhow::anyhow!("archive write failed: {e}")))?;
        }
        zip.finish()
            .map_err(|e| CarrosselError::Other(anyhow::anyhow!("archive finalize failed: {e}")))?;
    }

    Ok(ExportFile {
        name: CAROUSEL_ARCHIVE_NAME.to_string(),
        bytes: cursor.into_inner(),
    })
}

fn render_all(
    opts: &CompositorOpts,
    slides: &[Slide],
    threading: ExportThreading,
) -> CarrosselResult<Vec<Vec<u8>>> {
    if !threading.parallel || slides.len() == 1 {
        let mut compositor = Compositor::new(opts.clone());
        return slides.iter().map(|s| compositor.composite(s)).collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    let catalog = std::sync::Arc::new(match &opts.fonts_dir {
        Some(dir) => FontCatalog::with_fonts_dir(dir),
        None => FontCatalog::new(),
    });

    // map_init gives each worker its own compositor; collect preserves the
    // slide order of the input.
    pool.install(|| {
        slides
            .par_iter()
            .map_init(
                || Compositor::with_catalog(opts.clone(), catalog.clone()),
                |compositor, slide| compositor.composite(slide),
            )
            .collect::<CarrosselResult<Vec<_>>>()
    })
}

fn build_thread_pool(threads: Option<usize>) -> CarrosselResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CarrosselError::validation(
            "export threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CarrosselError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/export/packager.rs"]
mod tests;
