use super::project::{IMAGES_DIR, Project};
use super::validate::print_report;
use anyhow::{Context, Result};
use landing_kit_core::config::{validate_file_name, validate_path};
use landing_kit_generator::{GeneratedSite, generate_site};
use landing_kit_validator::{normalize_colors, validate_config};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Export the static site
pub async fn run(path: PathBuf, output: PathBuf, zip: Option<PathBuf>) -> Result<()> {
    println!("🔨 Building landing page...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let project = Project::open(&path)?;
    let mut config = project.load()?;

    println!("✓ Loaded: {}", config.title);
    println!("  Layout: {}", config.layout);
    println!("  Sections: {}", config.sections.len());
    println!();

    let report = validate_config(&config);
    print_report(&report);
    if !report.is_valid() {
        anyhow::bail!(
            "Configuration has {} error(s); run 'landing-kit validate {}' for details",
            report.errors.len(),
            path.display()
        );
    }

    for replaced in normalize_colors(&mut config) {
        info!("{}", replaced);
    }

    if let Some(zip_path) = &zip
        && is_inside(zip_path, &output)?
    {
        anyhow::bail!(
            "Zip archive {} must be outside the output directory",
            zip_path.display()
        );
    }

    println!("📄 Generating pages...");
    let site = generate_site(&config);
    let written = write_site(&site, &output)?;
    println!("   ✓ Wrote {} file(s)", written);

    println!("🖼  Copying images...");
    let copied = copy_dir(&project.images_dir(), &output.join(IMAGES_DIR))?;
    println!("   ✓ Copied {} image(s)", copied);

    if let Some(zip_path) = &zip {
        println!("📦 Creating zip archive...");
        let entries = create_zip(&output, zip_path)?;
        println!("   ✓ {} ({} entries)", zip_path.display(), entries);
    }

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Whether `file` would land inside `dir` once both are resolved
///
/// Creates `dir` and the parent of `file` so both can be canonicalized;
/// `./out/site.zip` and an absolute path into `out` are both caught.
fn is_inside(file: &Path, dir: &Path) -> Result<bool> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", dir.display()))?;

    let parent = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create {}", parent.display()))?;
    let parent = parent
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", parent.display()))?;

    Ok(parent.starts_with(&dir))
}

/// Write every page and asset into `output`, which is created if needed
///
/// File names come from section identifiers, so each one is checked to stay
/// inside `output` before anything is written.
pub fn write_site(site: &GeneratedSite, output: &Path) -> Result<usize> {
    for (name, _) in site.files() {
        validate_file_name(name, "output file")
            .with_context(|| format!("Refusing to write '{}'", name))?;
    }

    fs::create_dir_all(output).context("Failed to create output directory")?;

    let mut written = 0;
    for (name, contents) in site.files() {
        let target = output.join(name);
        fs::write(&target, contents)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        debug!("Wrote {}", target.display());
        written += 1;
    }

    Ok(written)
}

/// Copy a directory tree; a missing source copies nothing
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        debug!("No {} directory, skipping", src.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let relative = entry
            .path()
            .strip_prefix(src)
            .context("Failed to get relative path")?;
        let relative = validate_path(&relative.to_string_lossy(), "images")?;

        let target = dst.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }

    Ok(copied)
}

/// Bundle every file under `dir` into a zip archive at `zip_path`
pub fn create_zip(dir: &Path, zip_path: &Path) -> Result<usize> {
    if let Some(parent) = zip_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let file = File::create(zip_path)
        .with_context(|| format!("Failed to create {}", zip_path.display()))?;
    let mut zip = ZipWriter::new(file);

    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut entries = 0;
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let relative_path = path
            .strip_prefix(dir)
            .context("Failed to get relative path")?;

        // Zip entry names always use forward slashes
        let name = relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        zip.start_file(name, options)?;
        let mut f = File::open(path)?;
        io::copy(&mut f, &mut zip)?;
        entries += 1;
    }

    zip.finish()?;

    Ok(entries)
}
