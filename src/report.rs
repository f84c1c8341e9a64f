use crate::credits::Credits;
use crate::error::Result;
use crate::model::{CreditUser, CreditsOutput, SCHEMA_VERSION};
use crate::util::escape_non_ascii;
use chrono::{Datelike, NaiveDate, Utc};
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Organization acknowledgements, one HTML line each.
pub const DEFAULT_COMPANIES: &[&str] = &[
    "<b>Unity Technologies</b> - FBX Exporter",
    "<b>BioSkill GmbH</b> - H3D compatibility for X3D Exporter, OBJ Nurbs Import/Export",
    "<b>AutoCRC</b> - Improvements to fluid particles, vertex color baking",
    "<b>Adidas</b> - Principled BSDF shader in Cycles",
    "<b>AMD</b> - Cycles OpenCL rendering",
    "<b>Intel</b> - Cycles ray-tracing optimization",
    "<b>NVidia</b> - Cycles Optix rendering, USD importer",
];

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub main_credits: bool,
    pub companies: Vec<String>,
    pub generated_on: NaiveDate,
    pub generator: String,
}

impl ReportOptions {
    pub fn new(main_credits: bool, companies: Vec<String>) -> Self {
        Self {
            main_credits,
            companies,
            generated_on: chrono::Local::now().date_naive(),
            generator: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

fn commit_word(total: u32) -> &'static str {
    if total > 1 {
        "commits"
    } else {
        "commit"
    }
}

fn year_span(user: &CreditUser) -> String {
    if user.year_min == user.year_max {
        format!("- {}", user.year_min)
    } else {
        format!("({} - {})", user.year_min, user.year_max)
    }
}

/// Render the credits page. The result may contain non-ASCII characters;
/// [`write_html`] escapes them on the way out.
pub fn render_html(credits: &Credits, options: &ReportOptions) -> String {
    let mut html = String::from("<h3>Individual Contributors</h3>\n\n");

    for (author, user) in credits.users() {
        let years = if options.main_credits {
            year_span(user)
        } else {
            String::new()
        };
        html.push_str(&format!(
            "{}, {} {} {}<br />\n",
            author,
            user.commit_total,
            commit_word(user.commit_total),
            years
        ));
    }
    html.push_str("\n\n");

    if options.main_credits {
        html.push_str("<h3>Contributions from Companies & Organizations</h3>\n");
        html.push_str("<p>\n");
        for line in &options.companies {
            html.push_str(&format!("{line}<br />\n"));
        }
        html.push_str("</p>\n");

        let day = options.generated_on;
        html.push_str(&format!(
            "<p><center><i>Generated by '{}' {}/{}/{}</i></center></p>\n",
            options.generator,
            day.year(),
            day.month(),
            day.day()
        ));
    }

    html
}

/// Write the ASCII-escaped credits page to `path`.
///
/// The page is staged in a temporary file next to `path` and renamed into
/// place, so `path` is either fully written or left untouched.
pub fn write_html(path: &Path, credits: &Credits, options: &ReportOptions) -> Result<()> {
    let html = escape_non_ascii(&render_html(credits, options));

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(html.as_bytes())?;
    if let Some(perms) = published_permissions(path) {
        staged.as_file().set_permissions(perms)?;
    }
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;

    log::info!("Wrote {} authors to {}", credits.len(), path.display());
    Ok(())
}

/// Mode the page should carry once renamed over `path`: whatever `path`
/// already has, or a world-readable 0644 for a new file. Temp files start
/// out owner-only.
fn published_permissions(path: &Path) -> Option<Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

pub fn credits_output(credits: &Credits, repository_path: &Path, range: &str) -> CreditsOutput {
    CreditsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repository_path.to_string_lossy().to_string(),
        range: range.to_string(),
        total_commits: credits.total_commits(),
        authors: credits.to_author_credits(),
    }
}
