//! Run configuration: presentation options, source locations and output layout

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const TRICK_GXDS_NAME: &str = "TrickGxds";
pub const TRICK_SURF_NAME: &str = "TrickSurf";

pub const DEFAULT_TRICK_GXDS_URL: &str =
    "https://raw.githubusercontent.com/anominy/trick-surf-data-dump/main/trick-gxds/";

/// Presentation switches shared by both dump sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpOptions {
    /// Overwrite trick points with the 9-tier ladder values (sifted output only)
    pub use_new_points_system: bool,
    /// Title-case trick names (sifted output only)
    pub title_case_trick_names: bool,
}

/// Location of the Trick Gxds SQL dump files
#[derive(Debug, Clone)]
pub struct GxdsSources {
    pub base_url: String,
}

impl GxdsSources {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// URL of one table's dump file
    pub fn table_url(&self, source_file: &str) -> String {
        join_url(&self.base_url, source_file)
    }
}

/// Location of the Trick Surf REST API
#[derive(Debug, Clone)]
pub struct SurfSources {
    pub base_url: String,
}

impl SurfSources {
    /// Endpoints fetched by a Trick Surf run, in order
    pub const ENDPOINTS: [&'static str; 4] = ["players", "triggers", "routes", "tricks"];

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Where artifacts are written
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub const UNIFIED_DIR: &'static str = "unified";
    pub const TRICK_GXDS_DIR: &'static str = "trick-gxds";
    pub const TRICK_SURF_DIR: &'static str = "trick-surf";

    pub const GXDS_UNIFIED_NAME: &'static str = "ski2-gxds-tricks";
    pub const SURF_UNIFIED_NAME: &'static str = "ski2-surf-tricks";

    /// Use `custom_dir`, or the platform data directory when not given
    pub fn new(custom_dir: Option<PathBuf>) -> Result<Self> {
        let root = match custom_dir {
            Some(dir) => dir,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "trick-surf-data-dump")
                    .context("Could not determine data directory")?;
                proj_dirs.data_dir().to_path_buf()
            }
        };
        Ok(Self { root })
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn unified_dir(&self) -> PathBuf {
        self.root.join(Self::UNIFIED_DIR)
    }

    pub fn trick_gxds_dir(&self) -> PathBuf {
        self.root.join(Self::TRICK_GXDS_DIR)
    }

    pub fn trick_surf_dir(&self) -> PathBuf {
        self.root.join(Self::TRICK_SURF_DIR)
    }

    /// Base name of a unified document variant, e.g. `ski2-gxds-tricks~sifted`
    pub fn variant_name(unified: &str, sifted: bool) -> String {
        format!("{}~{}", unified, if sifted { "sifted" } else { "original" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_joins_cleanly() {
        let sources = GxdsSources::new("https://example.org/dump/");
        assert_eq!(sources.table_url("players.sql"), "https://example.org/dump/players.sql");

        let sources = GxdsSources::new("https://example.org/dump");
        assert_eq!(sources.table_url("routes.sql"), "https://example.org/dump/routes.sql");
    }

    #[test]
    fn test_output_layout() {
        let layout = OutputLayout::at("/tmp/out");
        assert_eq!(layout.unified_dir(), PathBuf::from("/tmp/out/unified"));
        assert_eq!(layout.trick_surf_dir(), PathBuf::from("/tmp/out/trick-surf"));
        assert_eq!(
            OutputLayout::variant_name(OutputLayout::GXDS_UNIFIED_NAME, false),
            "ski2-gxds-tricks~original"
        );
        assert_eq!(
            OutputLayout::variant_name(OutputLayout::SURF_UNIFIED_NAME, true),
            "ski2-surf-tricks~sifted"
        );
    }
}
