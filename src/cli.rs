use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{DumpOptions, DEFAULT_TRICK_GXDS_URL};

pub const LICENSE_NOTICE: &str = "\
Trick Surf Data Dump

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.";

const TRUE_NAMES: &[&str] = &["y", "yes", "t", "true", "on", "1"];
const FALSE_NAMES: &[&str] = &["n", "no", "f", "false", "off", "0"];

/// Which point ladder published points follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PointsSystem {
    Old,
    New,
}

impl PointsSystem {
    pub fn is_new(self) -> bool {
        self == PointsSystem::New
    }
}

#[derive(Parser, Debug)]
#[command(name = "trick-surf-data-dump")]
#[command(version, about = "Dump Trick Surf game data to JSON files")]
pub struct Cli {
    /// Show the project license and exit
    #[arg(short, long)]
    pub license: bool,

    /// Dump trick gxds data to JSON files
    #[arg(long)]
    pub dump_trick_gxds_data: bool,

    /// Dump trick surf data to JSON files
    #[arg(long)]
    pub dump_trick_surf_data: bool,

    /// Points system for all data dumps
    #[arg(long, value_enum)]
    pub points_system: Option<PointsSystem>,

    /// Points system for trick gxds data dumps
    #[arg(long, value_enum)]
    pub trick_gxds_points_system: Option<PointsSystem>,

    /// Points system for trick surf data dumps
    #[arg(long, value_enum)]
    pub trick_surf_points_system: Option<PointsSystem>,

    /// Convert trick names to title case for all data dumps
    #[arg(long, value_parser = parse_bool)]
    pub title_case_trick_names: Option<bool>,

    /// Convert trick names to title case for trick gxds data dumps
    #[arg(long, value_parser = parse_bool)]
    pub trick_gxds_title_case_trick_names: Option<bool>,

    /// Convert trick names to title case for trick surf data dumps
    #[arg(long, value_parser = parse_bool)]
    pub trick_surf_title_case_trick_names: Option<bool>,

    /// Output root directory (default: platform data directory)
    #[arg(short, long, env = "TRICK_SURF_DUMP_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base URL of the trick gxds SQL dump files
    #[arg(long, env = "TRICK_GXDS_URL", default_value = DEFAULT_TRICK_GXDS_URL)]
    pub trick_gxds_url: String,

    /// Base URL of the trick surf REST API (required with --dump-trick-surf-data)
    #[arg(long, env = "TRICK_SURF_URL", required_if_eq("dump_trick_surf_data", "true"))]
    pub trick_surf_url: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Options for the gxds run; per-source flags win over the global ones
    pub fn trick_gxds_options(&self) -> DumpOptions {
        resolve_options(
            self.trick_gxds_points_system.or(self.points_system),
            self.trick_gxds_title_case_trick_names.or(self.title_case_trick_names),
        )
    }

    pub fn trick_surf_options(&self) -> DumpOptions {
        resolve_options(
            self.trick_surf_points_system.or(self.points_system),
            self.trick_surf_title_case_trick_names.or(self.title_case_trick_names),
        )
    }
}

fn resolve_options(points: Option<PointsSystem>, title_case: Option<bool>) -> DumpOptions {
    DumpOptions {
        use_new_points_system: points.is_some_and(PointsSystem::is_new),
        title_case_trick_names: title_case.unwrap_or(false),
    }
}

/// Parse yes/no style booleans
pub fn parse_bool(value: &str) -> Result<bool, String> {
    let lower = value.to_lowercase();
    if TRUE_NAMES.contains(&lower.as_str()) {
        Ok(true)
    } else if FALSE_NAMES.contains(&lower.as_str()) {
        Ok(false)
    } else {
        Err(format!("Couldn't convert \"{}\" to a boolean value", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("YES"), Ok(true));
        assert_eq!(parse_bool("on"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_global_flags_fill_unset_source_flags() {
        let cli = Cli::try_parse_from([
            "trick-surf-data-dump",
            "--dump-trick-gxds-data",
            "--points-system",
            "new",
            "--trick-surf-points-system",
            "old",
            "--title-case-trick-names",
            "true",
            "--trick-gxds-title-case-trick-names",
            "no",
        ])
        .unwrap();

        assert!(cli.dump_trick_gxds_data);
        assert_eq!(
            cli.trick_gxds_options(),
            DumpOptions {
                use_new_points_system: true,
                title_case_trick_names: false,
            }
        );
        assert_eq!(
            cli.trick_surf_options(),
            DumpOptions {
                use_new_points_system: false,
                title_case_trick_names: true,
            }
        );
    }

    #[test]
    fn test_surf_dump_requires_api_url() {
        let err = Cli::try_parse_from(["trick-surf-data-dump", "--dump-trick-surf-data"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from([
            "trick-surf-data-dump",
            "--dump-trick-surf-data",
            "--trick-surf-url",
            "https://api.example.org/v1",
        ])
        .unwrap();
        assert_eq!(cli.trick_surf_url.as_deref(), Some("https://api.example.org/v1"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["trick-surf-data-dump"]).unwrap();
        assert_eq!(cli.trick_gxds_options(), DumpOptions::default());
        assert!(!cli.license);
    }
}
