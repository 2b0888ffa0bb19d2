pub mod cli;
pub mod config;
pub mod download;
pub mod dump;
pub mod error;
pub mod merge;
pub mod parser;
pub mod resolve;
pub mod schema;
pub mod sift;
pub mod tier;
pub mod ui;
pub mod writer;

pub use cli::Cli;
pub use config::{DumpOptions, GxdsSources, OutputLayout, SurfSources};
pub use dump::{dump_trick_gxds, dump_trick_surf, DumpSummary};
pub use error::DumpError;
pub use ui::{LogUi, Phase, SilentUi, Ui};
