//! Entry points: one dump run per data source

pub mod gxds;
pub mod surf;

pub use gxds::dump_trick_gxds;
pub use surf::dump_trick_surf;

/// What a successful run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Documents written (each as a pretty and a compact file)
    pub documents: usize,
    pub original_tricks: usize,
    pub sifted_tricks: usize,
}
