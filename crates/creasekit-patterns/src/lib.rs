//! # CreaseKit Patterns
//!
//! Crease pattern generators and the numeric machinery behind them.
//!
//! - **Angles**: segment angles, chord lengths, folding angles and the dome
//!   recurrences
//! - **Dedup**: removal of duplicate and reversed-duplicate segments
//! - **Tiling**: vault unit cells, vertical stacking and edge merging
//! - **Radial Dome**: rotated wedges with a single cut line
//! - **Barrel Vault**: zigzag unit cell with clamped fold height
//! - **Double Barrel Vault**: alternating `alpha1`/`alpha2` unit cell

pub mod angles;
pub mod barrel_vault;
pub mod dedup;
pub mod double_barrel_vault;
pub mod radial_dome;
pub mod tiling;
pub mod validation;

pub use angles::{
    derive_dome_geometry, double_vault_alpha1, double_vault_alpha2, double_vault_beta,
    folding_angle, max_height, segment_angle, segment_length, DomeGeometry, FoldingAnglePair,
};
pub use barrel_vault::{
    BarrelVaultGenerator, BarrelVaultGeometry, BarrelVaultParameters, BarrelVaultPattern,
};
pub use dedup::{dedup_segments, round_to, TraceDeduplicator};
pub use double_barrel_vault::{
    DoubleBarrelVaultGenerator, DoubleBarrelVaultGeometry, DoubleBarrelVaultParameters,
    DoubleBarrelVaultPattern,
};
pub use radial_dome::{RadialDomeGenerator, RadialDomeParameters, RadialDomePattern};
pub use tiling::UnitCell;
