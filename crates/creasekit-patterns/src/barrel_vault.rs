//! Barrel vault crease pattern.
//!
//! A unit cell is walked from a flat lead-in along the baseline, once
//! upwards and once mirrored downwards, laying zigzag mountain folds with
//! valley connectors along the ridges and the centre line. The cell is then
//! stacked vertically and its outer edges are merged into single lines.

use creasekit_core::{
    CreasePattern, GeometryError, PatternGenerator, PatternKind, PatternResult, Point, Provenance,
    Segment, StyleConfig,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::angles::{folding_angle, max_height, segment_angle, segment_length};
use crate::tiling::{merge_boundaries, outer_edges, tile_vertically, CellBuilder, UnitCell};
use crate::validation::{
    require_finite, require_omega, require_radius, require_segments, require_tiles,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrelVaultParameters {
    pub radius: f64,
    pub segments: u32,
    pub tiles: u32,
    /// Central angle in degrees.
    pub omega: f64,
    /// Requested fold height; clamped into `[0, h_max]`.
    pub height: f64,
}

impl Default for BarrelVaultParameters {
    fn default() -> Self {
        Self {
            radius: 2.0,
            segments: 6,
            tiles: 1,
            omega: 180.0,
            height: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarrelVaultGeometry {
    /// Segment angle in degrees.
    pub theta: f64,
    pub segment_length: f64,
    /// Folding angle in degrees.
    pub alpha: f64,
    pub max_height: f64,
    pub requested_height: f64,
    /// Height actually used for the geometry.
    pub height: f64,
    /// Horizontal run of one diagonal fold.
    pub angled_run: f64,
}

impl BarrelVaultGeometry {
    pub fn is_clamped(&self) -> bool {
        self.height != self.requested_height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarrelVaultPattern {
    pub segments: Vec<Segment>,
    pub boundary_positions: [f64; 3],
    pub total_width: f64,
    pub geometry: BarrelVaultGeometry,
    pub parameters: BarrelVaultParameters,
}

impl CreasePattern for BarrelVaultPattern {
    fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn provenance(&self) -> Provenance {
        Provenance::new(
            PatternKind::BarrelVault,
            self.parameters.radius,
            self.parameters.segments,
        )
        .with_tiles(self.parameters.tiles)
        .with_omega(self.parameters.omega)
        .with_height(self.geometry.height)
    }
}

pub struct BarrelVaultGenerator {
    params: BarrelVaultParameters,
    style: StyleConfig,
}

impl BarrelVaultGenerator {
    pub fn new(params: BarrelVaultParameters, style: StyleConfig) -> PatternResult<Self> {
        let generator = Self { params, style };
        generator.validate_parameters()?;
        Ok(generator)
    }

    pub fn parameters(&self) -> &BarrelVaultParameters {
        &self.params
    }

    pub fn geometry(&self) -> PatternResult<BarrelVaultGeometry> {
        let p = &self.params;
        let theta = segment_angle(p.omega, p.segments);
        let s = segment_length(p.radius, theta);
        let alpha = folding_angle(theta);
        let h_max = max_height(s, alpha);
        let height = p.height.max(0.0).min(h_max);

        if height != p.height {
            warn!(
                "Requested height {:.6} clamped to {:.6} (h_max {:.6})",
                p.height, height, h_max
            );
        }

        let angled_run = (2.0 * height / alpha.to_radians().tan()).abs();
        if !angled_run.is_finite() {
            return Err(GeometryError::non_finite("s_angled", angled_run).into());
        }

        Ok(BarrelVaultGeometry {
            theta,
            segment_length: s,
            alpha,
            max_height: h_max,
            requested_height: p.height,
            height,
            angled_run,
        })
    }

    /// The deduplicated cell that [`generate`](PatternGenerator::generate) tiles.
    pub fn unit_cell(&self, geometry: &BarrelVaultGeometry) -> UnitCell {
        let n = self.params.segments;
        let s = geometry.segment_length;
        let h = geometry.height;
        let run = geometry.angled_run;
        let first_flat = s - run / 2.0;
        let reps = if n % 2 == 1 { n / 2 } else { n / 2 - 1 };

        let mut cell = CellBuilder::new(self.style.primary_stroke(), self.style.secondary_stroke());
        let lead_in = Point::new(first_flat, 0.0);
        cell.fold(Point::origin(), lead_in);

        for dir in [1.0, -1.0] {
            let rise = dir * 2.0 * h;
            let mut cur = lead_in;
            let mut ridge = Point::new(0.0, rise);
            let mut centre_start = cur;
            let mut centre_end = cur;

            for i in 0..reps {
                centre_start = cur;
                let peak = Point::new(cur.x + run, cur.y + rise);
                cell.fold(cur, peak);
                cell.valley(ridge, Point::new(peak.x, ridge.y));
                cur = peak;

                let flat_end = Point::new(cur.x + s - run, cur.y);
                if flat_end.x > cur.x {
                    cell.fold(cur, flat_end);
                }
                ridge = flat_end;
                cur = flat_end;

                centre_end = Point::new(cur.x + run, cur.y - rise);
                cell.fold(cur, centre_end);
                cur = centre_end;
                cell.valley(centre_start, centre_end);

                // An odd cell ends on the same short run it started with.
                let flat = if n % 2 == 1 && i + 1 == reps {
                    first_flat
                } else {
                    s - run
                };
                let next = Point::new(cur.x + flat, cur.y);
                cell.fold(cur, next);
                cur = next;
            }

            if n % 2 == 0 {
                let start_x = cur.x;
                let peak = Point::new(cur.x + run, cur.y + rise);
                cell.fold(cur, peak);
                cur = peak;

                let next = Point::new(cur.x + s - run / 2.0, cur.y);
                cell.fold(cur, next);
                cell.valley(
                    Point::new(start_x, centre_start.y),
                    Point::new(next.x, centre_end.y),
                );
                cur = next;
            }

            cell.valley(ridge, Point::new(cur.x, ridge.y));
        }

        UnitCell::finish(
            cell,
            h,
            f64::from(n) * s,
            &self.style.connector_stroke(),
            self.style.rounding_decimal,
        )
    }
}

impl PatternGenerator for BarrelVaultGenerator {
    type Output = BarrelVaultPattern;

    fn validate_parameters(&self) -> PatternResult<()> {
        let p = &self.params;
        require_radius(p.radius)?;
        require_segments(p.segments)?;
        require_tiles(p.tiles)?;
        require_omega(p.omega)?;
        require_finite("height", p.height)?;
        self.style.validate()?;
        Ok(())
    }

    fn generate(&self) -> PatternResult<BarrelVaultPattern> {
        let geometry = self.geometry()?;
        debug!(
            "Barrel vault geometry: theta={:.4} s={:.6} alpha={:.4} h={:.6} s_angled={:.6}",
            geometry.theta,
            geometry.segment_length,
            geometry.alpha,
            geometry.height,
            geometry.angled_run
        );

        let cell = self.unit_cell(&geometry);
        debug!("Unit cell has {} segments", cell.segments.len());

        let tiled = tile_vertically(
            &cell.segments,
            cell.pitch(),
            self.params.tiles,
            self.style.rounding_decimal,
        );
        let (y_bottom, y_top) = outer_edges(&cell, self.params.tiles);
        let segments = merge_boundaries(
            tiled,
            y_bottom,
            y_top,
            cell.total_width,
            &self.style.boundary_stroke(),
        );

        info!(
            "Generated barrel vault with {} segments ({} tiles)",
            segments.len(),
            self.params.tiles
        );

        Ok(BarrelVaultPattern {
            segments,
            boundary_positions: cell.boundary_positions,
            total_width: cell.total_width,
            geometry,
            parameters: self.params.clone(),
        })
    }
}
