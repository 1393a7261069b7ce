//! Double barrel vault crease pattern.
//!
//! Same cell walk as the single vault, except that every other repetition
//! climbs with the steeper `alpha2` diagonal centred between two half flats.
//! The fold height follows from `alpha1` and is never clamped.

use creasekit_core::{
    CreasePattern, GeometryError, ParameterError, PatternGenerator, PatternKind, PatternResult,
    Point, Provenance, Segment, StyleConfig,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::angles::{
    double_vault_alpha1, double_vault_alpha2, double_vault_beta, max_height, segment_angle,
    segment_length,
};
use crate::tiling::{merge_boundaries, outer_edges, tile_vertically, CellBuilder, UnitCell};
use crate::validation::{require_omega, require_radius, require_segments, require_tiles};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleBarrelVaultParameters {
    pub radius: f64,
    pub segments: u32,
    pub tiles: u32,
    /// Central angle in degrees.
    pub omega: f64,
    /// Distance between the two vault centres, `0 <= a < 2r`.
    pub distance: f64,
}

impl Default for DoubleBarrelVaultParameters {
    fn default() -> Self {
        Self {
            radius: 2.0,
            segments: 6,
            tiles: 1,
            omega: 180.0,
            distance: 1.0,
        }
    }
}

/// Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoubleBarrelVaultGeometry {
    pub theta: f64,
    pub segment_length: f64,
    pub alpha1: f64,
    pub beta: f64,
    pub alpha2: f64,
    pub height: f64,
    pub angled_run_1: f64,
    pub angled_run_2: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoubleBarrelVaultPattern {
    pub segments: Vec<Segment>,
    pub boundary_positions: [f64; 3],
    pub total_width: f64,
    pub geometry: DoubleBarrelVaultGeometry,
    pub parameters: DoubleBarrelVaultParameters,
}

impl CreasePattern for DoubleBarrelVaultPattern {
    fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn provenance(&self) -> Provenance {
        Provenance::new(
            PatternKind::DoubleBarrelVault,
            self.parameters.radius,
            self.parameters.segments,
        )
        .with_tiles(self.parameters.tiles)
        .with_omega(self.parameters.omega)
        .with_distance(self.parameters.distance)
    }
}

fn angled_run(quantity: &str, height: f64, angle: f64) -> PatternResult<f64> {
    let run = (2.0 * height / angle.to_radians().tan()).abs();
    if !run.is_finite() {
        return Err(GeometryError::non_finite(quantity, run).into());
    }
    Ok(run)
}

pub struct DoubleBarrelVaultGenerator {
    params: DoubleBarrelVaultParameters,
    style: StyleConfig,
}

impl DoubleBarrelVaultGenerator {
    pub fn new(params: DoubleBarrelVaultParameters, style: StyleConfig) -> PatternResult<Self> {
        let generator = Self { params, style };
        generator.validate_parameters()?;
        Ok(generator)
    }

    pub fn parameters(&self) -> &DoubleBarrelVaultParameters {
        &self.params
    }

    pub fn geometry(&self) -> PatternResult<DoubleBarrelVaultGeometry> {
        let p = &self.params;
        let theta = segment_angle(p.omega, p.segments);
        let s = segment_length(p.radius, theta);
        let alpha1 = double_vault_alpha1(p.distance, p.radius, p.segments)?;
        let beta = double_vault_beta(p.distance, p.radius, p.segments)?;
        let alpha2 = double_vault_alpha2(beta);
        let height = max_height(s, alpha1);

        Ok(DoubleBarrelVaultGeometry {
            theta,
            segment_length: s,
            alpha1,
            beta,
            alpha2,
            height,
            angled_run_1: angled_run("s_angled_alpha1", height, alpha1)?,
            angled_run_2: angled_run("s_angled_alpha2", height, alpha2)?,
        })
    }

    pub fn unit_cell(&self, geometry: &DoubleBarrelVaultGeometry) -> UnitCell {
        let n = self.params.segments;
        let s = geometry.segment_length;
        let h = geometry.height;
        let run1 = geometry.angled_run_1;
        let run2 = geometry.angled_run_2;
        let first_flat = s - run1 / 2.0;
        let half_flat = (s - run2) / 2.0;
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
                if i % 2 == 0 {
                    centre_start = cur;
                    let peak = Point::new(cur.x + run1, cur.y + rise);
                    cell.fold(cur, peak);
                    cell.valley(ridge, Point::new(peak.x, ridge.y));
                    cur = peak;

                    let flat_end = Point::new(cur.x + s - run1, cur.y);
                    if flat_end.x > cur.x {
                        cell.fold(cur, flat_end);
                    }
                    ridge = flat_end;
                    cur = flat_end;
                } else {
                    let next = Point::new(cur.x + half_flat, cur.y);
                    cell.fold(cur, next);
                    cur = next;
                    centre_start = cur;

                    let peak = Point::new(cur.x + run2, cur.y + rise);
                    cell.fold(cur, peak);
                    cell.valley(ridge, Point::new(peak.x, ridge.y));
                    cur = peak;

                    let next = Point::new(cur.x + half_flat, cur.y);
                    cell.fold(cur, next);
                    ridge = next;
                    cur = next;
                }

                centre_end = Point::new(cur.x + run1, cur.y - rise);
                cell.fold(cur, centre_end);
                cur = centre_end;
                cell.valley(centre_start, centre_end);

                let flat = if n % 2 == 1 && i + 1 == reps {
                    first_flat
                } else {
                    s - run1
                };
                let next = Point::new(cur.x + flat, cur.y);
                cell.fold(cur, next);
                cur = next;
            }

            if n % 2 == 0 {
                let start_x = cur.x;
                let peak = Point::new(cur.x + run1, cur.y + rise);
                cell.fold(cur, peak);
                cur = peak;

                let next = Point::new(cur.x + s - run1 / 2.0, cur.y);
                cell.fold(cur, next);
                cell.valley(
                    Point::new(start_x, centre_start.y),
                    Point::new(next.x, centre_end.y),
                );
                // The closing ridge valley stops at the last peak.
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

impl PatternGenerator for DoubleBarrelVaultGenerator {
    type Output = DoubleBarrelVaultPattern;

    fn validate_parameters(&self) -> PatternResult<()> {
        let p = &self.params;
        require_radius(p.radius)?;
        require_segments(p.segments)?;
        require_tiles(p.tiles)?;
        require_omega(p.omega)?;

        let limit = 2.0 * p.radius;
        if !p.distance.is_finite() || p.distance < 0.0 || p.distance >= limit {
            return Err(ParameterError::OutOfRange {
                name: "distance".to_string(),
                value: p.distance,
                min: 0.0,
                max: limit,
            }
            .into());
        }

        self.style.validate()?;
        Ok(())
    }

    fn generate(&self) -> PatternResult<DoubleBarrelVaultPattern> {
        let geometry = self.geometry()?;
        debug!(
            "Double barrel vault geometry: alpha1={:.4} beta={:.4} alpha2={:.4} h={:.6}",
            geometry.alpha1, geometry.beta, geometry.alpha2, geometry.height
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
            "Generated double barrel vault with {} segments ({} tiles)",
            segments.len(),
            self.params.tiles
        );

        Ok(DoubleBarrelVaultPattern {
            segments,
            boundary_positions: cell.boundary_positions,
            total_width: cell.total_width,
            geometry,
            parameters: self.params.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creasekit_core::{PatternError, StrokeRole};

    fn generator(params: DoubleBarrelVaultParameters) -> DoubleBarrelVaultGenerator {
        DoubleBarrelVaultGenerator::new(params, StyleConfig::double_barrel_vault()).unwrap()
    }

    #[test]
    fn test_distance_must_be_below_diameter() {
        for distance in [4.0, 5.0, -0.1, f64::NAN] {
            let err = DoubleBarrelVaultGenerator::new(
                DoubleBarrelVaultParameters {
                    distance,
                    ..Default::default()
                },
                StyleConfig::double_barrel_vault(),
            )
            .err();
            assert!(
                matches!(
                    err,
                    Some(PatternError::Parameter(ParameterError::OutOfRange { ref name, .. }))
                        if name == "distance"
                ),
                "distance {distance} accepted"
            );
        }
    }

    #[test]
    fn test_height_follows_alpha1() {
        let gen = generator(DoubleBarrelVaultParameters::default());
        let geo = gen.geometry().unwrap();
        assert!((geo.height - max_height(geo.segment_length, geo.alpha1)).abs() < 1e-15);
        // With h = tan(alpha1)·s/2 the alpha1 diagonal spans a full segment.
        assert!((geo.angled_run_1 - geo.segment_length).abs() < 1e-12);
        assert!((geo.alpha2 - (90.0 - geo.beta) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_cell_layout() {
        let gen = generator(DoubleBarrelVaultParameters {
            segments: 5,
            ..Default::default()
        });
        let geo = gen.geometry().unwrap();
        let cell = gen.unit_cell(&geo);

        assert_eq!(cell.boundary_positions, [-2.0 * geo.height, 0.0, 2.0 * geo.height]);
        assert!((cell.total_width - 5.0 * geo.segment_length).abs() < 1e-12);
        assert!(cell
            .segments
            .iter()
            .any(|s| s.role() == StrokeRole::Valley));
        assert_eq!(
            cell.segments
                .iter()
                .filter(|s| s.role() == StrokeRole::Connector)
                .count(),
            2
        );
    }

    #[test]
    fn test_generate_is_deterministic() {
        let params = DoubleBarrelVaultParameters {
            tiles: 2,
            ..Default::default()
        };
        let a = generator(params.clone()).generate().unwrap();
        let b = generator(params).generate().unwrap();
        assert_eq!(a.segments, b.segments);
        assert_eq!(a.provenance().distance, Some(1.0));
    }
}
