//! # Radar Chart
//!
//! Skill radar drawn in a 200×200 logical space. The data polygon grows
//! from the centre: each frame adds 0.03 to the progress until it hits 1.
//!
//! Coordinates follow screen convention (y grows downward); the TUI flips
//! them for ratatui's canvas.

use std::f64::consts::{FRAC_PI_2, TAU};

use rand::Rng;

use super::{Animation, Tick};

pub const FRAME_MS: u64 = 16;
pub const PROGRESS_STEP: f64 = 0.03;
pub const RING_COUNT: u32 = 4;
pub const SIZE: f64 = 200.0;
pub const CENTER: (f64, f64) = (100.0, 100.0);
pub const RADIUS: f64 = 75.0;
pub const LABEL_OFFSET: f64 = 18.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: f64,
}

/// A declarative draw instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Closed grid polygon.
    Ring(Vec<(f64, f64)>),
    /// Line from the centre to the outer ring.
    Spoke { from: (f64, f64), to: (f64, f64) },
    /// Closed, filled data polygon.
    Area(Vec<(f64, f64)>),
    /// Vertex marker on the data polygon.
    Dot { at: (f64, f64) },
    Label { at: (f64, f64), text: String },
}

#[derive(Debug, Clone)]
pub struct RadarChart {
    metrics: Vec<Metric>,
    frame: u32,
    progress: f64,
}

impl RadarChart {
    pub fn new<'a>(metrics: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            metrics: metrics
                .into_iter()
                .map(|(label, value)| Metric {
                    label: label.to_string(),
                    value: value.clamp(0.0, 1.0),
                })
                .collect(),
            frame: 0,
            progress: 0.0,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    fn angle(&self, index: usize) -> f64 {
        index as f64 / self.metrics.len() as f64 * TAU - FRAC_PI_2
    }

    fn point(&self, index: usize, radius: f64) -> (f64, f64) {
        let angle = self.angle(index);
        (CENTER.0 + radius * angle.cos(), CENTER.1 + radius * angle.sin())
    }

    /// Draw instructions for the current frame: rings, spokes, data area,
    /// vertex dots, then labels.
    pub fn shapes(&self) -> Vec<Shape> {
        let n = self.metrics.len();
        if n == 0 {
            return Vec::new();
        }
        let mut shapes = Vec::with_capacity(RING_COUNT as usize + 3 * n + 1);

        for ring in 1..=RING_COUNT {
            let r = RADIUS * f64::from(ring) / f64::from(RING_COUNT);
            shapes.push(Shape::Ring((0..n).map(|i| self.point(i, r)).collect()));
        }

        for i in 0..n {
            shapes.push(Shape::Spoke {
                from: CENTER,
                to: self.point(i, RADIUS),
            });
        }

        let vertices: Vec<_> = self
            .metrics
            .iter()
            .enumerate()
            .map(|(i, m)| self.point(i, RADIUS * m.value * self.progress))
            .collect();
        shapes.push(Shape::Area(vertices.clone()));
        shapes.extend(vertices.into_iter().map(|at| Shape::Dot { at }));

        for (i, metric) in self.metrics.iter().enumerate() {
            let text = metric.label.lines().next().unwrap_or_default().to_string();
            shapes.push(Shape::Label {
                at: self.point(i, RADIUS + LABEL_OFFSET),
                text,
            });
        }

        shapes
    }
}

impl Animation for RadarChart {
    fn tick<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Tick {
        self.frame += 1;
        // Derived from the frame count so float drift cannot skip the final frame.
        self.progress = (f64::from(self.frame) * PROGRESS_STEP).min(1.0);
        if self.progress >= 1.0 {
            Tick::Done
        } else {
            Tick::After(FRAME_MS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn chart() -> RadarChart {
        RadarChart::new([("A", 1.0), ("B", 0.5), ("C", 0.25), ("D\nwrapped", 0.8)])
    }

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn progress_reaches_one_in_about_33_frames() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut radar = chart();
        let mut frames = 1;
        while radar.tick(&mut rng) != Tick::Done {
            frames += 1;
            assert!(radar.progress() < 1.0);
        }
        assert_eq!(radar.progress(), 1.0);
        assert!((33..=34).contains(&frames), "took {frames} frames");
    }

    #[test]
    fn emits_rings_spokes_area_dots_labels() {
        let radar = chart();
        let shapes = radar.shapes();
        let rings = shapes.iter().filter(|s| matches!(s, Shape::Ring(_))).count();
        let spokes = shapes.iter().filter(|s| matches!(s, Shape::Spoke { .. })).count();
        let areas = shapes.iter().filter(|s| matches!(s, Shape::Area(_))).count();
        let dots = shapes.iter().filter(|s| matches!(s, Shape::Dot { .. })).count();
        let labels = shapes.iter().filter(|s| matches!(s, Shape::Label { .. })).count();
        assert_eq!((rings, spokes, areas, dots, labels), (4, 4, 1, 4, 4));
    }

    #[test]
    fn first_spoke_points_straight_up() {
        let radar = chart();
        let spoke = radar
            .shapes()
            .into_iter()
            .find(|s| matches!(s, Shape::Spoke { .. }))
            .expect("spoke");
        let Shape::Spoke { from, to } = spoke else { unreachable!() };
        assert!(close(from, CENTER));
        assert!(close(to, (100.0, 25.0)));
    }

    #[test]
    fn area_scales_with_progress() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut radar = chart();
        let area = |radar: &RadarChart| {
            radar
                .shapes()
                .into_iter()
                .find_map(|s| match s {
                    Shape::Area(points) => Some(points),
                    _ => None,
                })
                .expect("area")
        };

        // Before the first frame the polygon collapses onto the centre
        assert!(area(&radar).iter().all(|&p| close(p, CENTER)));

        while radar.tick(&mut rng) != Tick::Done {}
        let full = area(&radar);
        // Metric A (value 1.0) sits on the outer ring
        assert!(close(full[0], (100.0, 25.0)));
    }

    #[test]
    fn labels_use_first_line() {
        let labels: Vec<String> = chart()
            .shapes()
            .into_iter()
            .filter_map(|s| match s {
                Shape::Label { text, .. } => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["A", "B", "C", "D"]);
    }
}
