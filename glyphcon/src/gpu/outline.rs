//! Box outline vertices for the line-strip pipeline.

use std::ops::Range;

use glyphcon_core::Rgba;

/// Window pixel (y-down) to clip space of a `width × height` surface.
pub fn to_clip(p: [f32; 2], width: f32, height: f32) -> [f32; 2] {
    let width = width.max(1.0);
    let height = height.max(1.0);
    [2.0 * p[0] / width - 1.0, 1.0 - 2.0 * p[1] / height]
}

/// Polylines queued for the next frame. Points stay in window pixels until
/// the surface size is known at render time.
#[derive(Debug, Default)]
pub(super) struct OutlineWriter {
    polylines: Vec<(Vec<[f32; 2]>, Rgba)>,
}

impl OutlineWriter {
    /// Queue a polyline. Fewer than two points draw nothing and are dropped.
    pub(super) fn push(&mut self, points: &[[f32; 2]], color: Rgba) {
        if points.len() >= 2 {
            self.polylines.push((points.to_vec(), color));
        }
    }

    pub(super) fn clear(&mut self) {
        self.polylines.clear();
    }

    #[cfg(test)]
    pub(super) fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    /// Vertex bytes for every queued polyline, and the vertex range each
    /// one occupies in them.
    pub(super) fn build(&self, width: f32, height: f32) -> (Vec<u8>, Vec<Range<u32>>) {
        let mut data = Vec::new();
        let mut runs = Vec::with_capacity(self.polylines.len());
        let mut start = 0u32;
        for (points, color) in &self.polylines {
            for &p in points {
                let [x, y] = to_clip(p, width, height);
                for v in [x, y].into_iter().chain(color.0) {
                    data.extend_from_slice(&v.to_ne_bytes());
                }
            }
            let end = start + points.len() as u32;
            runs.push(start..end);
            start = end;
        }
        (data, runs)
    }
}

#[cfg(test)]
mod tests {
    use glyphcon_core::Rgba;

    use super::{OutlineWriter, to_clip};
    use crate::gpu::pipeline::OUTLINE_VERTEX_STRIDE;

    fn floats(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    #[test]
    fn window_corners_map_to_clip_corners() {
        assert_eq!(to_clip([0.0, 0.0], 200.0, 100.0), [-1.0, 1.0]);
        assert_eq!(to_clip([200.0, 100.0], 200.0, 100.0), [1.0, -1.0]);
        assert_eq!(to_clip([100.0, 50.0], 200.0, 100.0), [0.0, 0.0]);
        assert_eq!(to_clip([0.0, 0.0], 0.0, 0.0), [-1.0, 1.0]);
    }

    #[test]
    fn each_polyline_gets_its_own_run() {
        let mut w = OutlineWriter::default();
        let rect = [[0.0, 0.0], [200.0, 0.0], [200.0, 100.0], [0.0, 100.0], [0.0, 0.0]];
        w.push(&rect, Rgba::WHITE);
        w.push(&rect[..2], Rgba::BLACK);

        let (data, runs) = w.build(200.0, 100.0);
        assert_eq!(runs, vec![0..5, 5..7]);
        assert_eq!(data.len() as u64, 7 * OUTLINE_VERTEX_STRIDE);

        let f = floats(&data);
        assert_eq!(&f[0..6], &[-1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(&f[12..14], &[1.0, -1.0]);
        assert_eq!(&f[30..36], &[-1.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn single_points_are_dropped() {
        let mut w = OutlineWriter::default();
        w.push(&[[1.0, 1.0]], Rgba::BLACK);
        w.push(&[], Rgba::BLACK);
        assert!(w.is_empty());
        w.push(&[[1.0, 1.0], [2.0, 2.0]], Rgba::BLACK);
        assert!(!w.is_empty());
        w.clear();
        assert!(w.is_empty());
    }
}
