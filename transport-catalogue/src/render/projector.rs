//! Projection of geographic coordinates onto the map canvas.

use crate::domain::Coordinates;

/// Spans smaller than this are treated as zero.
const EPSILON: f64 = 1e-6;

/// A point on the canvas, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Maps latitude and longitude onto a canvas with padding.
///
/// The bounding box of the input points is scaled uniformly so that it
/// fits inside the padded canvas. West is left and north is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    /// Fit `points` into a `width` x `height` canvas.
    ///
    /// With no points, or when every point coincides, everything lands on
    /// the padding corner.
    pub fn new(points: &[Coordinates], width: f64, height: f64, padding: f64) -> Self {
        let mut projector = Self {
            padding,
            min_lng: 0.0,
            max_lat: 0.0,
            zoom: 0.0,
        };
        let Some(first) = points.first() else {
            return projector;
        };

        let (mut min_lng, mut max_lng) = (first.lng, first.lng);
        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        for point in &points[1..] {
            min_lng = min_lng.min(point.lng);
            max_lng = max_lng.max(point.lng);
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
        }
        projector.min_lng = min_lng;
        projector.max_lat = max_lat;

        let width_zoom = (max_lng - min_lng >= EPSILON)
            .then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom = (max_lat - min_lat >= EPSILON)
            .then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        projector.zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };
        projector
    }

    pub fn project(&self, coordinates: Coordinates) -> Point {
        Point {
            x: (coordinates.lng - self.min_lng) * self.zoom + self.padding,
            y: (self.max_lat - coordinates.lat) * self.zoom + self.padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_land_on_padding() {
        let points = [Coordinates::new(10.0, 20.0), Coordinates::new(11.0, 22.0)];
        let projector = SphereProjector::new(&points, 600.0, 400.0, 50.0);

        // Width allows 250 px per degree, height 300; the smaller wins.
        let north_west = projector.project(Coordinates::new(11.0, 20.0));
        assert_relative_eq!(north_west.x, 50.0);
        assert_relative_eq!(north_west.y, 50.0);

        let south_east = projector.project(Coordinates::new(10.0, 22.0));
        assert_relative_eq!(south_east.x, 550.0);
        assert_relative_eq!(south_east.y, 300.0);
    }

    #[test]
    fn flat_span_uses_other_axis() {
        let points = [Coordinates::new(10.0, 20.0), Coordinates::new(12.0, 20.0)];
        let projector = SphereProjector::new(&points, 600.0, 400.0, 50.0);

        let south = projector.project(Coordinates::new(10.0, 20.0));
        assert_relative_eq!(south.x, 50.0);
        assert_relative_eq!(south.y, 350.0);
    }

    #[test]
    fn degenerate_inputs_collapse_to_padding() {
        let empty = SphereProjector::new(&[], 600.0, 400.0, 30.0);
        assert_eq!(
            empty.project(Coordinates::new(1.0, 1.0)),
            Point { x: 30.0, y: 30.0 }
        );

        let single = SphereProjector::new(&[Coordinates::new(5.0, 5.0)], 600.0, 400.0, 30.0);
        assert_eq!(
            single.project(Coordinates::new(5.0, 5.0)),
            Point { x: 30.0, y: 30.0 }
        );
    }
}
