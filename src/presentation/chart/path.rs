//! Smooth line path through plotted points.

use super::Point;

/// One drawing command of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    CubicTo { c1: Point, c2: Point, end: Point },
}

/// Cubic Bézier per pair of neighbors, both control points on the horizontal
/// midpoint: the first at the start's height, the second at the end's.
///
/// Curves stay flat at each sample, so the line never overshoots a local extreme.
pub fn smooth_path(points: &[Point]) -> Vec<PathSegment> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut segments = Vec::with_capacity(points.len());
    segments.push(PathSegment::MoveTo(*first));
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let mid_x = (p0.x + p1.x) / 2.0;
        segments.push(PathSegment::CubicTo {
            c1: Point::new(mid_x, p0.y),
            c2: Point::new(mid_x, p1.y),
            end: p1,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert!(smooth_path(&[]).is_empty());
        let p = Point::new(1.0, 2.0);
        assert_eq!(smooth_path(&[p]), vec![PathSegment::MoveTo(p)]);
    }

    #[test]
    fn test_control_points_on_midpoint() {
        let points = [Point::new(0.0, 10.0), Point::new(20.0, 30.0), Point::new(40.0, 5.0)];
        let path = smooth_path(&points);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], PathSegment::MoveTo(points[0]));
        assert_eq!(
            path[1],
            PathSegment::CubicTo {
                c1: Point::new(10.0, 10.0),
                c2: Point::new(10.0, 30.0),
                end: points[1],
            }
        );
        assert_eq!(
            path[2],
            PathSegment::CubicTo {
                c1: Point::new(30.0, 30.0),
                c2: Point::new(30.0, 5.0),
                end: points[2],
            }
        );
    }
}
