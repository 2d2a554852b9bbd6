//! Print a few shape renderings and query results.
//!
//! Usage:
//!   cargo run -p planar --example shape_queries

use planar::prelude::*;

fn main() {
    let square = Polygon::new(vec![
        Point::new(0, 0),
        Point::new(4, 0),
        Point::new(4, 4),
        Point::new(0, 4),
    ]);
    let shapes: Vec<AnyShape> = vec![
        Point::new(2, 2).into(),
        Segment::new(Point::new(-1, 2), Point::new(5, 2)).into(),
        Ray::new(Point::new(2, 2), Vector::new(1, 3)).into(),
        Line::new(Point::new(0, 0), Point::new(1, 1)).into(),
        Circle::new(Point::new(2, 2), 2).into(),
        square.into(),
    ];
    let query = Point::new(2, 2);
    let cut = Segment::new(Point::new(0, 5), Point::new(5, 0));
    for s in &shapes {
        println!(
            "{s}: contains {query} = {}, crosses {cut} = {}",
            s.contains_point(&query),
            s.crosses_segment(&cut)
        );
    }
}
