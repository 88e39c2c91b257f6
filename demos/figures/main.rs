//! Geokit figure dump — computes one of each figure and logs the result.
//!
//! Usage:
//! ```text
//! cargo run --example figures                      # default parameters
//! cargo run --example figures -- 7 4               # polygon sides, fractal order
//! RUST_LOG=geokit=debug cargo run --example figures
//! ```

use geokit::geometry::{
    Circle, CuboidSpec, FractalKind, FractalSpec, PolygonMode, PolygonSpec, RotationSpec,
    StretchDirection, StretchShape, StretchSpec,
};
use geokit::math::{axis_limits, Point2, DEFAULT_AXIS_MARGIN};
use geokit::operations::creation::{
    MakeAngle, MakeCuboid, MakeIsoscelesTriangle, MakeStretch, RegularPolygon,
};
use geokit::operations::fractal::MakeFractal;
use geokit::operations::query::CircleIntersect;
use geokit::operations::transform::RotateCuboid;

fn main() -> geokit::Result<()> {
    // Default: WARN for everything, INFO for geokit and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geokit=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("figures=info".parse().unwrap_or_default())
        .add_directive("geokit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let sides = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);
    let order = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    for mode in [PolygonMode::Inscribed, PolygonMode::Circumscribed] {
        let poly = RegularPolygon::new(PolygonSpec::new(sides, 3.0).with_mode(mode)).execute()?;
        let (_, extent) = axis_limits(&poly.vertices, poly.circumradius, DEFAULT_AXIS_MARGIN);
        tracing::info!(
            ?mode,
            sides,
            perimeter = poly.perimeter,
            diagonal = poly.diagonal,
            interior = poly.interior_angle_deg,
            exterior = poly.exterior_angle_deg,
            area = poly.area,
            extent,
            "regular polygon"
        );
    }

    let c1 = Circle::new(Point2::new(0.0, 0.0), 5.0)?;
    let c2 = Circle::new(Point2::new(6.0, 0.0), 5.0)?;
    match CircleIntersect::new(&c1, &c2).execute() {
        Some([p, q]) => tracing::info!(%p, %q, "circle intersection"),
        None => tracing::info!("circles do not intersect"),
    }

    let spec = CuboidSpec::new(2.0, 1.0, 1.5);
    let cuboid = MakeCuboid::new(spec).execute()?;
    let rotated = RotateCuboid::new(&cuboid, RotationSpec::new(30.0, 45.0, 60.0)).execute()?;
    tracing::info!(
        volume = spec.volume(),
        surface_area = spec.surface_area(),
        first_vertex = %rotated.vertices[0],
        "rotated cuboid"
    );

    for kind in [FractalKind::Koch, FractalKind::Sierpinski] {
        let fractal = MakeFractal::new(FractalSpec::new(kind, order, 1.0)).execute()?;
        tracing::info!(?kind, order, primitives = fractal.len(), "fractal");
    }

    let angle = MakeAngle::new(135.0, 5.0).execute()?;
    tracing::info!(end_ray = %angle.end_ray[1], arc_points = angle.arc.len(), "angle figure");

    let tri = MakeIsoscelesTriangle::new(60.0, 1.0).execute()?;
    tracing::info!(base = tri[1].x - tri[0].x, "isosceles triangle");

    for shape in [StretchShape::Rectangle, StretchShape::Circle] {
        let spec = StretchSpec::new(1.5, StretchDirection::Vertical, shape);
        let stretched = MakeStretch::new(spec).execute()?;
        tracing::info!(?shape, area = stretched.area(), "stretched base square");
    }

    Ok(())
}
