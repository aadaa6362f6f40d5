//! Text rendering of planning results

use canvas_route_lib::{BlockAddress, Endpoint, GeoRoutePlan, viewer_url};
use std::fmt::Write;

fn block(addr: &BlockAddress) -> String {
    format!(
        "block ({}, {}) px ({}, {})",
        addr.block_x, addr.block_y, addr.local_x, addr.local_y
    )
}

fn endpoint(label: &str, ep: &Endpoint, out: &mut String) {
    let _ = writeln!(out, "{label}: lat {:.6}, lng {:.6}", ep.geo.lat, ep.geo.lng);
    let _ = writeln!(out, "  world  ({:.2}, {:.2})", ep.world.x(), ep.world.y());
    let _ = writeln!(out, "  chunk  {}", block(&ep.chunk));
    let _ = writeln!(out, "  tile   {}", block(&ep.tile));
}

/// Render a full plan report; `planned_end_url` is the viewer link for the
/// plan's reconstructed endpoint
pub fn render_plan(route: &GeoRoutePlan, planned_end_url: &str) -> String {
    let mut out = String::new();
    endpoint("start", &route.start, &mut out);
    endpoint("end", &route.end, &mut out);

    let plan = &route.plan;
    match plan.slopes {
        Some((a, b)) => {
            let _ = writeln!(
                out,
                "slopes: a = {a:.6} x{}, b = {b:.6} x{}",
                plan.run_a, plan.run_b
            );
        }
        None => {
            let _ = writeln!(out, "slopes: none (vertical move)");
        }
    }

    let _ = writeln!(out, "polyline:");
    for (i, vertex) in plan.polyline_world.iter().enumerate() {
        let _ = writeln!(
            out,
            "  [{i}] world ({:.2}, {:.2})  chunk {}  tile {}",
            vertex.x(),
            vertex.y(),
            block(&plan.polyline_chunks[i]),
            block(&plan.polyline_tiles[i]),
        );
    }

    let _ = writeln!(
        out,
        "residual error: ({:.3}, {:.3}) px",
        plan.residual_error.x, plan.residual_error.y
    );
    let _ = write!(out, "planned end: {planned_end_url}");
    out
}

/// Render a single located point
pub fn render_endpoint(ep: &Endpoint, link_zoom: u8) -> String {
    let mut out = String::new();
    endpoint("point", ep, &mut out);
    let _ = write!(
        out,
        "viewer: {}",
        viewer_url::viewer_url(ep.geo, link_zoom)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_route_lib::{Config, GeoPoint, RouteAssembler};

    #[test]
    fn test_render_plan_lists_every_vertex() {
        let assembler = RouteAssembler::new(Config::default());
        let route = assembler.plan_between(
            GeoPoint::new(51.5074, -0.1278),
            GeoPoint::new(51.5080, -0.1200),
        );
        let text = render_plan(&route, "https://wplace.live/?lat=0&lng=0&zoom=18");

        assert!(text.contains("start: lat 51.507400"));
        assert!(text.contains("residual error:"));
        assert!(text.contains("planned end: https://wplace.live/"));
        let vertex_lines = text.lines().filter(|l| l.trim_start().starts_with('[')).count();
        assert_eq!(vertex_lines, route.plan.polyline_world.len());
    }

    #[test]
    fn test_render_endpoint_includes_viewer_link() {
        let assembler = RouteAssembler::new(Config::default());
        let ep = assembler.endpoint(GeoPoint::new(10.0, 20.0));
        let text = render_endpoint(&ep, 18);
        assert!(text.contains("viewer: https://wplace.live/?lat=10&lng=20&zoom=18"));
    }
}
