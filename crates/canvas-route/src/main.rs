//! Canvas Route CLI
//!
//! Plans slope-constrained routes on a tile-based pixel canvas and reports the
//! raster decomposition of geographic points.

mod report;
mod settings;
mod sink;

use canvas_route_lib::{RouteAssembler, RouteError, viewer_url};
use clap::Parser;
use settings::{Command, Settings, parse_point};
use sink::{DebugSink, StdoutSink};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("output failed: {0}")]
    Output(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    init_tracing();

    let settings = Settings::parse();
    if let Err(e) = run(&settings, &mut StdoutSink) {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, fmt};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

fn run(settings: &Settings, sink: &mut dyn DebugSink) -> Result<(), AppError> {
    let assembler = RouteAssembler::new(settings.to_config()?);

    let text = match &settings.command {
        Command::Plan { from, to } => {
            let route = assembler.plan_between(parse_point(from)?, parse_point(to)?);
            if settings.json {
                serde_json::to_string_pretty(&route)?
            } else {
                let end_url = assembler
                    .viewer_url_for_world(route.plan.end, viewer_url::DEFAULT_LINK_ZOOM);
                report::render_plan(&route, &end_url)
            }
        }
        Command::Locate { point } => {
            let ep = assembler.endpoint(parse_point(point)?);
            if settings.json {
                serde_json::to_string_pretty(&ep)?
            } else {
                report::render_endpoint(&ep, viewer_url::DEFAULT_LINK_ZOOM)
            }
        }
        Command::ParseUrl { url } => {
            let geo = viewer_url::parse_viewer_url(url)?;
            if settings.json {
                serde_json::to_string_pretty(&geo)?
            } else {
                format!("lat {}, lng {}", geo.lat, geo.lng)
            }
        }
    };

    if text.is_empty() {
        // Nothing to report is a bug in the renderer, not valid output
        return Err(AppError::Output(std::io::Error::other("empty report")));
    }
    sink.write_debug_text(&text)?;
    Ok(())
}
