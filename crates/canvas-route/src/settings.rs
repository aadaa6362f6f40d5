use canvas_route_lib::{Config, GeoPoint, Result, RouteError, SegmentOrder, SlopeSet, viewer_url};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Canvas Route - plan slope-constrained routes on a tile-based pixel canvas
pub struct Settings {
    #[clap(subcommand)]
    pub command: Command,

    /// Chunk edge length in pixels
    #[clap(long, default_value = "4000")]
    pub chunk_modulus: u32,

    /// Tile edge length in pixels
    #[clap(long, default_value = "1000")]
    pub tile_modulus: u32,

    /// Raster zoom level of the canvas
    #[clap(long, default_value = "9")]
    pub zoom: u8,

    /// Which allowed-slope set to plan with
    #[clap(long, value_enum, default_value = "standard")]
    pub slope_set: SlopeSetChoice,

    /// Explicit slope values for --slope-set custom (comma separated)
    #[clap(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub slopes: Vec<f64>,

    /// Which bracket slope to run first
    #[clap(long, value_enum, default_value = "auto")]
    pub order: OrderChoice,

    /// Keep fractional pixel endpoints instead of rounding
    #[clap(long, default_value = "false")]
    pub no_round: bool,

    /// Emit JSON instead of the text report
    #[clap(long, default_value = "false")]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Plan a route between two points (viewer URLs or lat,lng pairs)
    Plan {
        /// Start point: a viewer URL or "lat,lng"
        from: String,
        /// End point: a viewer URL or "lat,lng"
        to: String,
    },
    /// Show world, chunk, and tile coordinates of one point
    Locate {
        /// A viewer URL or "lat,lng"
        point: String,
    },
    /// Extract lat/lng from a viewer URL
    ParseUrl {
        /// The viewer URL
        url: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeSetChoice {
    /// 9-entry reciprocal ladder, 1/5 through 5
    Standard,
    /// 19-entry reciprocal ladder, 1/10 through 10
    Fine,
    /// Values given via --slopes
    Custom,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderChoice {
    Auto,
    AFirst,
    BFirst,
}

impl From<OrderChoice> for SegmentOrder {
    fn from(choice: OrderChoice) -> Self {
        match choice {
            OrderChoice::Auto => SegmentOrder::Auto,
            OrderChoice::AFirst => SegmentOrder::AFirst,
            OrderChoice::BFirst => SegmentOrder::BFirst,
        }
    }
}

impl Settings {
    /// Build the planner configuration from the parsed flags
    pub fn to_config(&self) -> Result<Config> {
        let slope_set = match self.slope_set {
            SlopeSetChoice::Standard => SlopeSet::standard(),
            SlopeSetChoice::Fine => SlopeSet::fine(),
            SlopeSetChoice::Custom => SlopeSet::new(self.slopes.iter().copied())?,
        };
        Ok(Config {
            chunk_modulus: self.chunk_modulus,
            tile_modulus: self.tile_modulus,
            zoom: self.zoom,
            slope_set,
            order: self.order.into(),
            round_to_int: !self.no_round,
        })
    }
}

/// Parse a point argument: a viewer URL or a bare "lat,lng" pair
pub fn parse_point(input: &str) -> Result<GeoPoint> {
    if input.starts_with("http://") || input.starts_with("https://") {
        return viewer_url::parse_viewer_url(input);
    }
    let mut parts = input.splitn(2, ',');
    let lat = parts
        .next()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite());
    let lng = parts
        .next()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite());
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(GeoPoint::new(lat, lng)),
        (None, _) => Err(RouteError::MissingCoordinate("lat")),
        (_, None) => Err(RouteError::MissingCoordinate("lng")),
    }
}
