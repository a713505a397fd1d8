use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::Level;

use trip_polyline::{Coordinate, EncodedPolyline, Polyline, Precision};

/// Encode and decode trip-plan leg geometries
///
/// Examples:
///   # Decode a leg geometry string
///   trip-polyline decode '_p~iF~ps|U_ulLnnqC_mqNvxq`@'
///
///   # Decode a legGeometry object, checking its point count
///   trip-polyline decode --geometry '{"points":"??_ibE_ibE","length":2}'
///
///   # Encode coordinates given on the command line
///   trip-polyline encode 38.5,-120.2 40.7,-120.95 43.252,-126.453
///
///   # Southern-hemisphere points need --point so they are not read as flags
///   trip-polyline encode -p -33.8688,151.2093 -p -37.8136,144.9631 --json
///
///   # Encode "lat,lng" lines from stdin at six digits of precision
///   trip-polyline --precision 1e6 encode --json < route.txt
#[derive(Parser, Debug)]
#[command(name = "trip-polyline")]
#[command(version, about, long_about = None)]
struct Args {
    /// Precision factor (1e5 means five decimal digits)
    #[arg(long, global = true, env = "TRIP_POLYLINE_PRECISION", default_value = "1e5")]
    precision: Precision,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode polyline strings into "lat,lng" lines
    Decode {
        /// Encoded polylines (or legGeometry JSON objects with --geometry)
        #[arg(required = true)]
        polylines: Vec<String>,

        /// Treat each argument as a {"points", "length"} JSON object
        #[arg(long)]
        geometry: bool,

        /// Print a JSON array of [lat, lng] pairs instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Encode coordinates into a polyline string
    Encode {
        /// "lat,lng" pairs; read from stdin, one per line, when omitted
        #[arg(value_parser = parse_coordinate, conflicts_with = "points")]
        coordinates: Vec<Coordinate>,

        /// One "lat,lng" pair per use; accepts negative latitudes
        #[arg(short = 'p', long = "point", value_name = "LAT,LNG")]
        #[arg(value_parser = parse_coordinate, allow_hyphen_values = true)]
        points: Vec<Coordinate>,

        /// Print a {"points", "length"} JSON object instead of the bare string
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match args.command {
        Command::Decode {
            polylines,
            geometry,
            json,
        } => {
            for input in &polylines {
                let polyline = decode_input(input, geometry, args.precision)?;
                tracing::debug!(
                    "Decoded {} points, {:.3} km",
                    polyline.len(),
                    polyline.length_km()
                );
                println!("{}", format_points(polyline.points(), json)?);
            }
        }
        Command::Encode {
            coordinates,
            points,
            json,
        } => {
            let coordinates = match (coordinates.is_empty(), points.is_empty()) {
                (true, true) => read_coordinates(io::stdin().lock())?,
                (false, _) => coordinates,
                (true, false) => points,
            };
            println!("{}", encode_output(&coordinates, args.precision, json)?);
        }
    }

    Ok(())
}

/// Decodes one argument, either a bare polyline or a leg geometry object.
fn decode_input(input: &str, geometry: bool, precision: Precision) -> Result<Polyline> {
    let decoded = if geometry {
        let encoded: EncodedPolyline =
            serde_json::from_str(input).context("Failed to parse leg geometry JSON")?;
        encoded.decode(precision)
    } else {
        Polyline::decode(input, precision)
    };
    decoded.with_context(|| format!("Failed to decode polyline {:?}", input))
}

fn format_points(points: &[Coordinate], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(points)?);
    }
    Ok(points
        .iter()
        .map(|(lat, lng)| format!("{},{}", lat, lng))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn encode_output(points: &[Coordinate], precision: Precision, json: bool) -> Result<String> {
    let encoded =
        EncodedPolyline::from_coordinates(points, precision).context("Failed to encode coordinates")?;
    if json {
        Ok(serde_json::to_string(&encoded)?)
    } else {
        Ok(encoded.points().to_string())
    }
}

/// Reads one "lat,lng" pair per non-empty line.
fn read_coordinates<R: BufRead>(reader: R) -> Result<Vec<Coordinate>> {
    let mut points = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read coordinates from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let point = parse_coordinate(&line).with_context(|| format!("Line {}", number + 1))?;
        points.push(point);
    }
    Ok(points)
}

fn parse_coordinate(text: &str) -> Result<Coordinate> {
    let Some((lat, lng)) = text.trim().split_once(',') else {
        bail!("Expected \"lat,lng\", got {:?}", text);
    };
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("Invalid latitude in {:?}", text))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("Invalid longitude in {:?}", text))?;
    Ok((lat, lng))
}
