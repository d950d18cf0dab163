use std::fs;

use clap::{App, Arg, ArgMatches};

use sparseline::{
    Closest, ClosestFuture, ClosestPast, ForwardHold, Interpolator, Linear, NoInterpolation,
    Result, Sample, SampleSeries, SparselineErr, Timestamp,
};

#[macro_use]
extern crate log;

pub const FILE_ARG: &str = "file";
pub const AT_ARG: &str = "at";
pub const STRATEGY_ARG: &str = "strategy";
pub const MAX_DISTANCE_ARG: &str = "max_distance";
pub const PRUNE_ARG: &str = "prune";

///
/// Command line scrubber over a JSON sample file.
/// args:
/// file, -f, path to a JSON array of {"timestamp", "value"} objects
/// at, -t, the instant to look up
/// strategy, -s, one of none|past|future|closest|hold|linear, default closest
/// max-distance, -d, interpolation window, default inf
/// prune, -p, optional from:to range removed before the lookup
///
fn main() {
    env_logger::init();

    let matches = App::new("sparseline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("interpolating lookup over a sparse time series")
        .args(&[
            Arg::with_name(FILE_ARG)
                .short("f")
                .long("file")
                .takes_value(true)
                .required(true),
            Arg::with_name(AT_ARG)
                .short("t")
                .long("at")
                .takes_value(true)
                .required(true),
            Arg::with_name(STRATEGY_ARG)
                .short("s")
                .long("strategy")
                .default_value("closest"),
            Arg::with_name(MAX_DISTANCE_ARG)
                .short("d")
                .long("max-distance")
                .default_value("inf"),
            Arg::with_name(PRUNE_ARG)
                .short("p")
                .long("prune")
                .takes_value(true),
        ])
        .get_matches();

    let mut series = load_series(&matches).expect("cannot load sample file");
    info!("loaded {} samples", series.len());

    if let Some(prune) = matches.value_of(PRUNE_ARG) {
        let (from, to) = parse_prune(prune).expect("invalid prune range");
        series
            .remove_range(from, to, false)
            .expect("invalid prune range");
        debug!("pruned {} - {}, {} samples left", from, to, series.len());
    }

    let at: Timestamp = matches
        .value_of(AT_ARG)
        .unwrap()
        .parse()
        .expect("invalid query timestamp");
    let strategy = strategy_from(&matches).expect("invalid strategy");

    match series.get_value(at, strategy.as_ref()) {
        Some(value) => println!("{}", value),
        None => println!("no value"),
    }
}

fn load_series(matches: &ArgMatches) -> Result<SampleSeries<f64>> {
    let path = matches.value_of(FILE_ARG).unwrap();
    let content = fs::read_to_string(path).expect("cannot read sample file");
    let samples: Vec<Sample<f64>> =
        serde_json::from_str(&content).expect("cannot parse sample file");

    let mut timestamps = Vec::with_capacity(samples.len());
    let mut values = Vec::with_capacity(samples.len());
    for sample in samples {
        timestamps.push(sample.timestamp);
        values.push(sample.value);
    }
    let mut series = SampleSeries::new();
    series.insert_many(timestamps, values)?;
    Ok(series)
}

fn parse_prune(prune: &str) -> Result<(Timestamp, Timestamp)> {
    let bounds: Vec<&str> = prune.splitn(2, ':').collect();
    if bounds.len() != 2 {
        return Err(SparselineErr::InvalidParameter(format!(
            "prune range must be of form from:to, got '{}'",
            prune
        )));
    }
    let from = parse_bound(bounds[0])?;
    let to = parse_bound(bounds[1])?;
    Ok((from, to))
}

fn parse_bound(bound: &str) -> Result<Timestamp> {
    bound.parse().map_err(|_| {
        SparselineErr::InvalidParameter(format!("cannot parse range bound '{}'", bound))
    })
}

fn strategy_from(matches: &ArgMatches) -> Result<Box<dyn Interpolator<f64>>> {
    let max_distance: f64 = matches
        .value_of(MAX_DISTANCE_ARG)
        .unwrap()
        .parse()
        .map_err(|_| SparselineErr::InvalidParameter("cannot parse max distance".to_string()))?;
    match matches.value_of(STRATEGY_ARG).unwrap() {
        "none" => Ok(Box::new(NoInterpolation)),
        "past" => Ok(Box::new(ClosestPast::new(max_distance)?)),
        "future" => Ok(Box::new(ClosestFuture::new(max_distance)?)),
        "closest" => Ok(Box::new(Closest::new(max_distance, max_distance, true)?)),
        "hold" => Ok(Box::new(ForwardHold::new(max_distance))),
        "linear" => Ok(Box::new(Linear)),
        other => Err(SparselineErr::InvalidParameter(format!(
            "unknown strategy '{}'",
            other
        ))),
    }
}
