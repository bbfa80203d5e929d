use std::error::Error;
use std::io::BufRead;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use beacon_exclusion::{count_excluded, find_gap, known_beacons, read_sensors, tuning_frequency};

const DEFAULT_ROW: i64 = 2000000;
const DEFAULT_LIMIT: i64 = 4000000;

const HELP: &str = "\
day15 <opts> part1 [row]|part2 [limit]

Reads sensor reports from stdin.

part1 [row]
    count positions on row (default 2000000) that can't hold a beacon
part2 [limit]
    find the uncovered position in [0,limit]x[0,limit] (default 4000000)
    and print x * limit + y

-h|--help
    show help

Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.
";

fn init_logging() -> Result<(), Box<dyn Error>> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    if args.iter().any(|&v| v == "-h" || v == "--help") {
        print!("{}", HELP);
        return Ok(());
    }
    init_logging()?;
    match args[..] {
        ["part1"] => println!("{}", part1(std::io::stdin().lock(), DEFAULT_ROW)?),
        ["part1", row] => println!("{}", part1(std::io::stdin().lock(), row.parse()?)?),
        ["part2"] => println!("{}", part2(std::io::stdin().lock(), DEFAULT_LIMIT)?),
        ["part2", limit] => println!("{}", part2(std::io::stdin().lock(), limit.parse()?)?),
        _ => {
            eprint!("{}", HELP);
            return Err("must specify part1|part2".into());
        },
    }
    Ok(())
}

fn part1(r: impl BufRead, row: i64) -> Result<u64, Box<dyn Error>> {
    let sensors = read_sensors(r)?;
    let beacons = known_beacons(&sensors);
    Ok(count_excluded(&sensors, &beacons, row))
}

fn part2(r: impl BufRead, limit: i64) -> Result<i64, Box<dyn Error>> {
    let sensors = read_sensors(r)?;
    let p = find_gap(&sensors, limit)?;
    Ok(tuning_frequency(&p, limit))
}

#[cfg(test)]
mod test {
    use super::*;

    const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes(), 10).unwrap(), 26);
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE.as_bytes(), 20).unwrap(), 291);
    }

    #[test]
    fn test_part1_bad_input() {
        assert!(part1("Sensor at x=a, y=2".as_bytes(), 10).is_err());
    }
}
