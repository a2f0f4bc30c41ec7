use anyhow::{ensure, Context};
use clap::Parser;
use std::path::PathBuf;

mod input;

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;
mod day13;
mod day14;
mod day15;
mod day16;
mod day17;
mod day18;
mod day19;

const DAYS: [fn(u8, &str) -> String; 19] = [
    day01::day1, day02::day2, day03::day3, day04::day4, day05::day5, day06::day6, day07::day7,
    day08::day8, day09::day9, day10::day10, day11::day11, day12::day12, day13::day13,
    day14::day14, day15::day15, day16::day16, day17::day17, day18::day18, day19::day19
];

/// Advent of Code 2022 solutions.
///
/// Reads `day{DAY}.in`, or `day{DAY}test{TEST}.in` when a test number is given.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Day number
    day: usize,
    /// Test input number, followed by the part
    #[arg(num_args = 1 ..= 2, required = true, value_name = "[TEST] PART")]
    rest: Vec<u8>,
    /// Read the puzzle input from this file instead
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder().init();
    let args = Args::parse();

    let (part, fname) = match args.rest[..] {
        [part] => (part, format!("day{}.in", args.day)),
        [test, part] => (part, format!("day{}test{}.in", args.day, test)),
        _ => unreachable!()
    };
    ensure!((1 ..= DAYS.len()).contains(&args.day), "day must be between 1 and {}", DAYS.len());
    ensure!(part == 1 || part == 2, "part must be 1 or 2, got {}", part);

    let path = args.input.unwrap_or_else(|| PathBuf::from(fname));
    log::info!("reading {}", path.display());
    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read input file {}", path.display()))?;

    let time = std::time::Instant::now();
    println!("{}", DAYS[args.day - 1](part, &input));
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
