//! Parsing helpers shared between days.

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").unwrap());

/// Splits the input into paragraphs separated by blank lines.
pub fn blocks(input: &str) -> impl Iterator<Item = &str> {
    input.trim().split("\n\n").map(|block| block.trim_matches('\n'))
}

/// All (possibly negative) integers appearing in `line`, in order.
pub fn ints<T: FromStr>(line: &str) -> Vec<T> where T::Err: std::fmt::Debug {
    INT_RE.find_iter(line).map(|m| m.as_str().parse().expect(line)).collect()
}

pub fn gcd(a: u64, b: u64) -> u64 {if b == 0 {a} else {gcd(b, a % b)}}
pub fn lcm(a: u64, b: u64) -> u64 {a / gcd(a, b) * b}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_keeps_signs() {
        assert_eq!(ints::<i64>("Sensor at x=2, y=-18: closest beacon is at x=-2, y=15"), [2, -18, -2, 15]);
        assert_eq!(ints::<u32>("move 13 from 2 to 1"), [13, 2, 1]);
    }

    #[test]
    fn blocks_split_on_blank_lines() {
        let blocks = blocks("1\n2\n\n3\n\n\n4\n").collect::<Vec<_>>();
        assert_eq!(blocks, ["1\n2", "3", "4"]);
    }

    #[test]
    fn lcm_of_divisors() {
        assert_eq!([23, 19, 13, 17].into_iter().fold(1, lcm), 96577);
        assert_eq!(lcm(4, 6), 12);
    }
}
