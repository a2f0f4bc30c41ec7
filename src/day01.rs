use crate::input::blocks;
use itertools::Itertools;

pub fn day1(part: u8, input: &str) -> String {
    let totals = blocks(input).map(|elf|
        elf.lines().map(|line| line.trim().parse::<u64>().expect(line)).sum::<u64>()
    );
    let take = if part == 1 {1} else {3};
    totals.sorted_unstable_by(|a, b| b.cmp(a)).take(take).sum::<u64>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

    #[test]
    fn sample() {
        assert_eq!(day1(1, SAMPLE), "24000");
        assert_eq!(day1(2, SAMPLE), "45000");
    }

    #[test]
    fn fewer_than_three_elves() {
        assert_eq!(day1(2, "5\n\n7"), "12");
    }
}
