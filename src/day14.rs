use crate::input::ints;
use bitvec::prelude::*;
use itertools::Itertools;

const SOURCE: (usize, usize) = (500, 0);

struct Cave {blocked: BitVec, x0: usize, width: usize, max_y: usize}

impl Cave {
    fn parse(input: &str) -> Cave {
        let paths = input.trim().lines().map(|line|
            ints::<usize>(line).into_iter().tuples().collect::<Vec<(usize, usize)>>()
        ).collect::<Vec<_>>();
        let points = || paths.iter().flatten();
        let max_y = points().map(|p| p.1).max().expect("no rock paths");
        // sand on the floor spreads at most floor-height to either side of the source
        let reach = max_y + 3;
        let x0 = points().map(|p| p.0).min().unwrap().min(SOURCE.0 - reach) - 1;
        let x1 = points().map(|p| p.0).max().unwrap().max(SOURCE.0 + reach) + 1;
        let width = x1 - x0 + 1;
        let mut cave = Cave {blocked: bitvec![0; width * (max_y + 3)], x0, width, max_y};
        for path in &paths {
            for (&(ax, ay), &(bx, by)) in path.iter().tuple_windows() {
                assert!(ax == bx || ay == by, "diagonal rock path {:?} -> {:?}", (ax, ay), (bx, by));
                for x in ax.min(bx) ..= ax.max(bx) {
                    for y in ay.min(by) ..= ay.max(by) {cave.set(x, y)}
                }
            }
        }
        cave
    }

    fn index(&self, x: usize, y: usize) -> usize {y * self.width + x - self.x0}
    fn set(&mut self, x: usize, y: usize) {let ix = self.index(x, y); self.blocked.set(ix, true)}

    fn is_free(&self, x: usize, y: usize, floor: bool) -> bool {
        !(floor && y == self.max_y + 2) && !self.blocked[self.index(x, y)]
    }

    /// Drops sand until it falls into the abyss, or with a floor until the source is buried.
    fn fill(&mut self, floor: bool) -> usize {
        let mut settled = 0;
        // positions of the unit currently falling; the next unit retraces the same path
        let mut path = vec![SOURCE];
        while let Some(&(x, y)) = path.last() {
            if !floor && y > self.max_y {break};
            match [x, x - 1, x + 1].into_iter().find(|&nx| self.is_free(nx, y + 1, floor)) {
                Some(nx) => path.push((nx, y + 1)),
                None => {
                    self.set(x, y);
                    settled += 1;
                    path.pop();
                }
            }
        }
        settled
    }
}

pub fn day14(part: u8, input: &str) -> String {
    Cave::parse(input).fill(part == 2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9\n";

    #[test]
    fn sample() {
        assert_eq!(day14(1, SAMPLE), "24");
        assert_eq!(day14(2, SAMPLE), "93");
    }

    #[test]
    fn narrow_ledge() {
        assert_eq!(day14(1, "500,2 -> 500,2"), "0");
        assert_eq!(day14(1, "499,2 -> 501,2"), "1");
    }
}
