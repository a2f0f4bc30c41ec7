use rustc_hash::FxHashSet;

type Pos = (i32, i32);

/// Moves `knot` one step towards `leader` unless they already touch.
fn follow(knot: &mut Pos, leader: Pos) {
    let (dx, dy) = (leader.0 - knot.0, leader.1 - knot.1);
    if dx.abs() > 1 || dy.abs() > 1 {
        knot.0 += dx.signum();
        knot.1 += dy.signum();
    }
}

pub fn day9(part: u8, input: &str) -> String {
    let mut rope = vec![(0, 0); if part == 1 {2} else {10}];
    let mut visited = FxHashSet::default();
    visited.insert((0, 0));
    for line in input.trim().lines() {
        let (dir, steps) = line.trim().split_once(' ').expect(line);
        let (dx, dy) = match dir {
            "R" => (1, 0), "L" => (-1, 0), "U" => (0, 1), "D" => (0, -1),
            _ => panic!("unexpected direction {}", dir)
        };
        for _ in 0 .. steps.parse::<u32>().expect(line) {
            rope[0].0 += dx;
            rope[0].1 += dy;
            for ix in 1 .. rope.len() {
                let leader = rope[ix - 1];
                follow(&mut rope[ix], leader);
            }
            visited.insert(*rope.last().unwrap());
        }
    }
    visited.len().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knot_steps() {
        let mut knot = (0, 0);
        follow(&mut knot, (1, 1));
        assert_eq!(knot, (0, 0));
        follow(&mut knot, (2, 0));
        assert_eq!(knot, (1, 0));
        follow(&mut knot, (2, 2));
        assert_eq!(knot, (2, 1));
    }

    #[test]
    fn sample() {
        let input = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
        assert_eq!(day9(1, input), "13");
        assert_eq!(day9(2, input), "1");
    }

    #[test]
    fn larger_sample() {
        let input = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";
        assert_eq!(day9(2, input), "36");
    }
}
