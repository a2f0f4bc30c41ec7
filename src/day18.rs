use crate::input::ints;
use rustc_hash::FxHashSet;

type Cube = [i32; 3];

fn neighbours([x, y, z]: Cube) -> [Cube; 6] {
    [[x - 1, y, z], [x + 1, y, z], [x, y - 1, z], [x, y + 1, z], [x, y, z - 1], [x, y, z + 1]]
}

pub fn day18(part: u8, input: &str) -> String {
    let cubes = input.trim().lines().map(|line| {
        let [x, y, z] = ints::<i32>(line)[..] else {panic!("cannot parse cube {}", line)};
        [x, y, z]
    }).collect::<FxHashSet<Cube>>();

    if part == 1 {
        return cubes.iter().flat_map(|&cube| neighbours(cube))
            .filter(|side| !cubes.contains(side)).count().to_string();
    }

    // flood the air around the droplet, one unit beyond its bounding box
    let lo: Cube = std::array::from_fn(|axis| cubes.iter().map(|c| c[axis]).min().unwrap_or(0) - 1);
    let hi: Cube = std::array::from_fn(|axis| cubes.iter().map(|c| c[axis]).max().unwrap_or(0) + 1);
    let mut outside = FxHashSet::default();
    let mut stack = vec![lo];
    let mut faces = 0;
    outside.insert(lo);
    while let Some(air) = stack.pop() {
        for next in neighbours(air) {
            if (0 .. 3).any(|axis| next[axis] < lo[axis] || next[axis] > hi[axis]) {continue};
            if cubes.contains(&next) {
                faces += 1;
            } else if outside.insert(next) {
                stack.push(next);
            }
        }
    }
    faces.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5
";

    #[test]
    fn two_cubes() {
        assert_eq!(day18(1, "1,1,1\n2,1,1\n"), "10");
        assert_eq!(day18(2, "1,1,1\n2,1,1\n"), "10");
    }

    #[test]
    fn sample() {
        assert_eq!(day18(1, SAMPLE), "64");
        assert_eq!(day18(2, SAMPLE), "58");
    }
}
