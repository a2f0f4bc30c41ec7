const DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Trees seen from `(ri, ci)` looking along `(rd, cd)`, and whether the view reaches the edge.
fn view(grid: &[&[u8]], ri: usize, ci: usize, (rd, cd): (isize, isize)) -> (usize, bool) {
    let height = grid[ri][ci];
    let mut seen = 0;
    let (mut r, mut c) = (ri, ci);
    loop {
        r = r.wrapping_add(rd as usize);
        c = c.wrapping_add(cd as usize);
        let Some(&tree) = grid.get(r).and_then(|row| row.get(c)) else {return (seen, true)};
        seen += 1;
        if tree >= height {return (seen, false)};
    }
}

pub fn day8(part: u8, input: &str) -> String {
    let grid = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
    let trees = (0 .. grid.len()).flat_map(|ri| (0 .. grid[ri].len()).map(move |ci| (ri, ci)));
    if part == 1 {
        trees.filter(|&(ri, ci)|
            DIRS.iter().any(|&dir| view(&grid, ri, ci, dir).1)
        ).count().to_string()
    } else {
        trees.map(|(ri, ci)|
            DIRS.iter().map(|&dir| view(&grid, ri, ci, dir).0).product::<usize>()
        ).max().unwrap_or(0).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "30373\n25512\n65332\n33549\n35390\n";

    #[test]
    fn sample() {
        assert_eq!(day8(1, SAMPLE), "21");
        assert_eq!(day8(2, SAMPLE), "8");
    }

    #[test]
    fn scenic_view_stops_at_equal_height() {
        let grid = SAMPLE.lines().map(str::as_bytes).collect::<Vec<_>>();
        assert_eq!(view(&grid, 1, 2, (-1, 0)), (1, true));
        assert_eq!(view(&grid, 1, 2, (0, -1)), (1, false));
        assert_eq!(view(&grid, 1, 2, (0, 1)), (2, true));
        assert_eq!(view(&grid, 1, 2, (1, 0)), (2, false));
    }
}
