use std::collections::VecDeque;

fn height(cell: u8) -> u8 {
    match cell {b'S' => b'a', b'E' => b'z', _ => cell}
}

pub fn day12(part: u8, input: &str) -> String {
    let grid = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
    let end = (0 .. grid.len()).find_map(|ri|
        grid[ri].iter().position(|&cell| cell == b'E').map(|ci| (ri, ci))
    ).expect("no summit on the map");

    // walking backwards from the end, a step may go down at most one level
    let mut dist = vec![vec![usize::MAX; grid[0].len()]; grid.len()];
    let mut queue = VecDeque::from([end]);
    dist[end.0][end.1] = 0;
    while let Some((ri, ci)) = queue.pop_front() {
        let cell = grid[ri][ci];
        if cell == b'S' || part == 2 && height(cell) == b'a' {
            return dist[ri][ci].to_string();
        }
        for (rj, cj) in [(ri.wrapping_sub(1), ci), (ri + 1, ci), (ri, ci.wrapping_sub(1)), (ri, ci + 1)] {
            let Some(&next) = grid.get(rj).and_then(|row| row.get(cj)) else {continue};
            if height(next) + 1 >= height(cell) && dist[rj][cj] == usize::MAX {
                dist[rj][cj] = dist[ri][ci] + 1;
                queue.push_back((rj, cj));
            }
        }
    }
    panic!("no path to the summit")
}
