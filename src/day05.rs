use crate::input::ints;

pub fn day5(part: u8, input: &str) -> String {
    let (drawing, moves) = input.trim_matches('\n').split_once("\n\n").expect("no blank line after the stacks");
    let mut rows = drawing.lines().rev();
    let n_stacks = rows.next().expect("empty drawing").split_whitespace().count();
    let mut stacks = vec![Vec::new(); n_stacks];
    for row in rows {
        for (ix, stack) in stacks.iter_mut().enumerate() {
            match row.as_bytes().get(4 * ix + 1) {
                Some(b' ') | None => (),
                Some(&name) => stack.push(name)
            }
        }
    }

    for line in moves.lines() {
        let [n, from, to] = ints::<usize>(line)[..] else {panic!("cannot parse move {}", line)};
        let from_stack = &mut stacks[from - 1];
        let moved = from_stack.split_off(from_stack.len() - n);
        if part == 1 {
            stacks[to - 1].extend(moved.iter().rev());
        } else {
            stacks[to - 1].extend(moved);
        }
    }

    stacks.iter().filter_map(|stack| stack.last().map(|&name| name as char)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "    [D]    
[N] [C]    
[Z] [M] [P]
 1   2   3 

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2
";

    #[test]
    fn sample() {
        assert_eq!(day5(1, SAMPLE), "CMZ");
        assert_eq!(day5(2, SAMPLE), "MCD");
    }

    #[test]
    fn drawing_without_trailing_spaces() {
        let input = "    [D]\n[N] [C]\n[Z] [M] [P]\n 1   2   3\n\nmove 1 from 2 to 1\n";
        assert_eq!(day5(1, input), "DCP");
    }
}
