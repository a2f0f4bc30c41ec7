fn shape(b: u8) -> u8 {
    match b {
        b'A' | b'X' => 0, b'B' | b'Y' => 1, b'C' | b'Z' => 2,
        _ => panic!("unexpected shape '{}'", b as char)
    }
}

/// Shapes are 0 rock, 1 paper, 2 scissors; `ours - theirs` mod 3 is 1 on a win.
fn score(theirs: u8, ours: u8) -> u32 {
    let outcome = match (3 + ours - theirs) % 3 {0 => 3, 1 => 6, _ => 0};
    ours as u32 + 1 + outcome
}

pub fn day2(part: u8, input: &str) -> String {
    input.trim().lines().map(|line| {
        let &[theirs, b' ', second] = line.trim().as_bytes() else {panic!("cannot parse round {}", line)};
        let theirs = shape(theirs);
        let second = shape(second);
        let ours = if part == 1 {second} else {(theirs + second + 2) % 3};
        score(theirs, ours)
    }).sum::<u32>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_rounds() {
        assert_eq!(day2(2, "A Y"), "4");
        assert_eq!(day2(2, "B X"), "1");
        assert_eq!(day2(2, "C Z"), "7");
        assert_eq!(day2(1, "C X"), "7");
    }

    #[test]
    fn sample() {
        let input = "A Y\nB X\nC Z\n";
        assert_eq!(day2(1, input), "15");
        assert_eq!(day2(2, input), "12");
    }
}
