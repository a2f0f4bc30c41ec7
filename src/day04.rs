use crate::input::ints;

pub fn day4(part: u8, input: &str) -> String {
    input.trim().lines().filter(|line| {
        let [a, b, c, d] = ints::<u32>(&line.replace('-', " "))[..] else {
            panic!("cannot parse pair {}", line)
        };
        if part == 1 {
            a <= c && d <= b || c <= a && b <= d
        } else {
            a <= d && c <= b
        }
    }).count().to_string()
}
