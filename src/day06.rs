use itertools::Itertools;

pub fn day6(part: u8, input: &str) -> String {
    let width = if part == 1 {4} else {14};
    let stream = input.trim().as_bytes();
    let start = stream.windows(width).position(|window| window.iter().all_unique())
        .expect("no start marker in stream");
    (start + width).to_string()
}
