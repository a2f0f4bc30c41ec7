fn priority(item: u8) -> u32 {
    match item {
        b'a' ..= b'z' => (item - b'a' + 1) as u32,
        b'A' ..= b'Z' => (item - b'A' + 27) as u32,
        _ => panic!("unexpected item '{}'", item as char)
    }
}

/// Set of item priorities, bit `p` for priority `p`.
fn items(s: &[u8]) -> u64 {
    s.iter().fold(0, |set, &item| set | 1 << priority(item))
}

pub fn day3(part: u8, input: &str) -> String {
    let rucksacks = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
    let common = if part == 1 {
        rucksacks.iter().map(|sack| {
            let (left, right) = sack.split_at(sack.len() / 2);
            items(left) & items(right)
        }).collect::<Vec<_>>()
    } else {
        assert!(rucksacks.len() % 3 == 0, "{} rucksacks do not split into groups of three", rucksacks.len());
        rucksacks.chunks(3).map(|group|
            group.iter().map(|sack| items(sack)).fold(!0, |a, b| a & b)
        ).collect()
    };
    common.iter().map(|&set| {
        assert!(set.count_ones() == 1, "expected exactly one shared item, got set {:b}", set);
        set.trailing_zeros()
    }).sum::<u32>().to_string()
}
