use itertools::Itertools;

const WIDTH: usize = 40;

/// Value of X during each cycle, starting with cycle 1.
fn register_trace(program: &str) -> Vec<i64> {
    let mut x = 1;
    let mut trace = vec![];
    for line in program.trim().lines() {
        match line.split_whitespace().collect::<Vec<_>>()[..] {
            ["noop"] => trace.push(x),
            ["addx", v] => {
                trace.extend([x, x]);
                x += v.parse::<i64>().expect(line);
            },
            _ => panic!("unexpected instruction {}", line)
        }
    }
    trace.push(x);
    trace
}

pub fn day10(part: u8, input: &str) -> String {
    let trace = register_trace(input);
    if part == 1 {
        (20 ..= 220).step_by(40).filter_map(|cycle|
            trace.get(cycle - 1).map(|x| cycle as i64 * x)
        ).sum::<i64>().to_string()
    } else {
        let pixels = trace.iter().take(6 * WIDTH).enumerate().map(|(ix, &x)|
            if (x - (ix % WIDTH) as i64).abs() <= 1 {'#'} else {'.'}
        ).collect::<Vec<_>>();
        pixels.chunks(WIDTH).map(|row| row.iter().collect::<String>()).join("\n")
    }
}
