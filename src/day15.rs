use crate::input::ints;
use itertools::Itertools;

#[derive(Clone, Copy, Debug)]
struct Sensor {x: i64, y: i64, beacon: (i64, i64), range: i64}

impl Sensor {
    fn covers(&self, x: i64, y: i64) -> bool {(x - self.x).abs() + (y - self.y).abs() <= self.range}
}

fn parse(input: &str) -> Vec<Sensor> {
    input.trim().lines().map(|line| {
        let [x, y, bx, by] = ints::<i64>(line)[..] else {panic!("cannot parse sensor {}", line)};
        Sensor {x, y, beacon: (bx, by), range: (x - bx).abs() + (y - by).abs()}
    }).collect()
}

/// Positions on row `y` where no undetected beacon can be.
fn blocked_on_row(sensors: &[Sensor], y: i64) -> i64 {
    let mut spans = sensors.iter().filter_map(|s| {
        let half = s.range - (s.y - y).abs();
        (half >= 0).then_some((s.x - half, s.x + half))
    }).collect::<Vec<_>>();
    spans.sort_unstable();
    let mut covered = 0;
    let mut reached = i64::MIN;
    for (start, end) in spans {
        let start = start.max(reached + 1);
        if end >= start {covered += end - start + 1; reached = end};
    }
    let beacons = sensors.iter().map(|s| s.beacon).filter(|b| b.1 == y).unique().count() as i64;
    covered - beacons
}

/// The only position in `[0, bound]²` that no sensor covers.
///
/// It has to sit just outside the range of several sensors, so candidates are the
/// crossings of the diagonals bounding each sensor's range, plus the corners of the area.
fn hidden_beacon(sensors: &[Sensor], bound: i64) -> (i64, i64) {
    let rising = sensors.iter().flat_map(|s| [s.y - s.x + s.range + 1, s.y - s.x - s.range - 1]).unique().collect::<Vec<_>>();
    let falling = sensors.iter().flat_map(|s| [s.y + s.x + s.range + 1, s.y + s.x - s.range - 1]).unique().collect::<Vec<_>>();
    let crossings = rising.iter().cartesian_product(&falling)
        .filter(|&(a, b)| (a + b) % 2 == 0)
        .map(|(a, b)| ((b - a) / 2, (a + b) / 2));
    let corners = [(0, 0), (0, bound), (bound, 0), (bound, bound)];
    crossings.chain(corners)
        .filter(|&(x, y)| (0 ..= bound).contains(&x) && (0 ..= bound).contains(&y))
        .find(|&(x, y)| !sensors.iter().any(|s| s.covers(x, y)))
        .expect("every position is covered")
}

pub fn day15(part: u8, input: &str) -> String {
    let sensors = parse(input);
    let sample = sensors.iter().all(|s| s.x.abs().max(s.y.abs()) < 100);
    if part == 1 {
        let row = if sample {10} else {2_000_000};
        blocked_on_row(&sensors, row).to_string()
    } else {
        let bound = if sample {20} else {4_000_000};
        let (x, y) = hidden_beacon(&sensors, bound);
        log::debug!("hidden beacon at {:?}", (x, y));
        (x * 4_000_000 + y).to_string()
    }
}
