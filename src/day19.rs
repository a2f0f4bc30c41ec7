use crate::input::ints;

const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;

#[derive(Clone, Copy, Debug)]
struct Blueprint {id: u32, costs: [[u32; 3]; 4], max_spend: [u32; 3]}

impl Blueprint {
    fn parse(line: &str) -> Blueprint {
        let [id, ore, clay, obs_ore, obs_clay, geode_ore, geode_obs] = ints::<u32>(line)[..] else {
            panic!("cannot parse blueprint {}", line)
        };
        let costs = [[ore, 0, 0], [clay, 0, 0], [obs_ore, obs_clay, 0], [geode_ore, 0, geode_obs]];
        let max_spend = std::array::from_fn(|mineral| costs.iter().map(|cost| cost[mineral]).max().unwrap_or(0));
        Blueprint {id, costs, max_spend}
    }
}

#[derive(Clone, Copy)]
struct State {time: u32, robots: [u32; 4], stock: [u32; 4]}

fn search(bp: &Blueprint, state: State, best: &mut u32) {
    let State {time, robots, stock} = state;
    *best = (*best).max(stock[GEODE] + robots[GEODE] * time);
    // even building a geode robot every remaining minute would not beat the best
    if stock[GEODE] + robots[GEODE] * time + time * time.saturating_sub(1) / 2 <= *best {return};

    for robot in [GEODE, OBSIDIAN, CLAY, ORE] {
        if robot != GEODE && robots[robot] >= bp.max_spend[robot] {continue};
        let cost = bp.costs[robot];
        let wait = (0 .. 3).map(|mineral| {
            if cost[mineral] <= stock[mineral] {Some(0)}
            else if robots[mineral] == 0 {None}
            else {Some((cost[mineral] - stock[mineral]).div_ceil(robots[mineral]))}
        }).try_fold(0, |a, w| w.map(|w| a.max(w)));
        let Some(wait) = wait else {continue};
        // the new robot needs at least one minute left to produce anything
        if wait + 1 >= time {continue};
        let mut next = State {time: time - wait - 1, robots, stock};
        for mineral in 0 .. 4 {
            next.stock[mineral] += robots[mineral] * (wait + 1);
            if mineral < 3 {next.stock[mineral] -= cost[mineral]};
        }
        next.robots[robot] += 1;
        search(bp, next, best);
    }
}

fn max_geodes(bp: &Blueprint, minutes: u32) -> u32 {
    let mut best = 0;
    search(bp, State {time: minutes, robots: [1, 0, 0, 0], stock: [0; 4]}, &mut best);
    log::debug!("blueprint {} opens {} geodes in {} minutes", bp.id, best, minutes);
    best
}

pub fn day19(part: u8, input: &str) -> String {
    let blueprints = input.trim().lines().map(Blueprint::parse);
    if part == 1 {
        blueprints.map(|bp| bp.id * max_geodes(&bp, 24)).sum::<u32>().to_string()
    } else {
        blueprints.take(3).map(|bp| max_geodes(&bp, 32)).product::<u32>().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.
";

    #[test]
    fn parse() {
        let bp = Blueprint::parse(SAMPLE.lines().next().unwrap());
        assert_eq!(bp.id, 1);
        assert_eq!(bp.costs[OBSIDIAN], [3, 14, 0]);
        assert_eq!(bp.costs[GEODE], [2, 0, 7]);
        assert_eq!(bp.max_spend, [4, 14, 7]);
    }

    #[test]
    fn sample_24_minutes() {
        let bps = SAMPLE.lines().map(Blueprint::parse).collect::<Vec<_>>();
        assert_eq!(max_geodes(&bps[0], 24), 9);
        assert_eq!(max_geodes(&bps[1], 24), 12);
        assert_eq!(day19(1, SAMPLE), "33");
    }

    #[test]
    fn sample_32_minutes() {
        assert_eq!(day19(2, SAMPLE), (56 * 62).to_string());
    }
}
