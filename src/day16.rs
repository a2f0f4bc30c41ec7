use regex::Regex;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Valves worth opening plus the start, with travel times between all of them.
struct Network {start: usize, flows: Vec<u32>, dist: Vec<Vec<u32>>}

impl Network {
    fn parse(input: &str) -> Network {
        let re = Regex::new(r"^Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (.*)$").unwrap();
        let mut names = FxHashMap::default();
        let mut valves = vec![];
        for line in input.trim().lines() {
            let caps = re.captures(line.trim()).unwrap_or_else(|| panic!("cannot parse valve {}", line));
            let (name, flow) = (caps.get(1).unwrap().as_str(), caps[2].parse::<u32>().expect(line));
            names.insert(name, valves.len());
            valves.push((name, flow, caps.get(3).unwrap().as_str().split(", ").collect::<Vec<_>>()));
        }
        let tunnels = valves.iter().map(|(_, _, leads)|
            leads.iter().map(|lead| *names.get(lead).unwrap_or_else(|| panic!("unknown valve {}", lead))).collect::<Vec<_>>()
        ).collect::<Vec<_>>();

        let start = *names.get("AA").expect("no valve AA");
        let useful = (0 .. valves.len()).filter(|&ix| valves[ix].1 > 0 || ix == start).collect::<Vec<_>>();
        let dist = useful.iter().map(|&from| {
            let mut steps = vec![u32::MAX; valves.len()];
            steps[from] = 0;
            let mut queue = VecDeque::from([from]);
            while let Some(ix) = queue.pop_front() {
                for &next in &tunnels[ix] {
                    if steps[next] == u32::MAX {steps[next] = steps[ix] + 1; queue.push_back(next)}
                }
            }
            useful.iter().map(|&to| steps[to]).collect()
        }).collect();
        log::debug!("{} valves, {} worth opening", valves.len(), useful.len() - 1);

        Network {
            start: useful.iter().position(|&ix| ix == start).unwrap(),
            flows: useful.iter().map(|&ix| valves[ix].1).collect(),
            dist
        }
    }

    /// Best pressure released for every set of opened valves reachable within `time`.
    fn best_per_set(&self, time: u32) -> Vec<u32> {
        assert!(self.flows.len() <= 24, "too many valves to enumerate subsets of");
        let mut best = vec![0; 1 << self.flows.len()];
        self.search(self.start, time, 0, 0, &mut best);
        best
    }

    fn search(&self, at: usize, time: u32, opened: usize, released: u32, best: &mut [u32]) {
        best[opened] = best[opened].max(released);
        for next in 0 .. self.flows.len() {
            let cost = self.dist[at][next].saturating_add(1);
            if opened & 1 << next != 0 || self.flows[next] == 0 || cost >= time {continue};
            let left = time - cost;
            self.search(next, left, opened | 1 << next, released + left * self.flows[next], best);
        }
    }
}

pub fn day16(part: u8, input: &str) -> String {
    let network = Network::parse(input);
    if part == 1 {
        network.best_per_set(30).into_iter().max().unwrap_or(0).to_string()
    } else {
        let mut best = network.best_per_set(26);
        // best[set] becomes the best over all subsets of set
        for bit in 0 .. network.flows.len() {
            for set in 0 .. best.len() {
                if set & 1 << bit != 0 {best[set] = best[set].max(best[set ^ 1 << bit])}
            }
        }
        let all = best.len() - 1;
        (0 ..= all).map(|mine| best[mine] + best[all ^ mine]).max().unwrap_or(0).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II
";

    #[test]
    fn travel_times() {
        let network = Network::parse(SAMPLE);
        assert_eq!(network.flows, [0, 13, 2, 20, 3, 22, 21]);
        assert_eq!(network.start, 0);
        // AA to HH goes through DD, EE, FF and GG
        assert_eq!(network.dist[0][5], 5);
        assert_eq!(network.dist[5][6], 7);
    }

    #[test]
    fn sample() {
        assert_eq!(day16(1, SAMPLE), "1651");
        assert_eq!(day16(2, SAMPLE), "1707");
    }
}
