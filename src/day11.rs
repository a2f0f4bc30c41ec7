use crate::input::{blocks, ints, lcm};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Op {Add(u64), Mul(u64), Square}

#[derive(Debug)]
struct Monkey {items: Vec<u64>, op: Op, divisor: u64, targets: [usize; 2], inspected: u64}

impl Monkey {
    fn parse(block: &str) -> Monkey {
        let lines = block.lines().map(str::trim).collect::<Vec<_>>();
        let [_, items, op, test, if_true, if_false] = lines[..] else {panic!("cannot parse monkey {}", block)};
        let op = match op.strip_prefix("Operation: new = old ").expect(op).split_once(' ') {
            Some(("*", "old")) => Op::Square,
            Some(("*", n)) => Op::Mul(n.parse().expect(op)),
            Some(("+", n)) => Op::Add(n.parse().expect(op)),
            _ => panic!("unexpected operation {}", op)
        };
        let last_int = |line: &str| *ints::<u64>(line).last().expect(line);
        Monkey {
            items: ints(items),
            op,
            divisor: last_int(test),
            targets: [last_int(if_false) as usize, last_int(if_true) as usize],
            inspected: 0
        }
    }

    fn apply(&self, worry: u64) -> u64 {
        match self.op {
            Op::Add(n) => worry + n,
            Op::Mul(n) => worry * n,
            Op::Square => worry * worry,
        }
    }
}

pub fn day11(part: u8, input: &str) -> String {
    let mut monkeys = blocks(input).map(Monkey::parse).collect::<Vec<_>>();
    let modulus = monkeys.iter().map(|monkey| monkey.divisor).fold(1, lcm);
    let rounds = if part == 1 {20} else {10_000};
    let mut thrown = vec![];

    for _ in 0 .. rounds {
        for mi in 0 .. monkeys.len() {
            let monkey = &mut monkeys[mi];
            monkey.inspected += monkey.items.len() as u64;
            thrown.extend(monkey.items.iter().map(|&worry| {
                let worry = if part == 1 {monkey.apply(worry) / 3} else {monkey.apply(worry) % modulus};
                (monkey.targets[(worry % monkey.divisor == 0) as usize], worry)
            }));
            monkey.items.clear();
            for (target, worry) in thrown.drain(..) {
                assert!(target != mi, "monkey {} throws to itself", mi);
                monkeys[target].items.push(worry);
            }
        }
    }

    monkeys.sort_unstable_by_key(|monkey| std::cmp::Reverse(monkey.inspected));
    (monkeys[0].inspected * monkeys[1].inspected).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";

    #[test]
    fn parse() {
        let monkey = Monkey::parse(blocks(SAMPLE).nth(2).unwrap());
        assert_eq!(monkey.items, [79, 60, 97]);
        assert_eq!(monkey.op, Op::Square);
        assert_eq!(monkey.divisor, 13);
        assert_eq!(monkey.targets, [3, 1]);
    }

    #[test]
    fn sample() {
        assert_eq!(day11(1, SAMPLE), "10605");
        assert_eq!(day11(2, SAMPLE), "2713310158");
    }
}
