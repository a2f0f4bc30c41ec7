use crate::input::blocks;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
enum Packet {Int(u32), List(Vec<Packet>)}

impl Packet {
    fn parse(s: &str) -> Packet {
        let mut bytes = s.trim().bytes().peekable();
        let packet = Packet::parse_from(&mut bytes);
        assert!(bytes.next().is_none(), "trailing characters after packet {}", s);
        packet
    }

    fn parse_from(bytes: &mut std::iter::Peekable<impl Iterator<Item = u8>>) -> Packet {
        match bytes.next() {
            Some(b'[') => {
                let mut items = vec![];
                if bytes.peek() == Some(&b']') {bytes.next(); return Packet::List(items)};
                loop {
                    items.push(Packet::parse_from(bytes));
                    match bytes.next() {
                        Some(b',') => (),
                        Some(b']') => return Packet::List(items),
                        x => panic!("unexpected {:?} in list", x.map(char::from))
                    }
                }
            },
            Some(digit @ b'0' ..= b'9') => {
                let mut n = (digit - b'0') as u32;
                while let Some(&digit @ b'0' ..= b'9') = bytes.peek() {
                    n = 10 * n + (digit - b'0') as u32;
                    bytes.next();
                }
                Packet::Int(n)
            },
            x => panic!("unexpected {:?} at start of packet", x.map(char::from))
        }
    }
}

impl Ord for Packet {
    fn cmp(&self, other: &Packet) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (&Packet::Int(a), Packet::List(b)) => [Packet::Int(a)][..].cmp(&b[..]),
            (Packet::List(a), &Packet::Int(b)) => a[..].cmp(&[Packet::Int(b)][..]),
        }
    }
}

/// `8` and `[8]` are equal: they compare the same against every other packet.
impl PartialEq for Packet {
    fn eq(&self, other: &Packet) -> bool {self.cmp(other) == Ordering::Equal}
}

impl Eq for Packet {}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Packet) -> Option<Ordering> {Some(self.cmp(other))}
}

pub fn day13(part: u8, input: &str) -> String {
    if part == 1 {
        blocks(input).enumerate().filter(|(_, pair)| {
            let (left, right) = pair.split_once('\n').expect(pair);
            Packet::parse(left) < Packet::parse(right)
        }).map(|(ix, _)| ix + 1).sum::<usize>().to_string()
    } else {
        let dividers = [Packet::parse("[[2]]"), Packet::parse("[[6]]")];
        let mut packets = input.lines().filter(|line| !line.trim().is_empty())
            .map(Packet::parse).chain(dividers.iter().cloned()).collect::<Vec<_>>();
        packets.sort_unstable();
        dividers.iter().map(|divider|
            packets.binary_search(divider).expect("divider went missing") + 1
        ).product::<usize>().to_string()
    }
}
