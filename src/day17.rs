use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

type Rock = ArrayVec<u8, 4>;

/// Rows from the bottom up; bit `x` is column `x` counting from the left wall,
/// already shifted to the spawn column 2.
const SHAPES: [&[u8]; 5] = [
    &[0b0111100],
    &[0b0001000, 0b0011100, 0b0001000],
    &[0b0011100, 0b0010000, 0b0010000],
    &[0b0000100; 4],
    &[0b0001100; 2],
];
const PROFILE_ROWS: usize = 32;

struct Chamber<'a> {rows: Vec<u8>, jets: &'a [u8], jet_ix: usize}

impl Chamber<'_> {
    fn fits(&self, rock: &[u8], y: usize) -> bool {
        rock.iter().enumerate().all(|(dy, row)| row & self.rows.get(y + dy).copied().unwrap_or(0) == 0)
    }

    fn push(rock: &Rock, jet: u8) -> Option<Rock> {
        match jet {
            b'<' if rock.iter().all(|row| row & 1 == 0) => Some(rock.iter().map(|row| row >> 1).collect()),
            b'>' if rock.iter().all(|row| row & 1 << 6 == 0) => Some(rock.iter().map(|row| row << 1).collect()),
            b'<' | b'>' => None,
            _ => panic!("unexpected jet '{}'", jet as char)
        }
    }

    fn drop_rock(&mut self, shape: &[u8]) {
        let mut rock = shape.iter().copied().collect::<Rock>();
        let mut y = self.rows.len() + 3;
        loop {
            let jet = self.jets[self.jet_ix];
            self.jet_ix = (self.jet_ix + 1) % self.jets.len();
            if let Some(pushed) = Chamber::push(&rock, jet) {
                if self.fits(&pushed, y) {rock = pushed}
            }
            if y == 0 || !self.fits(&rock, y - 1) {break};
            y -= 1;
        }
        if self.rows.len() < y + rock.len() {self.rows.resize(y + rock.len(), 0)};
        for (dy, row) in rock.iter().enumerate() {self.rows[y + dy] |= row}
    }

    fn profile(&self) -> Option<[u8; PROFILE_ROWS]> {
        let top = self.rows.len().checked_sub(PROFILE_ROWS)?;
        self.rows[top ..].try_into().ok()
    }
}

/// Tower height after `count` rocks, skipping ahead once the falling pattern repeats.
fn tower_height(jets: &[u8], count: u64) -> u64 {
    let mut chamber = Chamber {rows: vec![], jets, jet_ix: 0};
    let mut seen = FxHashMap::default();
    let mut skipped = 0;
    let mut n = 0;
    while n < count {
        let shape_ix = (n % SHAPES.len() as u64) as usize;
        chamber.drop_rock(SHAPES[shape_ix]);
        n += 1;
        if skipped != 0 {continue};
        let Some(profile) = chamber.profile() else {continue};
        let height = chamber.rows.len() as u64;
        if let Some((prev_n, prev_height)) = seen.insert((shape_ix, chamber.jet_ix, profile), (n, height)) {
            let (period, growth) = (n - prev_n, height - prev_height);
            log::debug!("rocks repeat every {} after {}, growing {} rows", period, prev_n, growth);
            let cycles = (count - n) / period;
            n += cycles * period;
            skipped = cycles * growth;
        }
    }
    chamber.rows.len() as u64 + skipped
}

pub fn day17(part: u8, input: &str) -> String {
    let jets = input.trim().as_bytes();
    tower_height(jets, if part == 1 {2022} else {1_000_000_000_000}).to_string()
}
