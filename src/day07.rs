use rustc_hash::FxHashMap;

const DISK: u64 = 70_000_000;
const NEEDED: u64 = 30_000_000;

#[derive(Default)]
struct Dir<'a> {parent: Option<usize>, children: FxHashMap<&'a str, usize>, files: u64}

/// Directory arena; index 0 is `/`.
struct Fs<'a> {dirs: Vec<Dir<'a>>}

impl<'a> Fs<'a> {
    fn parse(transcript: &'a str) -> Fs<'a> {
        let mut fs = Fs {dirs: vec![Dir::default()]};
        let mut cwd = 0;
        for line in transcript.trim().lines() {
            let line = line.trim();
            match line.split_whitespace().collect::<Vec<_>>()[..] {
                ["$", "cd", "/"] => cwd = 0,
                ["$", "cd", ".."] => cwd = fs.dirs[cwd].parent.expect("cd .. from the root"),
                ["$", "cd", name] => cwd = fs.subdir(cwd, name),
                ["$", "ls"] => (),
                ["dir", name] => {fs.subdir(cwd, name);},
                [size, _] => fs.dirs[cwd].files += size.parse::<u64>().expect(line),
                _ => panic!("cannot parse line {}", line)
            }
        }
        fs
    }

    fn subdir(&mut self, cwd: usize, name: &'a str) -> usize {
        if let Some(&ix) = self.dirs[cwd].children.get(name) {return ix};
        let ix = self.dirs.len();
        self.dirs.push(Dir {parent: Some(cwd), ..Dir::default()});
        self.dirs[cwd].children.insert(name, ix);
        ix
    }

    /// Total size of every directory, by arena index.
    fn sizes(&self) -> Vec<u64> {
        let mut sizes = self.dirs.iter().map(|dir| dir.files).collect::<Vec<_>>();
        // children are always pushed after their parent
        for ix in (1 .. self.dirs.len()).rev() {
            let parent = self.dirs[ix].parent.expect("only the root has no parent");
            sizes[parent] += sizes[ix];
        }
        sizes
    }
}

pub fn day7(part: u8, input: &str) -> String {
    let sizes = Fs::parse(input).sizes();
    if part == 1 {
        sizes.iter().filter(|&&size| size <= 100_000).sum::<u64>().to_string()
    } else {
        let to_free = (sizes[0] + NEEDED).saturating_sub(DISK);
        sizes.iter().filter(|&&size| size >= to_free).min().expect("root is always large enough").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn directory_sizes() {
        let fs = Fs::parse(SAMPLE);
        let mut sizes = fs.sizes();
        sizes.sort_unstable();
        assert_eq!(sizes, [584, 94853, 24933642, 48381165]);
    }

    #[test]
    fn sample() {
        assert_eq!(day7(1, SAMPLE), "95437");
        assert_eq!(day7(2, SAMPLE), "24933642");
    }

    #[test]
    fn repeated_listing_is_not_double_counted_as_dirs() {
        let input = "$ cd /\n$ ls\ndir a\n$ cd a\n$ cd ..\n$ ls\ndir a\n";
        assert_eq!(Fs::parse(input).dirs.len(), 2);
    }
}
