//! Splitting of raw input lines into bounded argument lists.

/// Maximum number of token slots produced from one input line.
pub const MAX_TOKENS: usize = 5;

const DELIMITERS: &[char] = &[' ', '\t', '\n'];

/// One tokenized input line.
///
/// Fields are extracted one delimiter at a time, so a run of whitespace
/// yields empty fields instead of being collapsed. An empty field is
/// stored as an absent slot; callers cannot tell the two apart. After
/// `MAX_TOKENS` fields the rest of the line is dropped without notice.
#[derive(Debug, Default)]
pub struct CommandLine<'a> {
    slots: [Option<&'a str>; MAX_TOKENS],
    len: usize,
}

impl<'a> CommandLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let mut cmd = CommandLine::default();
        for field in line.split(DELIMITERS).take(MAX_TOKENS) {
            cmd.slots[cmd.len] = if field.is_empty() { None } else { Some(field) };
            cmd.len += 1;
        }
        cmd
    }

    /// Returns the token in slot `index`. `None` covers empty fields,
    /// slots past the end of the line and indexes past the cap alike.
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.slots.get(index).copied().flatten()
    }

    /// Number of fields extracted from the line, counting empty ones.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
