/// Arguments of one command with its recognized flags pulled out.
///
/// Flags are whole tokens and may appear anywhere in the list. Anything
/// that is not a recognized flag, including unknown `-x` tokens, stays
/// positional and keeps its order.
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs<'a> {
    flags: Vec<&'static str>,
    positional: Vec<&'a str>,
}

impl<'a> ParsedArgs<'a> {
    pub(crate) fn parse(args: &'a [String], known_flags: &[&'static str]) -> Self {
        let mut parsed = ParsedArgs::default();
        for arg in args {
            match known_flags.iter().find(|flag| **flag == arg.as_str()) {
                Some(flag) => {
                    if !parsed.flags.contains(flag) {
                        parsed.flags.push(flag);
                    }
                }
                None => parsed.positional.push(arg.as_str()),
            }
        }
        parsed
    }

    pub(crate) fn has(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| *f == flag)
    }

    pub(crate) fn positional(&self) -> &[&'a str] {
        &self.positional
    }

    pub(crate) fn first(&self) -> Option<&'a str> {
        self.positional.first().copied()
    }

    pub(crate) fn last(&self) -> Option<&'a str> {
        self.positional.last().copied()
    }
}
