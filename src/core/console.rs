/// Where command outcomes are shown and where confirmations are read from.
///
/// The interactive shell backs this with the line editor; tests use a
/// scripted implementation.
pub trait Console {
    fn print(&mut self, text: &str);
    fn error(&mut self, text: &str);

    /// Reads one line of input. `None` means no answer could be read
    /// (end of input or interrupt).
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::Console;
    use std::collections::VecDeque;

    #[derive(Debug, Default)]
    pub(crate) struct ScriptedConsole {
        pub out: Vec<String>,
        pub err: Vec<String>,
        pub prompts: Vec<String>,
        answers: VecDeque<String>,
    }

    impl ScriptedConsole {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn answering(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Self::default()
            }
        }

        pub(crate) fn shown(&self) -> usize {
            self.out.len() + self.err.len()
        }
    }

    impl Console for ScriptedConsole {
        fn print(&mut self, text: &str) {
            self.out.push(text.to_string());
        }

        fn error(&mut self, text: &str) {
            self.err.push(text.to_string());
        }

        fn read_line(&mut self, prompt: &str) -> Option<String> {
            self.prompts.push(prompt.to_string());
            self.answers.pop_front()
        }
    }
}
