use terminal_size::{terminal_size, Width};

use crate::interface::UserInterface;

// Wrapped continuation lines inherit the description's leading indent.
// Lines at or under the width are emitted verbatim, preserving any internal alignment.
pub(crate) struct Printer {
    descriptions: Vec<&'static str>,
}

impl Printer {
    pub(crate) fn new(descriptions: Vec<&'static str>) -> Self {
        Self { descriptions }
    }

    pub(crate) fn print_help(&self, user_interface: &dyn UserInterface) {
        let width = if let Some((Width(terminal_width), _)) = terminal_size() {
            terminal_width as usize
        } else {
            usize::MAX
        };
        self.print_help_width(user_interface, width);
    }

    pub(crate) fn print_help_width(&self, user_interface: &dyn UserInterface, width: usize) {
        for description in &self.descriptions {
            for line in description.lines() {
                for rendered in render(line, width) {
                    user_interface.print(rendered);
                }
            }
        }
    }
}

fn render(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let indent: String = line.chars().take_while(|c| *c == ' ').collect();
    let mut output: Vec<String> = Vec::default();
    let mut current = String::default();

    for word in line.split_whitespace() {
        let candidate = if current.is_empty() {
            format!("{indent}{word}")
        } else {
            format!("{current} {word}")
        };

        if candidate.chars().count() > width && !current.is_empty() {
            output.push(current);
            current = format!("{indent}{word}");
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        output.push(current);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::util::InMemoryInterface;
    use rstest::rstest;

    #[rstest]
    #[case("", 10, vec![""])]
    #[case(" -f, --foo    Sets foo.", 80, vec![" -f, --foo    Sets foo."])]
    #[case("aaa bbb ccc", 7, vec!["aaa bbb", "ccc"])]
    #[case("  aaa bbb ccc", 7, vec!["  aaa", "  bbb", "  ccc"])]
    #[case("aaaaaaaaaa bb", 5, vec!["aaaaaaaaaa", "bb"])]
    fn render_line(#[case] line: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(
            render(line, width),
            expected
                .into_iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>()
        );
    }

    #[test]
    fn print_help() {
        // Setup
        let printer = Printer::new(vec![
            " -f, --foo    Sets foo.\n --no-foo     Unsets foo.",
            " --key <val>  Sets key to val.",
        ]);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help_width(&interface, 80);

        // Verify
        assert_eq!(
            interface.message(),
            " -f, --foo    Sets foo.\n --no-foo     Unsets foo.\n --key <val>  Sets key to val."
        );
    }

    #[test]
    fn print_help_idempotent() {
        // Setup
        let printer = Printer::new(vec![" --foo    Sets foo, which changes the program mode."]);
        let first = InMemoryInterface::default();
        let second = InMemoryInterface::default();

        // Execute
        printer.print_help_width(&first, 24);
        printer.print_help_width(&second, 24);

        // Verify
        assert_eq!(first.messages(), second.messages());
    }

    #[test]
    fn print_help_empty() {
        let printer = Printer::new(Vec::default());
        let interface = InMemoryInterface::default();

        printer.print_help_width(&interface, 80);

        assert_eq!(interface.messages(), Vec::<String>::default());
    }
}
