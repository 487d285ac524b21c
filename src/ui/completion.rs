//! Shell completion generation for productdash

use clap::Command;
use clap_complete::{Generator, generate};
use std::io::Write;

/// Generate shell completions for the given shell
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}

/// Generate shell completions into any writer
pub fn write_completions<G: Generator>(generator: G, app: &mut Command, out: &mut dyn Write) {
    let name = app.get_name().to_string();
    generate(generator, app, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Cli;
    use clap::CommandFactory;
    use clap_complete::Shell;

    fn script_for(shell: Shell) -> String {
        let mut buffer = Vec::new();
        write_completions(shell, &mut Cli::command(), &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_bash_completion_mentions_options() {
        let script = script_for(Shell::Bash);
        assert!(script.contains("productdash"));
        assert!(script.contains("--port"));
        assert!(script.contains("--export"));
    }

    #[test]
    fn test_every_shell_generates_output() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            assert!(!script_for(shell).is_empty(), "{shell:?}");
        }
    }
}
