use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    astrical completions bash > ~/.bash_completion.d/astrical\n\n\
                  Generate zsh completions:\n    astrical completions zsh > ~/.zfunc/_astrical\n\n\
                  Generate fish completions:\n    astrical completions fish > ~/.config/fish/completions/astrical.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
