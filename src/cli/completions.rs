use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    toolhost completions bash > ~/.bash_completion.d/toolhost\n\n\
                  Generate zsh completions:\n    toolhost completions zsh > ~/.zfunc/_toolhost\n\n\
                  Generate fish completions:\n    toolhost completions fish > ~/.config/fish/completions/toolhost.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
