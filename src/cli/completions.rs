use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundlekit completions bash > ~/.bash_completion.d/bundlekit\n\n\
                  Generate zsh completions:\n    bundlekit completions zsh > ~/.zfunc/_bundlekit\n\n\
                  Generate fish completions:\n    bundlekit completions fish > ~/.config/fish/completions/bundlekit.fish\n\n\
                  Generate PowerShell completions:\n    bundlekit completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
