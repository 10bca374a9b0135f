use clap::Parser;

/// Print the final component of each PATH, like POSIX basename(1)
#[derive(Debug, Parser)]
pub struct Args {
    /// input path strings
    paths: Vec<String>,

    /// remove a trailing suffix from each name
    #[arg(short, long)]
    suffix: Option<String>,

    /// end each output line with NUL, not newline
    #[arg(short, long)]
    zero: bool,

    /// accepted for compatibility; has no effect
    #[arg(short = 'a', long)]
    multiple: bool,
}

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn paths(&'_ self) -> impl Iterator<Item = &'_ str> + '_ {
        self.paths.iter().map(String::as_str)
    }

    pub fn as_run_config(&self) -> RunConfig {
        RunConfig {
            suffix: self.suffix.as_deref().unwrap_or(""),
            terminator: if self.zero {
                Terminator::Nul
            } else {
                Terminator::Newline
            },
        }
    }
}

#[derive(Debug)]
pub struct RunConfig<'a> {
    /// suffix to strip from each basename ("" strips nothing)
    pub suffix: &'a str,

    /// record terminator, chosen once for the whole invocation
    pub terminator: Terminator,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Terminator {
    Newline,
    Nul,
}

impl Terminator {
    pub fn byte(self) -> u8 {
        match self {
            Terminator::Newline => b'\n',
            Terminator::Nul => b'\0',
        }
    }
}
