use std::fmt;

/// Catalog of primitive git subcommands
///
/// Each variant maps to exactly one command token. The catalog is closed:
/// anything git accepts that is not listed here goes through
/// [`Operation::Raw`](crate::git::Operation::Raw) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    Add,
    Archive,
    Bisect,
    Branch,
    Bundle,
    Checkout,
    Clean,
    Clone,
    Commit,
    Config,
    Describe,
    Diff,
    Fetch,
    Gc,
    Grep,
    Init,
    Log,
    Merge,
    Mv,
    Pull,
    Push,
    Rebase,
    Reset,
    Revert,
    Rm,
    Show,
    Stash,
    Status,
    Submodule,
    Tag,
    CherryPick,
}

impl Subcommand {
    /// Command token as git spells it
    pub fn token(&self) -> &'static str {
        match self {
            Subcommand::Add => "add",
            Subcommand::Archive => "archive",
            Subcommand::Bisect => "bisect",
            Subcommand::Branch => "branch",
            Subcommand::Bundle => "bundle",
            Subcommand::Checkout => "checkout",
            Subcommand::Clean => "clean",
            Subcommand::Clone => "clone",
            Subcommand::Commit => "commit",
            Subcommand::Config => "config",
            Subcommand::Describe => "describe",
            Subcommand::Diff => "diff",
            Subcommand::Fetch => "fetch",
            Subcommand::Gc => "gc",
            Subcommand::Grep => "grep",
            Subcommand::Init => "init",
            Subcommand::Log => "log",
            Subcommand::Merge => "merge",
            Subcommand::Mv => "mv",
            Subcommand::Pull => "pull",
            Subcommand::Push => "push",
            Subcommand::Rebase => "rebase",
            Subcommand::Reset => "reset",
            Subcommand::Revert => "revert",
            Subcommand::Rm => "rm",
            Subcommand::Show => "show",
            Subcommand::Stash => "stash",
            Subcommand::Status => "status",
            Subcommand::Submodule => "submodule",
            Subcommand::Tag => "tag",
            Subcommand::CherryPick => "cherry-pick",
        }
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_lowercase_git_spelling() {
        assert_eq!(Subcommand::Add.token(), "add");
        assert_eq!(Subcommand::Status.token(), "status");
        assert_eq!(Subcommand::Clone.token(), "clone");
        assert_eq!(Subcommand::Init.token(), "init");
    }

    #[test]
    fn test_multiword_token_is_hyphenated() {
        assert_eq!(Subcommand::CherryPick.token(), "cherry-pick");
    }

    #[test]
    fn test_display_matches_token() {
        assert_eq!(Subcommand::Rebase.to_string(), Subcommand::Rebase.token());
        assert_eq!(format!("git {}", Subcommand::Log), "git log");
    }
}
