use crate::git::subcommand::Subcommand;

/// A git operation expressed as data
///
/// Every variant resolves to a deterministic command string (everything after
/// `git `). Parameters are substituted verbatim: no quoting or escaping is
/// applied beyond the double quotes around a commit message, so callers own
/// the shell-safety of what they pass in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Pre-formed command string, passed through unchanged
    Raw(String),
    /// A cataloged subcommand with an optional argument string
    Command(Subcommand, Option<String>),
    /// Stage everything under the current directory (`add .`)
    AddAll,
    Commit {
        message: String,
        allow_empty: bool,
    },
    Clone {
        url: String,
    },
    Checkout {
        branch: String,
    },
    Log {
        count: Option<usize>,
    },
    LogFormat {
        format: String,
    },
    Push {
        remote: Option<String>,
        branch: Option<String>,
    },
    Pull {
        remote: Option<String>,
        branch: Option<String>,
    },
    Merge {
        branch: String,
    },
    CreateBranch {
        branch: String,
    },
    DeleteBranch {
        branch: String,
    },
    Tag {
        name: String,
    },
}

impl Operation {
    /// Ordered argument tokens for this operation
    pub fn args(&self) -> Vec<String> {
        match self {
            Operation::Raw(command) => vec![command.clone()],
            Operation::Command(subcommand, argument) => {
                let mut args = vec![subcommand.token().to_string()];
                if let Some(argument) = argument {
                    args.push(argument.clone());
                }
                args
            }
            Operation::AddAll => {
                vec![Subcommand::Add.token().to_string(), ".".to_string()]
            }
            Operation::Commit {
                message,
                allow_empty,
            } => {
                let mut args = vec![
                    Subcommand::Commit.token().to_string(),
                    "-m".to_string(),
                    format!("\"{}\"", message),
                ];
                if *allow_empty {
                    args.push("--allow-empty".to_string());
                }
                args
            }
            Operation::Clone { url } => {
                vec![Subcommand::Clone.token().to_string(), url.clone()]
            }
            Operation::Checkout { branch } => {
                vec![Subcommand::Checkout.token().to_string(), branch.clone()]
            }
            Operation::Log { count } => {
                let mut args = vec![Subcommand::Log.token().to_string()];
                if let Some(count) = count {
                    args.push(format!("-{}", count));
                }
                args
            }
            Operation::LogFormat { format } => {
                vec![
                    Subcommand::Log.token().to_string(),
                    format!("--pretty=format:{}", format),
                ]
            }
            Operation::Push { remote, branch } => {
                Self::remote_args(Subcommand::Push, remote, branch)
            }
            Operation::Pull { remote, branch } => {
                Self::remote_args(Subcommand::Pull, remote, branch)
            }
            Operation::Merge { branch } => {
                vec![Subcommand::Merge.token().to_string(), branch.clone()]
            }
            Operation::CreateBranch { branch } => {
                vec![
                    Subcommand::Checkout.token().to_string(),
                    "-b".to_string(),
                    branch.clone(),
                ]
            }
            Operation::DeleteBranch { branch } => {
                vec![
                    Subcommand::Branch.token().to_string(),
                    "-D".to_string(),
                    branch.clone(),
                ]
            }
            Operation::Tag { name } => {
                vec![Subcommand::Tag.token().to_string(), name.clone()]
            }
        }
    }

    /// Resolved command string: the argument tokens joined by single spaces
    ///
    /// This is everything after `git ` on the final command line.
    pub fn resolve(&self) -> String {
        self.args().join(" ")
    }

    /// Whether this operation creates the repository it targets
    ///
    /// Init- and clone-style operations run before their working directory
    /// exists, so the assembler prepends a `mkdir -p` step for them. The
    /// answer comes from the variant, never from the resolved text: a
    /// `Raw` command that happens to start with "init" reports false.
    pub fn initializes_repository(&self) -> bool {
        matches!(
            self,
            Operation::Clone { .. } | Operation::Command(Subcommand::Init | Subcommand::Clone, _)
        )
    }

    fn remote_args(
        subcommand: Subcommand,
        remote: &Option<String>,
        branch: &Option<String>,
    ) -> Vec<String> {
        let mut args = vec![subcommand.token().to_string()];
        if let Some(remote) = remote {
            args.push(remote.clone());
        }
        if let Some(branch) = branch {
            args.push(branch.clone());
        }
        args
    }
}
