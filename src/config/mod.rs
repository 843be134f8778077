pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, OutputFormat};

#[cfg(feature = "cli")]
mod cli {
    use crate::core::{Number, Operation};
    use clap::{Parser, Subcommand, ValueEnum};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "small-calc")]
    #[command(about = "Arithmetic helpers with a built-in self check")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum OutputFormat {
        Text,
        Json,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Add two numbers
        Add {
            #[arg(allow_negative_numbers = true)]
            a: Number,
            #[arg(allow_negative_numbers = true)]
            b: Number,
        },
        /// Divide A by B
        Divide {
            #[arg(allow_negative_numbers = true)]
            a: Number,
            #[arg(allow_negative_numbers = true)]
            b: Number,
        },
        /// Area of a circle with the given radius
        CircleArea {
            #[arg(allow_negative_numbers = true)]
            radius: Number,
        },
        /// Run a suite of check cases and exit non-zero on any failure
        Check {
            /// TOML check file; the built-in suite runs when omitted
            #[arg(short, long)]
            config: Option<PathBuf>,

            /// List the cases without evaluating them
            #[arg(long)]
            dry_run: bool,
        },
    }

    impl Command {
        /// The arithmetic operation this command evaluates, if any.
        pub fn operation(&self) -> Option<Operation> {
            match *self {
                Command::Add { a, b } => Some(Operation::Add { a, b }),
                Command::Divide { a, b } => Some(Operation::Divide { a, b }),
                Command::CircleArea { radius } => Some(Operation::CircleArea { radius }),
                Command::Check { .. } => None,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_negative_operand() {
            let config = CliConfig::try_parse_from(["small-calc", "circle-area", "-5"]).unwrap();
            assert_eq!(
                config.command.operation(),
                Some(Operation::CircleArea {
                    radius: Number::Int(-5)
                })
            );
            assert_eq!(config.format, OutputFormat::Text);
        }

        #[test]
        fn test_parse_global_flags_after_subcommand() {
            let config =
                CliConfig::try_parse_from(["small-calc", "divide", "10", "2.5", "--format", "json"])
                    .unwrap();
            assert_eq!(config.format, OutputFormat::Json);
            assert_eq!(
                config.command.operation(),
                Some(Operation::Divide {
                    a: Number::Int(10),
                    b: Number::Float(2.5)
                })
            );
        }

        #[test]
        fn test_parse_check() {
            let config =
                CliConfig::try_parse_from(["small-calc", "--verbose", "check", "--dry-run"]).unwrap();
            assert!(config.verbose);
            assert!(config.command.operation().is_none());
            assert!(matches!(
                config.command,
                Command::Check {
                    config: None,
                    dry_run: true
                }
            ));
        }

        #[test]
        fn test_reject_non_numeric_operand() {
            assert!(CliConfig::try_parse_from(["small-calc", "add", "one", "2"]).is_err());
        }
    }
}
