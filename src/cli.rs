use crate::app::DEFAULT_CURRENCY;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "invest", version, about = "Personal investment tracker TUI")]
pub struct Cli {
    /// Prefix shown before every value
    #[arg(short, long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// JSON file with initial investments: [{"name": "CDB", "value": 100}]
    #[arg(short, long)]
    pub seed: Option<PathBuf>,

    /// Start with a few example investments
    #[arg(long)]
    pub sample: bool,

    /// Write debug logs to $XDG_STATE_HOME/invest-tui/debug.log
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["invest"]).unwrap();
        assert_eq!(cli.currency, "R$");
        assert!(cli.seed.is_none());
        assert!(!cli.sample);
        assert!(!cli.verbose);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from(["invest", "-c", "$", "-s", "seed.json", "--sample", "-v"])
            .unwrap();
        assert_eq!(cli.currency, "$");
        assert_eq!(cli.seed, Some(PathBuf::from("seed.json")));
        assert!(cli.sample);
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["invest", "--bogus"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
