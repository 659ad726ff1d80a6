use clap::{Parser, Subcommand};

/// Command line arguments of the fixture tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Calibrate and drive a four channel LED fixture"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a long calibration, print every run's sample, keep nothing
    Long,

    /// Run a short calibration, print and store the limits
    Calib,

    /// Apply one fraction to all channels, or one fraction per channel
    #[command(alias = "color")]
    Colour {
        /// X, or R G B W
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        fractions: Vec<f64>,
    },

    /// Every channel at 255, ignoring calibration
    White,

    /// Every channel at 0
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(argv)
    }

    #[test]
    fn test_no_command() {
        assert_eq!(parse(&["fixture-calib"]).unwrap().command, None);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse(&["fixture-calib", "long"]).unwrap().command, Some(Command::Long));
        assert_eq!(parse(&["fixture-calib", "calib"]).unwrap().command, Some(Command::Calib));
        assert_eq!(parse(&["fixture-calib", "white"]).unwrap().command, Some(Command::White));
        assert_eq!(parse(&["fixture-calib", "off"]).unwrap().command, Some(Command::Off));
    }

    #[test]
    fn test_colour_fractions() {
        let args = parse(&["fixture-calib", "colour", "0.5"]).unwrap();
        assert_eq!(args.command, Some(Command::Colour { fractions: vec![0.5] }));

        let args = parse(&["fixture-calib", "colour", "1", "0.5", "0", "0.25"]).unwrap();
        assert_eq!(args.command, Some(Command::Colour { fractions: vec![1.0, 0.5, 0.0, 0.25] }));
    }

    #[test]
    fn test_bad_input() {
        assert!(parse(&["fixture-calib", "colour"]).is_err());
        assert!(parse(&["fixture-calib", "colour", "bright"]).is_err());
        assert!(parse(&["fixture-calib", "disco"]).is_err());
    }
}
