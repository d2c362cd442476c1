use super::{AppError, EcoTripConfig, Operation};
use clap::Parser;

/// plan trips and compare travel modes on time, cost and carbon
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EcoTripApp {
    /// TOML file overriding the default configuration
    #[arg(long)]
    pub config_file: Option<String>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: Operation,
}

impl EcoTripApp {
    pub fn run(&self) -> Result<(), AppError> {
        let conf = EcoTripConfig::load(self.config_file.as_deref())?;
        let output = self.op.run(&conf)?;
        println!("{output}");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::EcoTripApp;
    use crate::app::{Operation, RewardsOperation, TripsOperation};
    use clap::Parser;
    use ecotrip_core::{model::TravelMode, trips::TripSortKey};

    #[test]
    fn test_parse_plan() {
        let app = EcoTripApp::try_parse_from([
            "ecotrip", "plan", "--from", "Home", "--to", "Paris", "--cheapest", "--save", "bike",
        ])
        .expect("test invariant failed");
        match app.op {
            Operation::Plan {
                from,
                to,
                cheapest,
                fastest,
                save,
                ..
            } => {
                assert_eq!(from, "Home");
                assert_eq!(to, "Paris");
                assert!(cheapest);
                assert!(!fastest);
                assert_eq!(save, Some(TravelMode::Cycle));
            }
            _ => panic!("test failed, expected plan"),
        }
    }

    #[test]
    fn test_parse_nested() {
        let app = EcoTripApp::try_parse_from([
            "ecotrip",
            "--config-file",
            "ecotrip.toml",
            "trips",
            "list",
            "--sort",
            "co2",
        ])
        .expect("test invariant failed");
        assert_eq!(app.config_file.as_deref(), Some("ecotrip.toml"));
        match app.op {
            Operation::Trips {
                op: TripsOperation::List { sort, .. },
            } => assert_eq!(sort, TripSortKey::Co2),
            _ => panic!("test failed, expected trips list"),
        }

        let app = EcoTripApp::try_parse_from(["ecotrip", "rewards", "redeem", "coupon"])
            .expect("test invariant failed");
        assert!(matches!(
            app.op,
            Operation::Rewards {
                op: RewardsOperation::Redeem { .. }
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let result = EcoTripApp::try_parse_from([
            "ecotrip", "plan", "--from", "A", "--to", "B", "--mode", "rocket",
        ]);
        assert!(result.is_err());
    }
}
