//! Command-line configuration for the `rusty-tally` binary.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::error::ValidationError;
use crate::query::{Filter, PageRequest};
use crate::runner::{Report, ReportOptions};

#[derive(Debug, Parser)]
#[command(
    name = "rusty-tally",
    version,
    about = "Income, expense and balance reports over a CSV of transactions"
)]
pub struct Config {
    /// CSV file with `description,amount,category,date` rows
    pub input: PathBuf,

    /// Report to write to stdout
    #[arg(short, long, value_enum, default_value_t = Report::Transactions)]
    pub report: Report,

    /// Only list transactions in this category ("all" for every category)
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Earliest date to list (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest date to list (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Page of the transaction list, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Transactions per page
    #[arg(long, env = "RUSTY_TALLY_PAGE_SIZE", default_value_t = PageRequest::DEFAULT_PAGE_SIZE)]
    pub limit: usize,

    /// Load through the async ledger service instead of a plain ledger
    #[arg(long = "async")]
    pub use_async: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "RUSTY_TALLY_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn report_options(&self) -> Result<ReportOptions, ValidationError> {
        Ok(ReportOptions {
            report: self.report,
            filter: Filter::default()
                .category_name(&self.category)?
                .between(self.from, self.to),
            page: PageRequest::new(self.page, self.limit)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Category;

    #[test]
    fn test_defaults() {
        let config =
            Config::try_parse_from(["rusty-tally", "data/sample_transactions.csv"]).unwrap();
        assert_eq!(config.input, PathBuf::from("data/sample_transactions.csv"));
        assert!(!config.use_async);

        let options = config.report_options().unwrap();
        assert_eq!(options.report, Report::Transactions);
        assert_eq!(options.filter, Filter::default());
        assert_eq!(options.page.page(), 1);
    }

    #[test]
    fn test_filters_and_paging() {
        let config = Config::try_parse_from([
            "rusty-tally",
            "in.csv",
            "--category",
            "Other Income",
            "--from",
            "2025-04-10",
            "--to",
            "2025-04-20",
            "--page",
            "2",
            "--limit",
            "5",
        ])
        .unwrap();

        let options = config.report_options().unwrap();
        assert_eq!(
            options.filter,
            Filter {
                category: Some(Category::OtherIncome),
                start_date: "2025-04-10".parse().ok(),
                end_date: "2025-04-20".parse().ok(),
            }
        );
        assert_eq!(options.page, PageRequest::new(2, 5).unwrap());
    }

    #[test]
    fn test_report_selection() {
        let config =
            Config::try_parse_from(["rusty-tally", "in.csv", "-r", "categories", "--async"])
                .unwrap();
        assert_eq!(config.report, Report::Categories);
        assert!(config.use_async);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::try_parse_from(["rusty-tally", "in.csv", "--from", "April"]).is_err());
        assert!(Config::try_parse_from(["rusty-tally", "in.csv", "-r", "totals"]).is_err());

        let config = Config::try_parse_from(["rusty-tally", "in.csv", "--page", "0"]).unwrap();
        assert_eq!(
            config.report_options().unwrap_err(),
            ValidationError::InvalidPage { page: 0, page_size: config.limit }
        );

        let config = Config::try_parse_from(["rusty-tally", "in.csv", "-c", "Pets"]).unwrap();
        assert!(config.report_options().is_err());
    }
}
