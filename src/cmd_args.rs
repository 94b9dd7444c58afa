use crate::browser::models::{FilterCriterion, SortState};
use crate::config;
use std::ffi::OsString;
use std::time::Duration;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Users endpoint. Overrides USERLINE_USERS_URL and the built-in default.
    #[clap(short = 'u', long, help = "users endpoint URL")]
    url: Option<String>,

    #[clap(
        short = 'g',
        long,
        default_value = "all",
        help = "initial gender filter (all, male, female)"
    )]
    gender: FilterCriterion,

    #[clap(
        short = 's',
        long,
        default_value = "none",
        help = "initial sort (none, id, name)"
    )]
    sort: SortState,

    /// 1-based page shown first. Clamped to the available pages once users load.
    #[clap(short = 'p', long, default_value_t = 1, help = "initial page")]
    page: usize,

    #[clap(
        short = 't',
        long,
        default_value_t = config::DEFAULT_TIMEOUT_SECS,
        help = "request timeout in seconds"
    )]
    timeout: u64,

    /// Fetch once, print the page as plain text and exit
    #[clap(long, help = "print the list instead of opening the interactive view")]
    print: bool,

    #[clap(long, help = "write logs to this file instead of stderr")]
    log_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    url: Option<String>,
    gender: FilterCriterion,
    sort: SortState,
    page: usize,
    timeout: u64,
    print: bool,
    log_file: Option<String>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            url: args.url,
            gender: args.gender,
            sort: args.sort,
            page: args.page.max(1),
            timeout: args.timeout,
            print: args.print,
            log_file: args.log_file,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    /// Like [`parse_from`](Self::parse_from) but returns clap's error instead of exiting
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Into::into)
    }

    /// Endpoint to fetch: `--url`, then the environment, then the default
    pub fn url(&self) -> String {
        self.url.clone().unwrap_or_else(config::get_users_url)
    }

    pub fn gender(&self) -> FilterCriterion {
        self.gender
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn print(&self) -> bool {
        self.print
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.gender(), FilterCriterion::None);
        assert_eq!(args.sort(), SortState::Unsorted);
        assert_eq!(args.page(), 1);
        assert_eq!(args.timeout(), Duration::from_secs(30));
        assert!(!args.print());
        assert_eq!(args.log_file(), None);
    }

    #[test]
    fn test_parse_args_long_flags() {
        let args = CommandLineArgs::parse_from([
            "program",
            "--url",
            "http://localhost:3000/users",
            "--gender",
            "female",
            "--sort",
            "name",
            "--page",
            "3",
            "--timeout",
            "5",
            "--print",
            "--log-file",
            "/tmp/userline.log",
        ]);
        assert_eq!(args.url(), "http://localhost:3000/users");
        assert_eq!(args.gender(), FilterCriterion::Female);
        assert_eq!(args.sort(), SortState::ByNameAscending);
        assert_eq!(args.page(), 3);
        assert_eq!(args.timeout(), Duration::from_secs(5));
        assert!(args.print());
        assert_eq!(args.log_file(), Some("/tmp/userline.log"));
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-g", "male", "-s", "id", "-p", "2"]);
        assert_eq!(args.gender(), FilterCriterion::Male);
        assert_eq!(args.sort(), SortState::ByIdentifierDescending);
        assert_eq!(args.page(), 2);
    }

    #[test]
    fn test_page_zero_becomes_one() {
        let args = CommandLineArgs::parse_from(["program", "--page", "0"]);
        assert_eq!(args.page(), 1);
    }

    #[test]
    fn test_invalid_gender_is_rejected() {
        let result = CommandLineArgs::try_parse_from(["program", "--gender", "other"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_sort_is_rejected() {
        let result = CommandLineArgs::try_parse_from(["program", "--sort", "age"]);
        assert!(result.is_err());
    }
}
