//! Command-line argument definition and processing.

use clap::Parser;

use crate::app::RunOptions;
use crate::state::{FilterCriteria, OrderDirection, StatName};
use crate::theme::Settings;

/// Pokedex - browse the PokeAPI GraphQL catalog as cards in your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version)]
#[command(
    about = "Browse the PokeAPI GraphQL catalog as cards in your terminal",
    long_about = None
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// GraphQL endpoint (overrides `endpoint` in settings.conf)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Initial name search (substring, case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Stat restricted by --min/--max (hp, attack, defense, speed)
    #[arg(long, value_parser = parse_stat)]
    pub stat: Option<StatName>,

    /// Inclusive lower bound for the stat
    #[arg(long)]
    pub min: Option<u32>,

    /// Inclusive upper bound for the stat
    #[arg(long)]
    pub max: Option<u32>,

    /// Remote order by name (asc, desc)
    #[arg(long, value_parser = parse_order)]
    pub order: Option<OrderDirection>,

    /// Page to open (1-based)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print every type known to the endpoint and exit
    #[arg(long)]
    pub list_types: bool,

    /// Fetch one page, print it as text cards and exit
    #[arg(long)]
    pub print: bool,
}

fn parse_stat(s: &str) -> Result<StatName, String> {
    StatName::from_config_key(s)
        .ok_or_else(|| format!("unknown stat '{s}' (expected hp, attack, defense or speed)"))
}

fn parse_order(s: &str) -> Result<OrderDirection, String> {
    OrderDirection::from_config_key(s)
        .ok_or_else(|| format!("unknown order '{s}' (expected asc or desc)"))
}

impl Args {
    /// What: Merge settings with the command-line overrides.
    ///
    /// Inputs:
    /// - `settings`: values loaded from `settings.conf` (or defaults)
    ///
    /// Output:
    /// - Effective settings and the filter criteria for the first fetch.
    ///
    /// Details:
    /// - Flags win over settings; settings win over built-in defaults.
    #[must_use]
    pub fn run_options(&self, mut settings: Settings) -> RunOptions {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint.clone_from(endpoint);
        }
        let criteria = FilterCriteria {
            search_text: self.search.clone().unwrap_or_default(),
            stat: self.stat.unwrap_or(settings.default_stat),
            min_value: self.min.map(|v| v.to_string()).unwrap_or_default(),
            max_value: self.max.map(|v| v.to_string()).unwrap_or_default(),
            selected_type_id: None,
            sort_key: settings.default_sort,
            order: self.order.unwrap_or(settings.default_order),
            page: self.page.unwrap_or(1),
            page_size: settings.page_size,
        };
        RunOptions { settings, criteria }
    }
}

/// What: Determine the log level based on command-line arguments.
///
/// Output:
/// - Log level directive (trace, debug, info, warn, error); `--verbose` wins over `--log-level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SortKey;

    #[test]
    /// What: Flags override settings and settings fill the rest
    fn flags_override_settings() {
        let args = Args::try_parse_from([
            "pokedex",
            "--endpoint",
            "http://localhost:8080/v1/graphql",
            "--search",
            "saur",
            "--stat",
            "attack",
            "--min",
            "50",
            "--order",
            "desc",
            "--page",
            "2",
        ])
        .expect("valid args");
        let settings = Settings {
            page_size: 20,
            default_sort: SortKey::Hp,
            ..Settings::default()
        };
        let opts = args.run_options(settings);
        assert_eq!(opts.settings.endpoint, "http://localhost:8080/v1/graphql");
        assert_eq!(opts.criteria.search_text, "saur");
        assert_eq!(opts.criteria.stat, StatName::Attack);
        assert_eq!(opts.criteria.min_value, "50");
        assert_eq!(opts.criteria.max_value, "");
        assert_eq!(opts.criteria.order, OrderDirection::Desc);
        assert_eq!(opts.criteria.page, 2);
        assert_eq!(opts.criteria.page_size, 20);
        assert_eq!(opts.criteria.sort_key, SortKey::Hp);
        assert_eq!(opts.criteria.offset(), 20);
    }

    #[test]
    /// What: Invalid stat, order and page 0 are rejected by the parser
    fn invalid_values_rejected() {
        assert!(Args::try_parse_from(["pokedex", "--stat", "luck"]).is_err());
        assert!(Args::try_parse_from(["pokedex", "--order", "sideways"]).is_err());
        assert!(Args::try_parse_from(["pokedex", "--page", "0"]).is_err());
    }

    #[test]
    /// What: Verbose forces debug logging
    fn verbose_wins() {
        let args = Args::try_parse_from(["pokedex", "-v", "--log-level", "warn"]).expect("args");
        assert_eq!(determine_log_level(&args), "debug");
        let args = Args::try_parse_from(["pokedex"]).expect("args");
        assert_eq!(determine_log_level(&args), "info");
    }
}
