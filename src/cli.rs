//! # Command Line Interface
//!
//! One subcommand per client operation. Credentials come from `~/.netrc` and
//! the site from `$JIRA_HOST`, re-read for every request.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use storylink_jira::consts::DEFAULT_MAX_PAGES;
use storylink_jira::{JiraClient, LinkOutcome, NetrcAuthProvider};

use crate::output;

/// Top-level CLI command for storylink
#[derive(Parser)]
#[command(name = "storylink")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Inspect Jira epics and stories, link issues and post comments")]
#[command(
  long_about = "Storylink talks to a Jira site using the host in $JIRA_HOST and the\n\
        credentials stored for that host (or 'atlassian.net') in ~/.netrc."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Maximum number of pages fetched by listing commands
  #[arg(long, global = true, default_value_t = DEFAULT_MAX_PAGES)]
  pub max_pages: usize,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for storylink
#[derive(Subcommand)]
pub enum Commands {
  /// Print an issue or epic as JSON
  Issue {
    /// Issue key, e.g. D1-1
    key: String,
  },

  /// Print a project as JSON
  Project {
    /// Project key or id, e.g. D1
    id: String,
  },

  /// Print every project on the site, archived ones included
  Projects,

  /// Link two issues
  #[command(long_about = "Link two issues.\n\n\
            FROM is the new (child) issue and TO the issue it links to (the parent).\n\
            TYPE is a link type name such as Relates, Blocks, Cloners or Duplicate;\n\
            run 'storylink link-types' to see what the site offers.")]
  Link {
    from: String,
    to: String,
    #[arg(value_name = "TYPE")]
    link_type: String,
  },

  /// List the issue link types configured on the site
  LinkTypes,

  /// Print the assignee and reporter of an issue
  People {
    /// Issue key, e.g. D1-5
    key: String,
  },

  /// Print every story in an epic with its status, project and priority
  Stories {
    /// Epic key, e.g. D1-7
    epic: String,
  },

  /// Add a plain-text comment to an issue
  Comment {
    /// Issue key, e.g. D1-7
    key: String,
    /// Comment text
    text: String,
  },

  /// Check that the configured credentials are accepted
  Check,
}

/// Dispatch a parsed command line.
pub fn handle_cli(cli: Cli) -> Result<()> {
  let client = JiraClient::new(NetrcAuthProvider::from_home()?).with_max_pages(cli.max_pages);

  match cli.command {
    Commands::Issue { key } => output::print_json(&client.get_issue(&key)?),
    Commands::Project { id } => output::print_json(&client.get_project(&id)?),
    Commands::Projects => output::print_json(&client.get_all_projects()?),
    Commands::Link { from, to, link_type } => {
      let outcome = client.create_issue_link(&from, &to, &link_type)?;
      match &outcome {
        LinkOutcome::Created { .. } => output::print_success(&outcome.to_string()),
        LinkOutcome::NotCreated { status } => output::print_warning(&format!("{outcome} (HTTP {status})")),
      }
      Ok(())
    }
    Commands::LinkTypes => output::print_json(&client.get_issue_link_types()?),
    Commands::People { key } => output::print_json(&client.get_issue_people(&key)?),
    Commands::Stories { epic } => output::print_json(&client.get_stories_in_epic(&epic)?),
    Commands::Comment { key, text } => {
      let response = client.add_comment(&key, &text)?;
      if response.is_success() {
        output::print_success(&format!("Comment added to {key}"));
      } else {
        output::print_warning(&format!("Jira answered HTTP {} for {key}", response.status));
      }
      match response.json() {
        Ok(body) => output::print_json(&body),
        Err(_) => output::print_raw(&response.body),
      }
    }
    Commands::Check => {
      if client.check_connection()? {
        output::print_success("Jira accepted the configured credentials");
      } else {
        output::print_warning("Jira rejected the configured credentials");
      }
      Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_link_command() {
    let cli = Cli::try_parse_from(["storylink", "-v", "link", "D1-7", "D1-23", "Relates"]).unwrap();

    assert_eq!(cli.verbose, 1);
    assert_eq!(cli.max_pages, DEFAULT_MAX_PAGES);
    match cli.command {
      Commands::Link { from, to, link_type } => {
        assert_eq!(from, "D1-7");
        assert_eq!(to, "D1-23");
        assert_eq!(link_type, "Relates");
      }
      _ => panic!("expected the link command"),
    }
  }

  #[test]
  fn test_parse_max_pages_after_subcommand() {
    let cli = Cli::try_parse_from(["storylink", "stories", "D1-7", "--max-pages", "5"]).unwrap();

    assert_eq!(cli.max_pages, 5);
    assert!(matches!(cli.command, Commands::Stories { epic } if epic == "D1-7"));
  }
}
