use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "justme")]
#[command(about = "Track daily habits, streaks and moods from the command line")]
#[command(long_about = "justme - habit and mood tracking for the command line

Track checkbox, counter and timer habits, see streaks and weekly success
rates, and keep a one-entry-per-day mood journal.

QUICK START:
  justme add \"Drink Water\" --type counter --target 8 --unit glasses
  justme log \"Drink Water\" inc      Add one glass for today
  justme today                       Today's progress
  justme stats                       Streaks and this week's grid
  justme profile                     Overview across habits and moods
  justme mood log happy              Log today's mood

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  justme <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. Defaults to the
    /// `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding the database and config file
    #[arg(long, global = true, env = "JUSTME_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new habit
    ///
    /// # Examples
    ///
    ///   justme add "Morning Exercise"
    ///   justme add "Drink Water" --type counter --target 8 --unit glasses
    ///   justme add "Read Books" --type timer --target 15 -d "15 min reading"
    #[command(alias = "a")]
    Add(AddArgs),

    /// Change a habit's description, target or active flag
    ///
    /// The tracking type of a habit never changes.
    ///
    /// # Examples
    ///
    ///   justme edit "Drink Water" --target 10
    ///   justme edit Meditate --inactive
    Edit(EditArgs),

    /// Delete a habit and its whole history
    ///
    /// Use `justme edit <habit> --inactive` to hide a habit but keep its
    /// history.
    #[command(alias = "rm")]
    Delete {
        /// Habit name, id or id prefix
        habit: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// List habits
    #[command(alias = "ls")]
    List {
        /// Include inactive habits
        #[arg(short, long)]
        all: bool,
    },

    /// Show one habit with its statistics and logged history
    Show {
        /// Habit name, id or id prefix
        habit: String,

        /// Report as of this date (today, yesterday or yyyy-MM-dd)
        #[arg(long)]
        date: Option<String>,

        /// Only list the N most recent history entries
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Log progress on a habit
    ///
    /// # Examples
    ///
    ///   justme log "Morning Exercise" toggle
    ///   justme log "Drink Water" inc
    ///   justme log Meditate dec
    ///   justme log "Read Books" set 20 --date yesterday
    #[command(alias = "l")]
    Log(LogArgs),

    /// Show today's progress across active habits
    #[command(alias = "t")]
    Today {
        /// Show another day (today, yesterday or yyyy-MM-dd)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show streaks and weekly success for every habit
    Stats {
        /// Include inactive habits
        #[arg(short, long)]
        all: bool,

        /// Report as of this date (today, yesterday or yyyy-MM-dd)
        #[arg(long)]
        date: Option<String>,
    },

    /// Overview across all habits and moods
    ///
    /// Shows the activity streak (days with any completion), active habit
    /// and mood entry counts, active days this week, the most completed
    /// habit and the most frequent mood.
    #[command(alias = "p")]
    Profile {
        /// Report as of this date (today, yesterday or yyyy-MM-dd)
        #[arg(long)]
        date: Option<String>,
    },

    /// Log and review daily moods
    Mood(MoodArgs),

    /// Replace all data with demo habits and history
    Seed {
        /// Days of history to generate
        #[arg(long, default_value_t = 30)]
        days: u32,

        /// Confirm replacing existing data
        #[arg(long)]
        yes: bool,
    },

    /// Delete all habits, completions and moods
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Print shell completions
    ///
    /// # Examples
    ///
    ///   justme completions zsh > ~/.zfunc/_justme
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Tracking type accepted by `add`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HabitKind {
    /// Done or not done.
    Checkbox,
    /// A count with a daily target.
    Counter,
    /// Minutes with a daily target.
    Timer,
}

impl HabitKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Counter => "counter",
            Self::Timer => "timer",
        }
    }
}

#[derive(Args)]
pub struct AddArgs {
    /// Habit name
    pub name: String,

    /// How progress is tracked
    #[arg(short = 't', long = "type", value_enum, default_value = "checkbox")]
    pub kind: HabitKind,

    /// Daily target (required for counter and timer habits)
    #[arg(long)]
    pub target: Option<u32>,

    /// Unit label, e.g. glasses (timer habits default to minutes)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Free-text description
    #[arg(short, long, default_value = "")]
    pub description: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Habit name, id or id prefix
    pub habit: String,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New daily target (counter and timer habits)
    #[arg(long)]
    pub target: Option<u32>,

    /// Mark the habit active
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,

    /// Mark the habit inactive; its history is kept
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Args)]
pub struct LogArgs {
    /// Habit name, id or id prefix
    pub habit: String,

    #[command(subcommand)]
    pub action: LogCommands,

    /// Day to log (today, yesterday or yyyy-MM-dd)
    #[arg(long, global = true)]
    pub date: Option<String>,
}

#[derive(Subcommand, Clone, Copy)]
pub enum LogCommands {
    /// Flip a checkbox habit between done and not done
    Toggle,
    /// Add one step to a counter or timer habit
    Inc,
    /// Remove one step from a counter or timer habit
    Dec,
    /// Write an explicit value (0 clears the day)
    Set {
        value: u32,
    },
}

#[derive(Args)]
pub struct MoodArgs {
    #[command(subcommand)]
    pub command: MoodCommands,
}

#[derive(Subcommand)]
pub enum MoodCommands {
    /// Record the day's mood, replacing any earlier entry
    ///
    /// Moods: happy, excited, neutral, sad, angry
    Log {
        /// Mood name
        mood: String,

        /// Optional note
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Day to log (today, yesterday or yyyy-MM-dd)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the mood for a day
    Show {
        /// Day to show (today, yesterday or yyyy-MM-dd)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show this week's mood trend
    Week {
        /// Any day in the week to show (today, yesterday or yyyy-MM-dd)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show a month of moods as a calendar
    Calendar {
        /// Month as yyyy-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::try_parse_from(["justme", "today"]).unwrap();
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["justme", "--output", "json", "today"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_short_after_subcommand() {
        let cli = Cli::try_parse_from(["justme", "today", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_data_dir() {
        let cli = Cli::try_parse_from(["justme", "--data-dir", "/tmp/jm", "list"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/jm")));
    }

    #[test]
    fn test_cli_add_defaults_to_checkbox() {
        let cli = Cli::try_parse_from(["justme", "add", "Take Vitamins"]).unwrap();
        if let Commands::Add(args) = cli.command {
            assert_eq!(args.name, "Take Vitamins");
            assert_eq!(args.kind, HabitKind::Checkbox);
            assert!(args.target.is_none());
            assert_eq!(args.description, "");
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_add_counter() {
        let cli = Cli::try_parse_from([
            "justme",
            "add",
            "Drink Water",
            "--type",
            "counter",
            "--target",
            "8",
            "--unit",
            "glasses",
        ])
        .unwrap();
        if let Commands::Add(args) = cli.command {
            assert_eq!(args.kind, HabitKind::Counter);
            assert_eq!(args.target, Some(8));
            assert_eq!(args.unit.as_deref(), Some("glasses"));
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_add_rejects_unknown_type() {
        let result = Cli::try_parse_from(["justme", "add", "X", "--type", "slider"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_edit_active_flags_conflict() {
        let result = Cli::try_parse_from(["justme", "edit", "X", "--active", "--inactive"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_log_inc() {
        let cli = Cli::try_parse_from(["justme", "log", "Drink Water", "inc"]).unwrap();
        if let Commands::Log(args) = cli.command {
            assert_eq!(args.habit, "Drink Water");
            assert!(matches!(args.action, LogCommands::Inc));
            assert!(args.date.is_none());
        } else {
            panic!("Expected Log command");
        }
    }

    #[test]
    fn test_cli_log_set_with_date() {
        let cli = Cli::try_parse_from([
            "justme",
            "log",
            "Read Books",
            "set",
            "20",
            "--date",
            "2024-01-05",
        ])
        .unwrap();
        if let Commands::Log(args) = cli.command {
            assert!(matches!(args.action, LogCommands::Set { value: 20 }));
            assert_eq!(args.date.as_deref(), Some("2024-01-05"));
        } else {
            panic!("Expected Log command");
        }
    }

    #[test]
    fn test_cli_log_alias() {
        let cli = Cli::try_parse_from(["justme", "l", "Run", "toggle"]).unwrap();
        assert!(matches!(cli.command, Commands::Log(_)));
    }

    #[test]
    fn test_cli_mood_log() {
        let cli =
            Cli::try_parse_from(["justme", "mood", "log", "happy", "-n", "good day"]).unwrap();
        if let Commands::Mood(args) = cli.command {
            if let MoodCommands::Log { mood, notes, date } = args.command {
                assert_eq!(mood, "happy");
                assert_eq!(notes, "good day");
                assert!(date.is_none());
            } else {
                panic!("Expected mood log");
            }
        } else {
            panic!("Expected Mood command");
        }
    }

    #[test]
    fn test_cli_mood_calendar_month() {
        let cli =
            Cli::try_parse_from(["justme", "mood", "calendar", "--month", "2024-02"]).unwrap();
        if let Commands::Mood(args) = cli.command {
            assert!(matches!(
                args.command,
                MoodCommands::Calendar { month: Some(ref m) } if m == "2024-02"
            ));
        } else {
            panic!("Expected Mood command");
        }
    }

    #[test]
    fn test_cli_show_history_limit() {
        let cli = Cli::try_parse_from(["justme", "show", "Read", "--limit", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show {
                limit: Some(3),
                ..
            }
        ));
    }

    #[test]
    fn test_cli_profile_alias() {
        let cli = Cli::try_parse_from(["justme", "p", "--date", "yesterday"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Profile { date: Some(ref d) } if d == "yesterday"
        ));
    }

    #[test]
    fn test_cli_seed_defaults() {
        let cli = Cli::try_parse_from(["justme", "seed"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Seed {
                days: 30,
                yes: false
            }
        ));
    }

    #[test]
    fn test_cli_completions_shell() {
        let cli = Cli::try_parse_from(["justme", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions {
                shell: clap_complete::Shell::Bash
            }
        ));
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
