use stderrlog::{LogLevelNum, Timestamp};

/// Verbosity used when no `-v` flag is given: info.
pub const DEFAULT_VERBOSITY: u8 = 3;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// More verbose logging (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The selected log level; each `-v` raises `default` by one level.
    pub fn log_level(
        &self,
        default: u8,
    ) -> LogLevelNum {
        let level = default.saturating_add(self.verbose.unwrap_or(0));

        match level {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.log_level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
