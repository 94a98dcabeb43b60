use colored::Colorize;

use crate::{
    Booster,
    WeakLearner,
    RoundStats,
};

use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;
use std::time::Instant;
use std::ops::ControlFlow;

const DEFAULT_ROUND: usize = 100;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,Error,VotingWeight,Time\n";


/// Implementing this trait allows you to use [`Logger`] to
/// log algorithm's behavor.
pub trait CurrentRound {
    /// Returns the statistics of the latest round, if any.
    fn last_round(&self) -> Option<RoundStats>;
}


/// Struct `Logger` provides a generic function that
/// logs the weighted error, voting weight, and running time
/// for each step of boosting.
pub struct Logger<B, W> {
    booster: B,
    weak_learner: W,
    time_limit: u128,
    round: usize,
}


impl<B, W> Logger<B, W> {
    /// Create a new instance of `Logger`.
    pub fn new(booster: B, weak_learner: W) -> Self {
        Self {
            booster,
            weak_learner,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Set the time limit for boosting algorithm as milliseconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for boosting algorithm as seconds.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(1_000_u128);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        assert!(round > 0, "the print interval must be positive");
        self.round = round;
        self
    }


    /// Returns the wrapped booster.
    pub fn booster(&self) -> &B {
        &self.booster
    }


    /// Consumes the logger and returns the booster and the weak learner.
    pub fn into_parts(self) -> (B, W) {
        (self.booster, self.weak_learner)
    }
}


impl<B, W> Logger<B, W>
    where B: Booster + CurrentRound,
          W: WeakLearner<B::Feature, Hypothesis = B::Hypothesis>,
{
    /// Run the given boosting algorithm with logging,
    /// and write `Round,Error,VotingWeight,Time` lines to `filename`.
    /// Note that this method is almost the same as `Booster::run`.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> io::Result<B::Output>
    {
        let mut file = File::create(filename)?;
        file.write_all(HEADER.as_bytes())?;
        self.run_with(Some(&mut file))
    }


    /// Run the given boosting algorithm with console logging only.
    pub fn run_silent(&mut self) -> B::Output {
        // Without a file no write can fail.
        match self.run_with(None) {
            Ok(f) => f,
            Err(e) => unreachable!("no file to write: {e}"),
        }
    }


    fn run_with(&mut self, mut file: Option<&mut File>)
        -> io::Result<B::Output>
    {
        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess();
        if self.round != usize::MAX { self.print_stats(); }

        // Cumulative time
        let mut time_acc = 0;
        let mut written = Ok(());

        // ---------------------------------------------------------------------
        // Boosting step
        if self.round != usize::MAX { self.print_log_header(); }
        let _ = (1..).try_for_each(|iter| {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter);

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            let Some(stats) = self.booster.last_round() else {
                return flow;
            };
            if stats.round != iter {
                // The booster stopped without growing a tree.
                return flow;
            }

            if let Some(file) = file.as_mut() {
                let line = format!(
                    "{},{},{},{time_acc}\n",
                    stats.round, stats.error, stats.voting_weight,
                );
                if let Err(e) = file.write_all(line.as_bytes()) {
                    written = Err(e);
                    return ControlFlow::Break(iter);
                }
            }

            if time_acc > self.time_limit {
                if self.round != usize::MAX {
                    print_line("[TLE]".bold().bright_red(), &stats, time_acc);
                }
                return ControlFlow::Break(iter);
            }

            if self.round != usize::MAX && iter % self.round == 0 {
                print_line("[LOG]".bold().magenta(), &stats, time_acc);
            }

            if flow.is_break() && self.round != usize::MAX {
                print_line("[FIN]".bold().bright_green(), &stats, time_acc);
            }
            flow
        });
        written?;

        Ok(self.booster.postprocess())
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "WEIGHTED".bold().blue(),
            "VOTING".bold().green(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "ERROR".bold().blue(),
            "WEIGHT".bold().green(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let limit = if self.time_limit != u128::MAX {
            time_format(self.time_limit)
        } else {
            "Nothing".into()
        };
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        print_info(self.booster.info());

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        print_info(self.weak_learner.info());

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n",
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }
}


fn print_info(info: Option<Vec<(&str, String)>>) {
    let Some(info) = info else { return; };
    let line = info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    println!("{line}");
}


fn print_line(tag: colored::ColoredString, stats: &RoundStats, time_acc: u128) {
    println!(
        "{} {}\t\t{}\t{}\t{}",
        tag,
        format!("{:>WIDTH$}", stats.round).red(),
        format!("{:>WIDTH$.PREC_WIDTH$}", stats.error).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", stats.voting_weight).green(),
        time_format(time_acc).bold().cyan(),
    );
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
