//! `pbwt-match` binary: parses CLI arguments and dispatches to one of the
//! six matcher entry points in [`pbwt_match`].

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use pbwt_match::cli::{Cli, Mode};
use pbwt_match::config::MatchConfig;
use pbwt_match::query::{self, PanelIndex};
use pbwt_match::report::{CheckingReporter, MatchRecord, Reporter, StatsReporter, TextReporter};
use pbwt_match::within;
use pbwt_match::{displaylevel, Panel, PbwtError};

enum Sink<'p> {
    Plain(TextReporter<io::Stdout>),
    Checked(CheckingReporter<'p, TextReporter<io::Stdout>>),
    Stats(StatsReporter),
    CheckedStats(CheckingReporter<'p, StatsReporter>),
}

impl<'p> Reporter for Sink<'p> {
    fn report(&mut self, record: MatchRecord) -> Result<(), PbwtError> {
        match self {
            Sink::Plain(r) => r.report(record),
            Sink::Checked(r) => r.report(record),
            Sink::Stats(r) => r.report(record),
            Sink::CheckedStats(r) => r.report(record),
        }
    }

    fn report_sparse(&mut self, record: MatchRecord, is_sparse: bool) -> Result<(), PbwtError> {
        match self {
            Sink::Plain(r) => r.report_sparse(record, is_sparse),
            Sink::Checked(r) => r.report_sparse(record, is_sparse),
            Sink::Stats(r) => r.report_sparse(record, is_sparse),
            Sink::CheckedStats(r) => r.report_sparse(record, is_sparse),
        }
    }
}

fn make_sink<'p>(check: bool, stats: bool, haps_a: &'p Panel, haps_b: &'p Panel) -> Sink<'p> {
    match (check, stats) {
        (false, false) => Sink::Plain(TextReporter::new(io::stdout())),
        (true, false) => Sink::Checked(CheckingReporter::new(
            TextReporter::new(io::stdout()),
            haps_a,
            haps_b,
        )),
        (false, true) => Sink::Stats(StatsReporter::new()),
        (true, true) => {
            Sink::CheckedStats(CheckingReporter::new(StatsReporter::new(), haps_a, haps_b))
        }
    }
}

fn print_stats(s: &StatsReporter) {
    for (len, &count) in s.histogram().iter().enumerate() {
        if count > 0 {
            println!("{len}\t{count}");
        }
    }
    displaylevel!(
        2,
        "Average number of matches {}, average length {:.1}\n",
        s.total_matches(),
        s.average_length()
    );
}

fn finish(sink: Sink) {
    match sink {
        Sink::Stats(s) => print_stats(&s),
        Sink::CheckedStats(c) => print_stats(&c.into_inner()),
        _ => {}
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    pbwt_match::cli::constants::set_display_level(cli.verbose);

    let mut cfg = MatchConfig {
        check: cli.check,
        stats: cli.stats,
        ..MatchConfig::default()
    };

    match cli.mode {
        Mode::WithinThreshold { panel, length } => {
            cfg.length_threshold = length;
            let panel = Panel::from_text(&panel).with_context(|| "loading panel")?;
            let mut sink = make_sink(cfg.check, cfg.stats, &panel, &panel);
            within::match_long_within(&panel, cfg.length_threshold, &mut sink)?;
            finish(sink);
        }
        Mode::WithinMaximal { panel } => {
            let panel = Panel::from_text(&panel).with_context(|| "loading panel")?;
            let mut sink = make_sink(cfg.check, cfg.stats, &panel, &panel);
            within::match_maximal_within(&panel, &mut sink)?;
            finish(sink);
        }
        Mode::Naive { reference, query } => {
            let reference = Panel::from_text(&reference).with_context(|| "loading reference panel")?;
            let query = Panel::from_text(&query).with_context(|| "loading query panel")?;
            let mut sink = make_sink(cfg.check, cfg.stats, &query, &reference);
            query::match_naive(&reference, &query, &mut sink)?;
            finish(sink);
        }
        Mode::Indexed { reference, query } => {
            let reference = Panel::from_text(&reference).with_context(|| "loading reference panel")?;
            let query = Panel::from_text(&query).with_context(|| "loading query panel")?;
            let index = PanelIndex::build(&reference)?;
            displaylevel!(3, "Built panel index\n");
            let mut sink = make_sink(cfg.check, cfg.stats, &query, &reference);
            query::match_indexed(&reference, &index, &query, &mut sink)?;
            finish(sink);
        }
        Mode::Sweep { reference, query } => {
            let reference = Panel::from_text(&reference).with_context(|| "loading reference panel")?;
            let query = Panel::from_text(&query).with_context(|| "loading query panel")?;
            let mut sink = make_sink(cfg.check, cfg.stats, &query, &reference);
            query::match_sweep(&reference, &query, &mut sink)?;
            finish(sink);
        }
        Mode::SweepSparse {
            reference,
            query,
            n_sparse,
        } => {
            cfg.n_sparse = n_sparse;
            cfg.validate()?;
            let reference = Panel::from_text(&reference).with_context(|| "loading reference panel")?;
            let query = Panel::from_text(&query).with_context(|| "loading query panel")?;
            let mut sink = make_sink(cfg.check, cfg.stats, &query, &reference);
            query::match_sweep_sparse(&reference, &query, cfg.n_sparse, &mut sink)?;
            finish(sink);
        }
    }

    Ok(())
}
