//! Command-line argument parsing (`clap::Parser` derive), one subcommand
//! per matcher entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pbwt-match", version, about = "PBWT haplotype matching engine")]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,

    /// Verify every reported match is real and maximal before it is
    /// forwarded; aborts the run on the first violation.
    #[arg(long, global = true)]
    pub check: bool,

    /// Accumulate a match-length histogram instead of printing individual
    /// matches.
    #[arg(long, global = true)]
    pub stats: bool,

    /// Console verbosity, 0 (silent) through 4 (trace).
    #[arg(long, default_value_t = 2, global = true)]
    pub verbose: u32,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Within-panel matches at least `--length` sites long (Algorithm 3').
    WithinThreshold {
        panel: PathBuf,
        #[arg(long, default_value_t = 0)]
        length: u32,
    },
    /// Every maximal within-panel match (Algorithm 4).
    WithinMaximal { panel: PathBuf },
    /// Panel-vs-query matching with no PBWT index: O(NMQ) time, O(NM) memory.
    Naive {
        reference: PathBuf,
        query: PathBuf,
    },
    /// Panel-vs-query matching via a precomputed index (Algorithm 5):
    /// O(NQ) time after an O(NM) build, O(NM) memory.
    Indexed {
        reference: PathBuf,
        query: PathBuf,
    },
    /// Panel-vs-query matching via a dynamic cursor sweep: O(N(M+Q)) time,
    /// O(N+M) memory.
    Sweep {
        reference: PathBuf,
        query: PathBuf,
    },
    /// The dynamic sweep run over `--n-sparse` interleaved sub-panels as
    /// well as the dense panel.
    SweepSparse {
        reference: PathBuf,
        query: PathBuf,
        #[arg(long, default_value_t = 1)]
        n_sparse: usize,
    },
}
