use std::io::{self, BufWriter, Write};

use clap::{ArgAction, Parser};
use rank_stream::RankTree;
use tracing::{Level, debug, info, trace};

/// Tracks a stream of integers, then prints the rank of each queried value.
///
/// The rank of `x` is the number of tracked values less than or equal to `x`,
/// not counting `x` itself. Values that were never tracked print as `-1`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Values to track, in stream order.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [5, 1, 4, 4, 5, 9, 7, 13, 3]
    )]
    track: Vec<i64>,

    /// Values whose rank to print.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [1, 3, 4, 5, 13, 0, 2, 6, 10, 14, 15]
    )]
    query: Vec<i64>,

    /// Skip printing the `value(count)` dump of the tree.
    #[arg(long)]
    no_dump: bool,

    /// Log more to stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Writes the dump (unless disabled) followed by one line per query.
fn report(tree: &RankTree<i64>, opts: &Opts, out: &mut impl Write) -> io::Result<()> {
    if !opts.no_dump {
        for (key, count) in tree {
            writeln!(out, "{key}({count})")?;
        }
    }

    for query in &opts.query {
        let rank = tree.rank_or_sentinel(query);
        debug!(query, rank, "rank lookup");
        writeln!(out, "Rank of {query} is: {rank}")?;
    }

    Ok(())
}

fn main() -> io::Result<()> {
    let opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(opts.verbose))
        .with_writer(io::stderr)
        .init();

    let mut tree = RankTree::with_capacity(opts.track.len());
    for &value in &opts.track {
        tree.track(value);
        trace!(value, height = tree.height(), "tracked");
    }
    info!(
        tracked = tree.len(),
        distinct = tree.distinct_len(),
        height = tree.height(),
        "stream loaded"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    report(&tree, &opts, &mut out)?;
    out.flush()
}
