use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use segsum_tree::SegmentTree;

/// The worked example the tree is demonstrated against.
const DEFAULT_VALUES: &str = "3,5,6,7,2,9,4,5,2,8,1,5";

#[derive(Parser, Debug)]
#[command(name = "segsum")]
#[command(about = "Range-sum segment tree over a fixed sequence.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the tree and print every node plus the raw storage array.
    Show {
        /// Comma-separated input values.
        #[arg(long, default_value = DEFAULT_VALUES)]
        values: String,
    },
    /// Build the tree and print the sum over [left, right].
    Sum {
        /// Comma-separated input values.
        #[arg(long, default_value = DEFAULT_VALUES)]
        values: String,
        /// First index of the query range (inclusive).
        #[arg(long)]
        left: usize,
        /// Last index of the query range (inclusive).
        #[arg(long)]
        right: usize,
    },
    /// Apply a delta at one index and print sums before and after.
    Update {
        /// Comma-separated input values.
        #[arg(long, default_value = DEFAULT_VALUES)]
        values: String,
        /// Index receiving the delta.
        #[arg(long)]
        index: usize,
        /// Signed delta to apply.
        #[arg(long, allow_hyphen_values = true)]
        diff: i64,
        /// Also report the sum over this range (needs --right).
        #[arg(long, requires = "right")]
        left: Option<usize>,
        /// Also report the sum over this range (needs --left).
        #[arg(long, requires = "left")]
        right: Option<usize>,
    },
}

fn parse_values(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("invalid value {s:?} in --values"))
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Show { values } => {
            let values = parse_values(&values)?;
            let tree = SegmentTree::from_slice(&values)?;
            tree.walk(&mut |n| {
                let kind = if n.is_leaf() { "leaf" } else { "node" };
                println!(
                    "{kind} {:>3}  [{:>2}, {:>2}]  sum = {}",
                    n.node, n.start, n.end, n.value
                );
            });
            println!("total: {}", tree.total());
            println!("storage: {:?}", tree.storage());
        }

        Command::Sum {
            values,
            left,
            right,
        } => {
            let values = parse_values(&values)?;
            let tree = SegmentTree::from_slice(&values)?;
            println!("sum[{left}, {right}] = {}", tree.range_sum(left, right));
        }

        Command::Update {
            values,
            index,
            diff,
            left,
            right,
        } => {
            let values = parse_values(&values)?;
            let mut tree = SegmentTree::from_slice(&values)?;
            let range = left.zip(right);

            println!("before: total = {}", tree.total());
            if let Some((l, r)) = range {
                println!("before: sum[{l}, {r}] = {}", tree.range_sum(l, r));
            }

            tree.update(index, diff);

            println!("after:  total = {}", tree.total());
            if let Some((l, r)) = range {
                println!("after:  sum[{l}, {r}] = {}", tree.range_sum(l, r));
            }
        }
    }

    Ok(())
}
