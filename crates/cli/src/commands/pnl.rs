//! Options trade PnL command.
//!
//! With all three flags present the trade is priced directly; otherwise
//! the command prompts for each value. Bad input gets a message, not a
//! stack trace, and the process still exits normally.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::Args;
use options_desk_core::{calculate_pnl, PnlFormatter, Trade};
use rust_decimal::Decimal;

const INVALID_INPUT_MSG: &str =
    "Invalid input. Please enter numeric values for prices and an integer for contracts.";

#[derive(Args)]
pub struct PnlArgs {
    /// Entry price per option unit
    #[arg(long)]
    pub entry: Option<Decimal>,

    /// Exit price per option unit
    #[arg(long)]
    pub exit: Option<Decimal>,

    /// Number of contracts
    #[arg(long)]
    pub contracts: Option<i64>,
}

/// Runs the PnL command against real stdin/stdout.
///
/// # Errors
/// Returns an error only for I/O failures on the terminal itself;
/// unparseable input is reported in-band and is not an error.
pub fn run_pnl(args: &PnlArgs) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_pnl_with_io(args, &mut stdin.lock(), &mut stdout)
}

fn run_pnl_with_io<R: BufRead, W: Write>(
    args: &PnlArgs,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(trade) = read_trade(args, input, out)? else {
        writeln!(out, "{INVALID_INPUT_MSG}")?;
        return Ok(());
    };

    match calculate_pnl(trade.entry_price, trade.exit_price, trade.contracts) {
        Ok(result) => write!(out, "{}", PnlFormatter::format(&result))?,
        Err(err) => writeln!(out, "{err}")?,
    }

    Ok(())
}

/// Resolves the trade from flags when all three are given, otherwise by
/// prompting. `None` means a prompt answer did not parse.
fn read_trade<R: BufRead, W: Write>(
    args: &PnlArgs,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Option<Trade>> {
    if let (Some(entry), Some(exit), Some(contracts)) = (args.entry, args.exit, args.contracts) {
        return Ok(Some(Trade::new(entry, exit, contracts)));
    }

    let Some(entry) = prompt_value::<Decimal, _, _>(input, out, "Enter the entry price: ")? else {
        return Ok(None);
    };
    let Some(exit) = prompt_value::<Decimal, _, _>(input, out, "Enter the exit price: ")? else {
        return Ok(None);
    };
    let Some(contracts) =
        prompt_value::<i64, _, _>(input, out, "Enter the number of contracts: ")?
    else {
        return Ok(None);
    };

    Ok(Some(Trade::new(entry, exit, contracts)))
}

fn prompt_value<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> anyhow::Result<Option<T>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim().parse().ok())
}
