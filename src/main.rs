use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use veto::filter::{self, Options};
use veto::operands::reference_contents;
use veto::set::LineSet;

fn main() -> Result<()> {
    let args = veto::args::parsed();

    let contents = reference_contents(args.reference.as_deref())?;
    let reference = LineSet::new(&contents);

    let opts = Options { unique: args.uniq, whitelist: args.whitelist };
    let input = io::stdin().lock();
    if io::stdout().is_terminal() {
        filter::run(input, &reference, opts, io::stdout().lock())?;
    } else {
        filter::run(input, &reference, opts, io::BufWriter::new(io::stdout().lock()))?;
    };
    Ok(())
}
