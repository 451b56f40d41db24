use crate::cli::ScalesArgs;
use crate::commands::describe::load_registry;
use crate::error::{CliError, Result};

pub fn run(args: ScalesArgs) -> Result<()> {
    let registry = load_registry(args.scales.as_deref())?;
    println!("{:<20} {:<10} {:>5}", "NAME", "SHAPE", "ARITY");
    for name in registry.names() {
        let scale = registry
            .lookup(name)
            .map_err(|e| CliError::Other(e.into()))?;
        println!("{:<20} {:<10} {:>5}", name, scale.shape(), scale.arity());
    }
    Ok(())
}
