use hotel::Registry;
use tracing::instrument;

#[derive(Debug, Default, clap::Parser)]
pub struct Command {
    /// Only print room numbers, one per line
    #[arg(long, short)]
    quiet: bool,
}

impl Command {
    #[instrument(skip(registry))]
    pub fn run(self, registry: &Registry) -> anyhow::Result<()> {
        self.write(registry, &mut std::io::stdout().lock())?;
        Ok(())
    }

    fn write(&self, registry: &Registry, out: &mut impl std::io::Write) -> std::io::Result<()> {
        if self.quiet {
            for room in registry.rooms() {
                writeln!(out, "{}", room.number())?;
            }
        } else {
            writeln!(out, "Rooms:")?;
            for room in registry.rooms() {
                writeln!(out, "{room}")?;
            }
        }
        Ok(())
    }
}
