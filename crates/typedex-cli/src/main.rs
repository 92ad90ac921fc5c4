mod command;
mod data;
mod model;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
