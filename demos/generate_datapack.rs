use std::error::Error;

use lootswap::runner::run_generate_datapack;

fn main() -> Result<(), Box<dyn Error>> {
    run_generate_datapack()
}
