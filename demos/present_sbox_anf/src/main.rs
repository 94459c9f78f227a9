use log::info;
use sbox_anf::known_sboxes::{GIFT_SBOX, PRESENT_SBOX};
use sbox_anf::SBox;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    for (name, entries) in [("PRESENT", PRESENT_SBOX), ("GIFT", GIFT_SBOX)] {
        let sbox = SBox::new(entries.to_vec(), 4)?;
        info!("{} S-box", name);
        let coordinates = sbox.coordinate_anfs()?;
        for coordinate in &coordinates {
            println!("{}", coordinate.report()?);
        }
        for coordinate in &coordinates {
            println!("y{} = {}", coordinate.output_bit(), coordinate.formula());
        }
        println!();
    }
    Ok(())
}
