use dicesim::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fair = d6();
    let loaded = d6();
    loaded.change_weight(6, 5)?;
    println!("loaded die:\n{}", loaded.show());

    let mut game = Game::new([&fair, &loaded])?;
    game.play(12)?;
    game.show(Form::Wide)?.print_table();

    let analyzer = Analyzer::new(&game)?;
    println!("jackpots: {}", analyzer.jackpot());
    analyzer.face_counts_per_roll().print_table();
    analyzer.combo_count().print_table();
    analyzer.permutation_count().print_table();
    Ok(())
}
